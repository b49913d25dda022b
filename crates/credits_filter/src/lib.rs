// crates/credits_filter/src/lib.rs

use std::collections::HashSet;

use credit_markers::{is_comment, is_header, separator_line};
use tracing::{debug, trace};

/// Counters gathered during a single filtering pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the input.
    pub lines_read: usize,
    /// Input lines copied to the output (separators not included).
    pub lines_retained: usize,
    /// Blocks opened, i.e. separator lines written.
    pub blocks_opened: usize,
}

/// Keeps the lines of every package block in a credits listing.
///
/// A line containing "Package" opens a block (prefixed by a 100 character
/// separator) unless that exact line has already been retained. While a block
/// is open, lines are copied until one containing '#' is met; that line is
/// dropped and the block closes.
///
/// Both checks run on every line in that order, so a header line that also
/// contains '#' writes a separator and is then dropped, closing the block it
/// just opened.
pub fn filter_credit_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    filter_credit_lines_with_stats(lines).0
}

/// Same as [`filter_credit_lines`], also returning the pass counters.
pub fn filter_credit_lines_with_stats<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, FilterStats) {
    let mut retained: Vec<String> = Vec::new();
    // Mirrors `retained` for the duplicate-header lookup.
    let mut seen: HashSet<String> = HashSet::new();
    let mut stats = FilterStats::default();
    let mut collecting = false;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        stats.lines_read += 1;

        if is_header(line) {
            if seen.contains(line) {
                debug!(line = index + 1, header = line, "skipping header already retained");
            } else {
                debug!(line = index + 1, header = line, "opening block");
                collecting = true;
                let separator = separator_line();
                seen.insert(separator.clone());
                retained.push(separator);
                stats.blocks_opened += 1;
            }
        }

        if collecting {
            if is_comment(line) {
                trace!(line = index + 1, "comment line closes block");
                collecting = false;
            } else {
                seen.insert(line.to_string());
                retained.push(line.to_string());
                stats.lines_retained += 1;
            }
        }
    }

    (retained, stats)
}

/// Splits raw credits text into lines and filters them.
///
/// Accepts both "\n" and "\r\n" terminators.
pub fn filter_credits(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    filter_credit_lines(&lines)
}

pub mod processor;
pub mod utils;

pub use processor::{process_credits_with_processor, CreditsProcessor, DefaultCreditsProcessor};
pub use utils::file_utils::{read_credit_lines, write_cleaned_lines};
