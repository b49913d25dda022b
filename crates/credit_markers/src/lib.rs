// crates/credit_markers/src/lib.rs

//! Literal markers shared by the credits cleaning tool‑chain.

/// Substring that opens a retained block.
pub const HEADER_MARKER: &str = "Package";

/// Character that closes a retained block.
pub const COMMENT_MARKER: char = '#';

/// Number of marker characters in a generated separator line.
pub const SEPARATOR_WIDTH: usize = 100;

/// Returns the separator inserted before every newly opened block.
pub fn separator_line() -> String {
    COMMENT_MARKER.to_string().repeat(SEPARATOR_WIDTH)
}

/// True when the line contains the header marker anywhere (case-sensitive).
pub fn is_header(line: &str) -> bool {
    line.contains(HEADER_MARKER)
}

/// True when the line contains the comment marker anywhere.
pub fn is_comment(line: &str) -> bool {
    line.contains(COMMENT_MARKER)
}
