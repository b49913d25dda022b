// crates/credits_filter/src/processor/file_processor.rs

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::utils::file_utils::{read_credit_lines, write_cleaned_lines};
use crate::{filter_credit_lines_with_stats, FilterStats};

/// Trait that abstracts one cleaning pass from an input file to an output file.
pub trait CreditsProcessor {
    fn process(&self, input: &Path, output: &Path) -> Result<FilterStats>;
}

/// Reads the input completely, filters it, then writes the output.
///
/// The input is closed before the output is created. A failed write may leave
/// the output truncated.
pub struct DefaultCreditsProcessor;

impl CreditsProcessor for DefaultCreditsProcessor {
    fn process(&self, input: &Path, output: &Path) -> Result<FilterStats> {
        info!(input = %input.display(), "reading credits");
        let lines = read_credit_lines(input)?;

        let (retained, stats) = filter_credit_lines_with_stats(&lines);

        write_cleaned_lines(output, &retained)?;
        info!(
            output = %output.display(),
            lines_read = stats.lines_read,
            lines_retained = stats.lines_retained,
            blocks = stats.blocks_opened,
            "wrote cleaned credits"
        );
        Ok(stats)
    }
}

/// Public API function to run a pass with a provided `CreditsProcessor` implementation.
pub fn process_credits_with_processor<P: AsRef<Path>, Q: AsRef<Path>>(
    processor: &dyn CreditsProcessor,
    input: P,
    output: Q,
) -> Result<FilterStats> {
    processor.process(input.as_ref(), output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::fs;
    use tempfile::TempDir;

    /// Dummy processor that always returns an error.
    pub struct FailingProcessor;

    impl CreditsProcessor for FailingProcessor {
        fn process(&self, _input: &Path, _output: &Path) -> Result<FilterStats> {
            Err(anyhow!("Simulated processing failure"))
        }
    }

    #[test]
    fn test_default_processor_success() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Credits.txt");
        let output = dir.path().join("Cleaned Credits.txt");
        fs::write(&input, "Header\nPackage A\nline1\n#end\nPackage B\nline2\n#end\n").unwrap();

        let stats = DefaultCreditsProcessor.process(&input, &output).unwrap();

        let sep = "#".repeat(100);
        let expected = format!("{sep}\nPackage A\nline1\n{sep}\nPackage B\nline2\n");
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
        assert_eq!(stats.blocks_opened, 2);
        assert_eq!(stats.lines_retained, 4);
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Credits.txt");
        let output = dir.path().join("Cleaned Credits.txt");
        fs::write(&output, "previous run\n").unwrap();

        let result = DefaultCreditsProcessor.process(&input, &output);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous run\n");
    }

    #[test]
    fn test_failing_processor() {
        let dir = TempDir::new().unwrap();
        let result = process_credits_with_processor(
            &FailingProcessor,
            dir.path().join("in.txt"),
            dir.path().join("out.txt"),
        );
        assert!(result.is_err());
    }
}
