// crates/credits_filter/src/utils/file_utils.rs

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

const UTF8_BOM: char = '\u{feff}';

/// Reads the whole credits file and splits it into lines.
///
/// The file is closed before this returns. A leading UTF-8 byte order mark is
/// dropped so it never becomes part of the first line.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its content is
/// not valid UTF-8.
pub fn read_credit_lines<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let file_path_ref = file_path.as_ref();
    let bytes = {
        let mut file = File::open(file_path_ref)
            .with_context(|| format!("Error opening file {}", file_path_ref.display()))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Error reading file {}", file_path_ref.display()))?;
        bytes
    };
    let content = String::from_utf8(bytes)
        .with_context(|| format!("File {} is not valid UTF-8", file_path_ref.display()))?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    Ok(content.lines().map(str::to_string).collect())
}

/// Creates (or truncates) `file_path` and writes each line followed by "\n".
///
/// An empty slice leaves an empty file behind.
pub fn write_cleaned_lines<P: AsRef<Path>, S: AsRef<str>>(file_path: P, lines: &[S]) -> Result<()> {
    let file_path_ref = file_path.as_ref();
    let file = File::create(file_path_ref)
        .with_context(|| format!("Error writing file {}", file_path_ref.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .with_context(|| format!("Error writing file {}", file_path_ref.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Error writing file {}", file_path_ref.display()))?;
    Ok(())
}
