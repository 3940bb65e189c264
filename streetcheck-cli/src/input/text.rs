//! Street-name extraction from line-delimited text files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::InputError;

/// Extracts candidate names from plain text, one per line. Lines are
/// trimmed; blank lines are skipped.
#[derive(Debug)]
pub struct TextNameExtractor;

impl TextNameExtractor {
    /// Parse a text file, feeding every non-blank line to `sink`.
    pub fn parse_file(path: &Path, sink: &mut dyn FnMut(&str)) -> Result<(), InputError> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|error| InputError::Io {
            source_name: source_name.clone(),
            error,
        })?;
        Self::parse_reader(&source_name, BufReader::new(file), sink)
    }

    /// Parse line-delimited text from an arbitrary reader.
    pub fn parse_reader(
        source_name: &str,
        reader: impl BufRead,
        sink: &mut dyn FnMut(&str),
    ) -> Result<(), InputError> {
        for line in reader.lines() {
            let line = line.map_err(|error| InputError::Io {
                source_name: source_name.to_string(),
                error,
            })?;
            let line = line.trim();
            if !line.is_empty() {
                sink(line);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_trimmed_and_blank_skipped() {
        let mut names = Vec::new();
        TextNameExtractor::parse_reader(
            "test",
            Cursor::new("Main Street\n  Oak Avenue  \n\n\t\nPine Road"),
            &mut |name| names.push(name.to_string()),
        )
        .unwrap();
        assert_eq!(names, vec!["Main Street", "Oak Avenue", "Pine Road"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TextNameExtractor::parse_file(Path::new("/nonexistent/names.txt"), &mut |_| {});
        assert!(matches!(result, Err(InputError::Io { .. })));
    }
}
