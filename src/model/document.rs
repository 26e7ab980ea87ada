//! Document-level types.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A markup source document.
///
/// Lines are stored without their terminators; a `\r\n` terminator is
/// treated the same as `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source lines in order
    pub lines: Vec<String>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split markup text into a document.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Read a whole document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut text = String::new();
        BufReader::new(reader).read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    /// Read a whole document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Number of source lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over the source lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_terminators() {
        let doc = Document::parse("# Title\r\n\nbody text\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines[0], "# Title");
        assert_eq!(doc.lines[1], "");
        assert_eq!(doc.lines[2], "body text");
    }

    #[test]
    fn test_lines_iterates_in_order() {
        let doc = Document::parse("- one\n- two\n\n");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines, vec!["- one", "- two", ""]);
    }

    #[test]
    fn test_from_reader() {
        let doc = Document::from_reader("a\nb\n".as_bytes()).unwrap();
        assert_eq!(doc.lines, vec!["a".to_string(), "b".to_string()]);
    }
}
