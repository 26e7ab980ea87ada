//! Error types for sitemark library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for sitemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of inline span that can be left open at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Link text opened by a bracketed URL
    Link,
    /// Code span opened by a backtick
    Code,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanKind::Link => write!(f, "link"),
            SpanKind::Code => write!(f, "code span"),
        }
    }
}

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A link or code span was still open when its source line ended.
    #[error("Unclosed {kind} on line {line}: {text}")]
    UnterminatedSpan {
        /// 1-indexed source line number
        line: usize,
        /// Which span was left open
        kind: SpanKind,
        /// The offending source line
        text: String,
    },

    /// A render option cannot produce valid output.
    #[error("Invalid render option: {0}")]
    InvalidOption(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
