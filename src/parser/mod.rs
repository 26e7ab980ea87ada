//! Markup classification module.
//!
//! Classification is pure: each function looks at one source line or one
//! whitespace-delimited word and decides its role, borrowing the payload
//! from the input.

mod line;
pub mod span;
mod word;

pub use line::{classify_line, LineKind};
pub use span::{Marked, Marker, Span};
pub use word::{classify_word, Word};
