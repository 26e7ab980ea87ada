//! # sitemark
//!
//! Converts a small, line-oriented markup dialect into indented HTML for a
//! static site.
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> sitemark::Result<()> {
//!     let html = sitemark::convert_str("# Hello World\n")?;
//!     assert_eq!(html, "<h1>\n  Hello World\n</h1>\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Syntax
//!
//! - `# text` and `## text`: headings
//! - `- text`: list item; consecutive items share one list
//! - `<name>`: image section showing `img/name.png` with a caption
//! - `` `code` ``: inline code, may span several words of one line
//! - `[url] [link text]`: link; the URL comes first and the text may span
//!   several words of one line
//! - any other line: paragraph
//!
//! Output lines are indented two spaces per nesting level and wrapped at 71
//! characters. A link or code span left open at the end of a line is an
//! error.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result, SpanKind};
pub use model::{Document, Tag};
pub use parser::{classify_line, classify_word, LineKind, Word};
pub use render::{
    HtmlRenderer, JsonFormat, RenderOptions, RenderResult, RenderStats, DEFAULT_INDENT_WIDTH,
    DEFAULT_LINE_WIDTH,
};

use std::io::Read;
use std::path::Path;

/// Split markup text into a document.
pub fn parse_str(text: &str) -> Document {
    Document::parse(text)
}

/// Read a markup document from a file.
///
/// # Example
///
/// ```no_run
/// use sitemark::parse_file;
///
/// let doc = parse_file("in.txt").unwrap();
/// println!("Lines: {}", doc.line_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    Document::from_path(path)
}

/// Read a markup document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Document::from_reader(reader)
}

/// Convert markup text to HTML with default options.
pub fn convert_str(text: &str) -> Result<String> {
    render::to_html(&parse_str(text), &RenderOptions::default())
}

/// Convert a markup file to HTML with default options.
///
/// # Example
///
/// ```no_run
/// use sitemark::convert_file;
///
/// let html = convert_file("in.txt").unwrap();
/// std::fs::write("out.txt", html).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    convert_file_with_options(path, &RenderOptions::default())
}

/// Convert a markup file to HTML with custom options.
///
/// # Example
///
/// ```no_run
/// use sitemark::{convert_file_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_line_width(79)
///     .with_image_dir("assets");
/// let html = convert_file_with_options("in.txt", &options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}
