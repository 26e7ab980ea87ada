//! Rendering module for converting markup documents to HTML.

mod html;
mod inline;
mod json;
mod options;
mod result;
mod writer;

pub use html::{to_html, to_html_with_stats, HtmlRenderer, LineState};
pub use inline::{InlineRenderer, WordState};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_INDENT_WIDTH, DEFAULT_LINE_WIDTH};
pub use result::{RenderResult, RenderStats};
pub use writer::LineWriter;
