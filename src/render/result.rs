//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Source lines processed
    pub source_lines: u32,

    /// Output lines emitted
    pub output_lines: u32,

    /// Paragraphs rendered
    pub paragraph_count: u32,

    /// Headings rendered (both levels)
    pub heading_count: u32,

    /// Lists opened
    pub list_count: u32,

    /// List items rendered
    pub list_item_count: u32,

    /// Image sections rendered
    pub image_count: u32,

    /// Links opened
    pub link_count: u32,

    /// Code spans opened
    pub code_span_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment source line count.
    pub fn add_source_line(&mut self) {
        self.source_lines += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment link count.
    pub fn add_link(&mut self) {
        self.link_count += 1;
    }

    /// Increment code span count.
    pub fn add_code_span(&mut self) {
        self.code_span_count += 1;
    }
}
