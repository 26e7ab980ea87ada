//! Rendering options and configuration.

use crate::error::{Error, Result};

/// Default maximum length of an emitted line, in characters.
pub const DEFAULT_LINE_WIDTH: usize = 71;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Options for rendering markup to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum emitted line length in characters (a single longer word is kept whole)
    pub line_width: usize,

    /// Spaces per nesting level
    pub indent_width: usize,

    /// Directory prefix for image sources (e.g., "img")
    pub image_dir: String,

    /// File extension for image sources, without the dot
    pub image_extension: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum line width.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the image directory prefix.
    pub fn with_image_dir(mut self, dir: impl Into<String>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Set the image file extension.
    pub fn with_image_extension(mut self, ext: impl Into<String>) -> Self {
        self.image_extension = ext.into();
        self
    }

    /// Source path of the image named `name`.
    pub fn image_src(&self, name: &str) -> String {
        let ext = self.image_extension.trim_start_matches('.');
        let file = if ext.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", name, ext)
        };
        let dir = self.image_dir.trim_end_matches('/');
        if dir.is_empty() {
            file
        } else {
            format!("{}/{}", dir, file)
        }
    }

    /// Check that the options can produce well-formed output.
    pub fn validate(&self) -> Result<()> {
        if self.line_width == 0 {
            return Err(Error::InvalidOption("line width must be positive".into()));
        }
        if self.indent_width >= self.line_width {
            return Err(Error::InvalidOption(format!(
                "indent width {} does not fit in line width {}",
                self.indent_width, self.line_width
            )));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            indent_width: DEFAULT_INDENT_WIDTH,
            image_dir: "img".to_string(),
            image_extension: "png".to_string(),
        }
    }
}
