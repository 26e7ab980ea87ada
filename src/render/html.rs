//! HTML rendering for markup documents.

use crate::error::{Error, Result};
use crate::model::{image_element, Document, Tag};
use crate::parser::{classify_line, LineKind};

use super::{InlineRenderer, LineWriter, RenderOptions, RenderResult, RenderStats, WordState};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Block state carried from one source line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// No block spans lines
    #[default]
    None,
    /// A list is open and waiting for more items
    InList,
}

/// Line-by-line HTML renderer.
///
/// Lines can be fed one at a time with [`render_line`](Self::render_line)
/// and the output collected with [`finish`](Self::finish), or a whole
/// document rendered with [`render`](Self::render).
pub struct HtmlRenderer {
    options: RenderOptions,
    writer: LineWriter,
    inline: InlineRenderer,
    state: LineState,
    stats: RenderStats,
    line_number: usize,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            writer: LineWriter::from_options(&options),
            options,
            inline: InlineRenderer::new(),
            state: LineState::None,
            stats: RenderStats::new(),
            line_number: 0,
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)?;
        Ok(self.finish())
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.render_internal(doc)?;
        let (content, stats) = self.finish_with_stats();
        Ok(RenderResult::new(content, stats))
    }

    /// Block state after the last rendered line.
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Current nesting depth of the output.
    pub fn depth(&self) -> usize {
        self.writer.depth()
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    fn render_internal(&mut self, doc: &Document) -> Result<()> {
        self.options.validate()?;
        for line in doc.lines() {
            self.render_line(line)?;
        }
        Ok(())
    }

    /// Render one source line (without its terminator).
    ///
    /// Fails with [`Error::UnterminatedSpan`] when a link or code span is
    /// still open at the end of the line; the output is unusable after that.
    pub fn render_line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        self.stats.add_source_line();

        let kind = classify_line(line);
        log::debug!("line {}: {}", self.line_number, kind.name());

        // Lists are the only block that spans lines.
        if self.state == LineState::InList && !matches!(kind, LineKind::ListItem(_)) {
            self.close_list();
        }

        let words = match kind {
            LineKind::Empty => WordState::None,
            LineKind::Paragraph(text) => {
                self.stats.add_paragraph();
                self.render_tagged(Tag::Paragraph, text)
            }
            LineKind::Heading1(text) => {
                self.stats.add_heading();
                self.render_tagged(Tag::Heading1, text)
            }
            LineKind::Heading2(text) => {
                self.stats.add_heading();
                self.render_tagged(Tag::Heading2, text)
            }
            LineKind::ListItem(text) => {
                if self.state != LineState::InList {
                    log::debug!("line {}: opening list", self.line_number);
                    self.stats.add_list();
                    self.writer.open(Tag::List);
                    self.state = LineState::InList;
                }
                self.stats.add_list_item();
                self.render_tagged(Tag::ListItem, text)
            }
            LineKind::Image(name) => {
                self.render_image(name);
                WordState::None
            }
        };

        if let Some(kind) = words.open_span() {
            return Err(Error::UnterminatedSpan {
                line: self.line_number,
                kind,
                text: line.to_string(),
            });
        }

        debug_assert_eq!(
            self.writer.depth(),
            usize::from(self.state == LineState::InList)
        );
        Ok(())
    }

    /// Close a trailing list and return the output.
    pub fn finish(self) -> String {
        self.finish_with_stats().0
    }

    fn finish_with_stats(mut self) -> (String, RenderStats) {
        if self.state == LineState::InList {
            self.close_list();
        }
        self.stats.output_lines = self.writer.line_count() as u32;
        (self.writer.finish(), self.stats)
    }

    fn close_list(&mut self) {
        log::debug!("line {}: closing list", self.line_number);
        let closed = self.writer.close();
        debug_assert_eq!(closed, Some(Tag::List));
        self.state = LineState::None;
    }

    /// Wrap the words of `text` in `tag`. The tag is left open when a span
    /// is, since the line is then rejected.
    fn render_tagged(&mut self, tag: Tag, text: &str) -> WordState {
        self.writer.open(tag);
        let words = self.inline.render(&mut self.writer, &mut self.stats, text);
        if words == WordState::None {
            self.writer.close();
        }
        words
    }

    fn render_image(&mut self, name: &str) {
        self.stats.add_image();
        let src = self.options.image_src(name);
        self.writer.open(Tag::Section);
        self.writer.emit_line(&image_element(&src, name));
        self.writer.open(Tag::Paragraph);
        // The caption is one word so it is never wrapped, and an empty name
        // leaves no caption line.
        self.writer.append_word(name);
        self.writer.end_line();
        self.writer.close();
        self.writer.close();
    }
}
