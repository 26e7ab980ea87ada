//! Indentation-aware, width-limited output buffer.
//!
//! The writer owns the output text, the line currently being built, and a
//! stack of open tags. Indent depth is the height of that stack, so every
//! opened tag is closed exactly once and closing always emits the markup of
//! the innermost open tag.

use crate::model::{anchor_open, Tag};

use super::RenderOptions;

/// Output buffer that wraps words and indents lines by nesting depth.
#[derive(Debug)]
pub struct LineWriter {
    output: String,
    /// Line in progress: indent prefix followed by content
    line: String,
    /// Byte length of the indent prefix in `line`
    prefix_len: usize,
    /// Length of `line` in characters
    line_chars: usize,
    open_tags: Vec<Tag>,
    line_width: usize,
    indent_width: usize,
    lines_written: usize,
}

impl LineWriter {
    /// Create a writer with the given width limit and indent step.
    pub fn new(line_width: usize, indent_width: usize) -> Self {
        Self {
            output: String::new(),
            line: String::new(),
            prefix_len: 0,
            line_chars: 0,
            open_tags: Vec::new(),
            line_width,
            indent_width,
            lines_written: 0,
        }
    }

    /// Create a writer configured from render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.line_width, options.indent_width)
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.open_tags.len()
    }

    /// Number of lines emitted so far.
    pub fn line_count(&self) -> usize {
        self.lines_written
    }

    /// Output emitted so far, excluding the line in progress.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Emit the opening markup of `tag` on its own line and nest one level deeper.
    ///
    /// An anchor needs its `href` and opens through
    /// [`open_anchor`](Self::open_anchor); passing [`Tag::Anchor`] here
    /// opens nothing.
    pub fn open(&mut self, tag: Tag) {
        let Some(markup) = tag.open() else {
            log::warn!("{:?} has no plain opening markup; not opened", tag);
            return;
        };
        self.emit_line(markup);
        self.push(tag);
    }

    /// Emit an anchor pointing at `href` on its own line and nest one level deeper.
    pub fn open_anchor(&mut self, href: &str) {
        self.emit_line(&anchor_open(href));
        self.push(Tag::Anchor);
    }

    /// Close the innermost open tag on its own line at the reduced depth.
    pub fn close(&mut self) -> Option<Tag> {
        self.flush();
        let tag = self.open_tags.pop()?;
        self.restart();
        self.emit_line(tag.close());
        Some(tag)
    }

    /// Append `word`, which carries the anchor closing tag, and leave the anchor.
    ///
    /// The closing tag stays on the current line, which keeps its deeper
    /// indent until it is flushed.
    pub fn close_anchor(&mut self, word: &str) {
        self.append_word(word);
        let closed = self.open_tags.pop();
        debug_assert_eq!(closed, Some(Tag::Anchor));
    }

    /// Emit `text` on its own line at the current depth.
    pub fn emit_line(&mut self, text: &str) {
        self.flush();
        self.output.push_str(&self.line);
        self.output.push_str(text);
        self.output.push('\n');
        self.lines_written += 1;
    }

    /// Append a word to the line in progress, wrapping first if it would
    /// push the line past the width limit.
    pub fn append_word(&mut self, word: &str) {
        let word_chars = word.chars().count();
        if self.has_content() && self.line_chars + 1 + word_chars > self.line_width {
            self.flush();
        }
        if self.has_content() {
            self.line.push(' ');
            self.line_chars += 1;
        }
        self.line.push_str(word);
        self.line_chars += word_chars;
    }

    /// Finish the line in progress.
    pub fn end_line(&mut self) {
        self.flush();
    }

    /// Close every tag still open and return the output.
    pub fn finish(mut self) -> String {
        while self.close().is_some() {}
        self.flush();
        self.output
    }

    fn push(&mut self, tag: Tag) {
        self.open_tags.push(tag);
        self.restart();
    }

    fn has_content(&self) -> bool {
        self.line.len() > self.prefix_len
    }

    /// Write the line in progress if it holds any words, then restart it.
    /// A line holding only its indent is dropped.
    fn flush(&mut self) {
        if self.has_content() {
            self.output.push_str(&self.line);
            self.output.push('\n');
            self.lines_written += 1;
        }
        self.restart();
    }

    fn restart(&mut self) {
        let indent = self.depth() * self.indent_width;
        self.line.clear();
        self.line.extend(std::iter::repeat(' ').take(indent));
        self.prefix_len = indent;
        self.line_chars = indent;
    }
}
