//! Inline rendering of the words of one source line.

use crate::error::SpanKind;
use crate::model::Tag;
use crate::parser::span::strip_closing;
use crate::parser::{classify_word, Marker, Span, Word};

use super::{LineWriter, RenderStats};

const CODE_OPEN: &str = "<code>";

/// Span state carried from one word to the next within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordState {
    /// No span open
    #[default]
    None,
    /// A link URL was seen; its text has not been closed yet
    InLink,
    /// A multi-word code span is open
    InCode,
}

impl WordState {
    /// The kind of span left open, if any.
    pub fn open_span(self) -> Option<SpanKind> {
        match self {
            WordState::None => None,
            WordState::InLink => Some(SpanKind::Link),
            WordState::InCode => Some(SpanKind::Code),
        }
    }
}

/// Renders the words of a line through a [`LineWriter`], tracking open
/// link and code spans.
#[derive(Debug, Default)]
pub struct InlineRenderer {
    state: WordState,
}

impl InlineRenderer {
    /// Create a new inline renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Span state after the last rendered word.
    pub fn state(&self) -> WordState {
        self.state
    }

    /// Render the words of `text` and finish the output line.
    ///
    /// Returns the span state at the end of the line; anything other than
    /// [`WordState::None`] means a span was left open.
    pub fn render(
        &mut self,
        writer: &mut LineWriter,
        stats: &mut RenderStats,
        text: &str,
    ) -> WordState {
        self.state = WordState::None;
        for word in text.split_whitespace() {
            self.render_word(writer, stats, word);
        }
        writer.end_line();
        self.state
    }

    fn render_word(&mut self, writer: &mut LineWriter, stats: &mut RenderStats, word: &str) {
        let kind = classify_word(word);
        log::trace!("word {:?} -> {:?}", word, kind);

        match (self.state, kind) {
            (_, Word::Plain(text)) => writer.append_word(text),

            // Inside a code span every marker is literal until one closes it.
            (WordState::InCode, Word::CodeClose(span)) => self.close_code(writer, &span),
            (WordState::InCode, Word::CodeWhole(_)) => {
                // The opening backtick is literal here; only the closing one counts.
                match strip_closing(word, Marker::Code.close()) {
                    Some(span) => self.close_code(writer, &span),
                    None => writer.append_word(word),
                }
            }
            (WordState::InCode, Word::LinkWhole(_) | Word::LinkOpen(_) | Word::LinkClose(_)) => {
                writer.append_word(word)
            }

            (WordState::None | WordState::InLink, Word::CodeWhole(span)) => {
                stats.add_code_span();
                let code = format!("{}{}", CODE_OPEN, span.closed_with(Tag::Code.close()));
                writer.append_word(&code);
            }
            (WordState::None, Word::CodeOpen(text)) => {
                stats.add_code_span();
                writer.append_word(&format!("{}{}", CODE_OPEN, text));
                self.state = WordState::InCode;
            }

            (WordState::None, Word::LinkWhole(url)) => {
                if let Some(c) = url.trailing {
                    log::warn!("dropping {:?} after link URL {:?}", c, url.text);
                }
                stats.add_link();
                writer.open_anchor(url.text);
                self.state = WordState::InLink;
            }
            (WordState::InLink, Word::LinkWhole(span) | Word::LinkClose(span)) => {
                writer.close_anchor(&span.closed_with(Tag::Anchor.close()));
                self.state = WordState::None;
            }
            (WordState::InLink, Word::LinkOpen(text)) => writer.append_word(text),

            // Markers that cannot act in the current state.
            (state, kind) => {
                log::warn!("{:?} in state {:?} rendered as plain text", kind, state);
                writer.append_word(word);
            }
        }
    }

    fn close_code(&mut self, writer: &mut LineWriter, span: &Span<'_>) {
        writer.append_word(&span.closed_with(Tag::Code.close()));
        self.state = WordState::None;
    }
}
