//! Inline classification of whitespace-delimited words.

use super::span::{scan, Marked, Marker, Span};

/// The inline role of one word, with its markers removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word<'a> {
    /// Ordinary text
    Plain(&'a str),
    /// `` `code` ``
    CodeWhole(Span<'a>),
    /// `` `code ``
    CodeOpen(&'a str),
    /// `` code` ``
    CodeClose(Span<'a>),
    /// `[url]`, or a one-word link text `[text]`
    LinkWhole(Span<'a>),
    /// `[first` word of a multi-word link text
    LinkOpen(&'a str),
    /// `last]` word of a multi-word link text
    LinkClose(Span<'a>),
}

/// Classify one word. Code markers take priority over link markers.
pub fn classify_word(word: &str) -> Word<'_> {
    match scan(word, Marker::Code) {
        Marked::Whole(span) => return Word::CodeWhole(span),
        Marked::Open(text) => return Word::CodeOpen(text),
        Marked::Close(span) => return Word::CodeClose(span),
        Marked::Plain => {}
    }
    match scan(word, Marker::Link) {
        Marked::Whole(span) => Word::LinkWhole(span),
        Marked::Open(text) => Word::LinkOpen(text),
        Marked::Close(span) => Word::LinkClose(span),
        Marked::Plain => Word::Plain(word),
    }
}
