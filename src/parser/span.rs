//! Marker scanning shared by word classification and inline rendering.
//!
//! A closing marker may be followed by exactly one extra character, so that
//! punctuation attached to a span (`` `code`, `` or `[text].`) stays outside
//! the rendered tag.

/// A family of inline markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Backtick-delimited code
    Code,
    /// Bracket-delimited link URL or link text
    Link,
}

impl Marker {
    /// Character that opens a span.
    pub fn open(self) -> char {
        match self {
            Marker::Code => '`',
            Marker::Link => '[',
        }
    }

    /// Character that closes a span.
    pub fn close(self) -> char {
        match self {
            Marker::Code => '`',
            Marker::Link => ']',
        }
    }
}

/// Text of a word with its closing marker removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Content without markers
    pub text: &'a str,
    /// Character that followed the closing marker, if any
    pub trailing: Option<char>,
}

impl Span<'_> {
    /// Render the span content followed by `close_tag` and any trailing character.
    pub fn closed_with(&self, close_tag: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + close_tag.len() + 4);
        out.push_str(self.text);
        out.push_str(close_tag);
        if let Some(c) = self.trailing {
            out.push(c);
        }
        out
    }
}

/// How a word relates to one marker family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marked<'a> {
    /// Neither opens nor closes
    Plain,
    /// Opens and closes within the word
    Whole(Span<'a>),
    /// Opens only; holds the text after the opening marker
    Open(&'a str),
    /// Closes only
    Close(Span<'a>),
}

/// Strip a closing marker (and one trailing character after it) from `word`.
///
/// The last character is checked first, so `` a`` `` keeps no trailing
/// character even though its second-to-last character is also a marker.
pub fn strip_closing(word: &str, close: char) -> Option<Span<'_>> {
    let mut chars = word.chars();
    let last = chars.next_back()?;
    if last == close {
        return Some(Span {
            text: chars.as_str(),
            trailing: None,
        });
    }
    if chars.next_back()? == close {
        return Some(Span {
            text: chars.as_str(),
            trailing: Some(last),
        });
    }
    None
}

/// Scan `word` for one marker family.
pub fn scan(word: &str, marker: Marker) -> Marked<'_> {
    let open = marker.open();
    let opens = word.starts_with(open);
    match (opens, strip_closing(word, marker.close())) {
        (true, Some(span)) => Marked::Whole(Span {
            // A lone marker is both the opening and the closing one.
            text: span.text.strip_prefix(open).unwrap_or(span.text),
            trailing: span.trailing,
        }),
        (true, None) => Marked::Open(&word[open.len_utf8()..]),
        (false, Some(span)) => Marked::Close(span),
        (false, None) => Marked::Plain,
    }
}
