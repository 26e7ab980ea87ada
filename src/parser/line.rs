//! Block-level classification of source lines.

/// The block role of one source line, with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line; separates blocks
    Empty,
    /// `# text`
    Heading1(&'a str),
    /// `## text`
    Heading2(&'a str),
    /// `- text`
    ListItem(&'a str),
    /// `<name>`; the payload is the image base name
    Image(&'a str),
    /// Anything else
    Paragraph(&'a str),
}

impl LineKind<'_> {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Empty => "empty",
            LineKind::Heading1(_) => "h1",
            LineKind::Heading2(_) => "h2",
            LineKind::ListItem(_) => "list item",
            LineKind::Image(_) => "image",
            LineKind::Paragraph(_) => "paragraph",
        }
    }
}

/// Classify one source line (without its terminator).
///
/// Only a line with no characters at all is empty; a line of spaces is a
/// paragraph with no words. An image line has its first and last characters
/// removed without checking that the last one is `>`.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        LineKind::Empty
    } else if let Some(rest) = line.strip_prefix("# ") {
        LineKind::Heading1(rest.trim())
    } else if let Some(rest) = line.strip_prefix("## ") {
        LineKind::Heading2(rest.trim())
    } else if let Some(rest) = line.strip_prefix("- ") {
        LineKind::ListItem(rest.trim())
    } else if line.starts_with('<') {
        let mut chars = line.trim().chars();
        chars.next();
        chars.next_back();
        LineKind::Image(chars.as_str())
    } else {
        LineKind::Paragraph(line.trim())
    }
}
