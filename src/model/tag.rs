//! Output tag vocabulary.

/// An HTML tag the renderer opens and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Paragraph,
    Heading1,
    Heading2,
    List,
    ListItem,
    /// Wrapper around an image and its caption
    Section,
    /// Link; its opening form carries an `href` and comes from [`anchor_open`]
    Anchor,
    Code,
}

impl Tag {
    /// Opening markup for the tag.
    ///
    /// `None` for [`Tag::Anchor`], whose opening markup needs an `href`;
    /// build it with [`anchor_open`].
    pub fn open(self) -> Option<&'static str> {
        match self {
            Tag::Paragraph => Some("<p>"),
            Tag::Heading1 => Some("<h1>"),
            Tag::Heading2 => Some("<h2>"),
            Tag::List => Some("<ul>"),
            Tag::ListItem => Some("<li>"),
            Tag::Section => Some("<section>"),
            Tag::Anchor => None,
            Tag::Code => Some("<code>"),
        }
    }

    /// Closing markup for the tag.
    pub fn close(self) -> &'static str {
        match self {
            Tag::Paragraph => "</p>",
            Tag::Heading1 => "</h1>",
            Tag::Heading2 => "</h2>",
            Tag::List => "</ul>",
            Tag::ListItem => "</li>",
            Tag::Section => "</section>",
            Tag::Anchor => "</a>",
            Tag::Code => "</code>",
        }
    }
}

/// Opening anchor tag pointing at `href`.
pub fn anchor_open(href: &str) -> String {
    format!("<a href=\"{}\">", href)
}

/// Image element for an image at `src` described by `alt`.
pub fn image_element(src: &str, alt: &str) -> String {
    format!("<img src=\"{}\" alt=\"{}\">", src, alt)
}
