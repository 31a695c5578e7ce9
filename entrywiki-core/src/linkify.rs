//! Title linkification for plain-text content blocks.
//!
//! The source text is scanned exactly once with the registry's alternation
//! pattern. Each run of text is classified as either a literal or a title
//! match, then escaped and emitted exactly once, so an anchor never ends up
//! inside another anchor and already-escaped output is never touched again.

use crate::registry::TitleRegistry;

/// A contiguous run of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that matched no title
    Text(&'a str),
    /// A title occurrence and the URL it links to
    Link { text: &'a str, url: &'a str },
}

impl Segment<'_> {
    /// The original, unescaped source text of this segment
    pub fn source(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Link { text, .. } => *text,
        }
    }

    /// Append the HTML form of this segment to `out`
    pub fn write_html(&self, out: &mut String) {
        match self {
            Segment::Text(text) => {
                html_escape::encode_quoted_attribute_to_string(text, out);
            }
            Segment::Link { text, url } => {
                out.push_str("<a href=\"");
                html_escape::encode_quoted_attribute_to_string(url, out);
                out.push_str("\">");
                html_escape::encode_quoted_attribute_to_string(text, out);
                out.push_str("</a>");
            }
        }
    }
}

/// Split `text` into literal and title segments.
///
/// At each position the longest registered title wins, and a consumed match
/// is never revisited. Concatenating every segment's source text yields
/// `text` unchanged.
pub fn segments<'a>(text: &'a str, registry: &'a TitleRegistry) -> Vec<Segment<'a>> {
    let Some(pattern) = registry.pattern() else {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Text(text)]
        };
    };

    let mut out = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text) {
        let Some(url) = registry.get(m.as_str()) else {
            continue;
        };

        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        out.push(Segment::Link {
            text: m.as_str(),
            url,
        });
        last = m.end();
    }

    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }

    out
}

/// Escape `text` for HTML body content, wrapping every title occurrence in a link.
///
/// # Example
///
/// ```
/// use entrywiki_core::{linkify, TitleRegistry};
///
/// let registry = TitleRegistry::from_pairs([("Virgo", "/pages/Virgo/")]).unwrap();
/// assert_eq!(
///     linkify("Virgo & co", &registry),
///     "<a href=\"/pages/Virgo/\">Virgo</a> &amp; co"
/// );
/// ```
pub fn linkify(text: &str, registry: &TitleRegistry) -> String {
    let mut html = String::with_capacity(text.len() + text.len() / 4);
    for segment in segments(text, registry) {
        segment.write_html(&mut html);
    }
    html
}

/// Escape text for HTML body content without linking anything
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
