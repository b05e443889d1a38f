//! Pango markup formatting.
//!
//! Helpers that wrap text in the markup tags understood by Pango-based
//! labels. Text coming from outside should go through [`escape`] before
//! being wrapped, or a stray `<` breaks the whole label.
//!
//! ```rust,ignore
//! use idlekit::markup::{self, SpanAttribute};
//!
//! let title = markup::bold(&markup::escape(user_input));
//! let warn = markup::span("low disk", &[(SpanAttribute::Foreground, "red")]);
//! ```

mod span;
mod tags;

pub use span::{SpanAttribute, span};
pub use tags::{big, bold, italic, mono, small, strike, sub, sup, underline};

/// Escapes `&`, `<` and `>` so `text` displays literally.
pub fn escape(text: &str) -> String {
    // `&` first, or the entities produced below would be escaped again.
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Formats a link.
pub fn uri(uri: &str, text: &str) -> String {
    format!("<a href=\"{uri}\">{text}</a>")
}

/// Formats lines as a bullet list, one `" * "` prefixed item per line.
///
/// An empty list yields a lone bullet.
pub fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const BULLET: &str = " * ";

    let mut out = String::from(BULLET);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(BULLET);
        }
        out.push_str(item.as_ref());
    }
    out
}
