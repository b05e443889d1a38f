use std::fmt;

/// Attributes accepted by the Pango `<span>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanAttribute {
    /// A font description such as "Sans Italic 12". Other span attributes
    /// override the matching parts of it.
    FontDesc,
    /// A font family such as "normal", "sans", "serif" or "monospace".
    FontFamily,
    /// Synonym for `font_family`.
    Face,
    /// Size in thousandths of a point, an absolute size ('xx-small' to
    /// 'xx-large') or a relative one ('smaller', 'larger').
    Size,
    /// 'normal', 'oblique' or 'italic'.
    Style,
    /// 'ultralight', 'light', 'normal', 'bold', 'ultrabold', 'heavy' or a
    /// numeric weight.
    Weight,
    /// 'normal' or 'smallcaps'.
    Variant,
    /// Font width, from 'ultracondensed' to 'ultraexpanded'.
    Stretch,
    /// An RGB color like '#00FF00' or a color name like 'red'.
    Foreground,
    /// An RGB color like '#00FF00' or a color name like 'red'.
    Background,
    /// 'single', 'double', 'low' or 'none'.
    Underline,
    /// Vertical displacement from the baseline, in ten thousandths of an em.
    Rise,
    /// 'true' or 'false'.
    Strikethrough,
    /// Whether missing glyphs may come from other fonts. Enabled by default.
    Fallback,
    /// A language code.
    Lang,
}

impl SpanAttribute {
    /// The attribute name as written in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanAttribute::FontDesc => "font_desc",
            SpanAttribute::FontFamily => "font_family",
            SpanAttribute::Face => "face",
            SpanAttribute::Size => "size",
            SpanAttribute::Style => "style",
            SpanAttribute::Weight => "weight",
            SpanAttribute::Variant => "variant",
            SpanAttribute::Stretch => "stretch",
            SpanAttribute::Foreground => "foreground",
            SpanAttribute::Background => "background",
            SpanAttribute::Underline => "underline",
            SpanAttribute::Rise => "rise",
            SpanAttribute::Strikethrough => "strikethrough",
            SpanAttribute::Fallback => "fallback",
            SpanAttribute::Lang => "lang",
        }
    }
}

impl fmt::Display for SpanAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats `text` in a `<span>` carrying `attrs`, in the given order.
///
/// Values are inserted as-is between double quotes.
pub fn span(text: &str, attrs: &[(SpanAttribute, &str)]) -> String {
    let attrs = attrs
        .iter()
        .map(|(attr, value)| format!("{attr}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ");

    format!("<span {attrs}>{text}</span>")
}
