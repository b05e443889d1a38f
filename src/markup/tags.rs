/// Wraps `text` in `<tag>…</tag>`.
fn tag(tag: &str, text: &str) -> String {
    format!("<{tag}>{text}</{tag}>")
}

/// Larger font.
pub fn big(text: &str) -> String {
    tag("big", text)
}

/// Smaller font.
pub fn small(text: &str) -> String {
    tag("small", text)
}

/// Bold.
pub fn bold(text: &str) -> String {
    tag("b", text)
}

/// Monospace font.
pub fn mono(text: &str) -> String {
    tag("tt", text)
}

/// Italic.
pub fn italic(text: &str) -> String {
    tag("i", text)
}

/// Strikethrough.
pub fn strike(text: &str) -> String {
    tag("s", text)
}

/// Subscript.
pub fn sub(text: &str) -> String {
    tag("sub", text)
}

/// Superscript.
pub fn sup(text: &str) -> String {
    tag("sup", text)
}

/// Single underline.
pub fn underline(text: &str) -> String {
    tag("u", text)
}
