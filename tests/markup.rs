use idlekit::markup::{self, SpanAttribute};

#[test]
fn test_escape() {
    assert_eq!(markup::escape("&<>"), "&amp;&lt;&gt;");
    assert_eq!(markup::escape("a &lt; b"), "a &amp;lt; b");
    assert_eq!(markup::escape("plain"), "plain");
}

#[test]
fn test_tags() {
    assert_eq!(markup::big("Big"), "<big>Big</big>");
    assert_eq!(markup::small("Small"), "<small>Small</small>");
    assert_eq!(markup::bold("Bold"), "<b>Bold</b>");
    assert_eq!(markup::mono("Mono"), "<tt>Mono</tt>");
    assert_eq!(markup::italic("Italic"), "<i>Italic</i>");
    assert_eq!(markup::strike("Strike"), "<s>Strike</s>");
    assert_eq!(markup::sub("Sub"), "<sub>Sub</sub>");
    assert_eq!(markup::sup("Sup"), "<sup>Sup</sup>");
    assert_eq!(markup::underline("Underline"), "<u>Underline</u>");
}

#[test]
fn test_nested_tags() {
    assert_eq!(
        markup::bold(&markup::italic(&markup::escape("<x>"))),
        "<b><i>&lt;x&gt;</i></b>"
    );
}

#[test]
fn test_span() {
    assert_eq!(
        markup::span("Span", &[(SpanAttribute::Background, "red")]),
        "<span background=\"red\">Span</span>"
    );

    assert_eq!(
        markup::span(
            "warn",
            &[
                (SpanAttribute::Weight, "bold"),
                (SpanAttribute::Foreground, "#FF0000"),
            ]
        ),
        "<span weight=\"bold\" foreground=\"#FF0000\">warn</span>"
    );
}

#[test]
fn test_span_attribute_names() {
    assert_eq!(SpanAttribute::FontDesc.as_str(), "font_desc");
    assert_eq!(SpanAttribute::FontFamily.to_string(), "font_family");
    assert_eq!(SpanAttribute::Strikethrough.as_str(), "strikethrough");
    assert_eq!(SpanAttribute::Lang.as_str(), "lang");
}

#[test]
fn test_uri() {
    assert_eq!(markup::uri("URI", "text"), "<a href=\"URI\">text</a>");
}

#[test]
fn test_list() {
    assert_eq!(markup::list(["List", "item 2"]), " * List\n * item 2");
    assert_eq!(markup::list(vec![String::from("one")]), " * one");
    assert_eq!(markup::list(Vec::<&str>::new()), " * ");
}
