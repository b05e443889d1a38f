use proc_macro::{Delimiter, TokenStream, TokenTree};

/// Locates the body of the annotated function.
///
/// Returns the index of the last brace-delimited group in `tokens`
/// together with the body source, or `None` when the item has no body.
pub(crate) fn find_body(tokens: &[TokenTree]) -> Option<(usize, String)> {
    let pos = tokens
        .iter()
        .rposition(|t| matches!(t, TokenTree::Group(g) if g.delimiter() == Delimiter::Brace))?;

    match &tokens[pos] {
        TokenTree::Group(g) => Some((pos, g.stream().to_string())),
        _ => None,
    }
}

/// Extracts the value of a `key = "value"` pair from attribute arguments.
///
/// Pairs are separated by commas. Surrounding quotes are stripped.
pub(crate) fn attr_value(attr: &TokenStream, key: &str) -> Option<String> {
    let attr = attr.to_string();

    attr.split(',').find_map(|part| {
        let value = part.trim().strip_prefix(key)?.trim_start();
        let value = value.strip_prefix('=')?.trim();
        Some(value.trim_matches('"').to_string())
    })
}

/// Builds the `MainLoopBuilder` expression for the generated code.
pub(crate) fn builder_expr(name: Option<String>) -> String {
    let mut builder = String::from("::idlekit::MainLoopBuilder::new()");

    if let Some(name) = name {
        builder.push_str(&format!(".name({:?})", name));
    }

    builder.push_str(".build()");
    builder
}

/// Replaces the body group at `pos` with `source`.
pub(crate) fn replace_body(tokens: &mut [TokenTree], pos: usize, source: &str) -> Result<(), String> {
    let stream: TokenStream = source.parse().map_err(|e| format!("{e}"))?;
    tokens[pos] = TokenTree::Group(proc_macro::Group::new(Delimiter::Brace, stream));
    Ok(())
}

/// Turns an error message into a `compile_error!` invocation.
pub(crate) fn compile_error(macro_name: &str, msg: &str) -> TokenStream {
    format!("compile_error!({:?});", format!("{macro_name} macro error: {msg}"))
        .parse()
        .unwrap_or_default()
}
