mod utils;

use proc_macro::{TokenStream, TokenTree};

/// Runs `fn main` on a fresh main loop.
///
/// The body executes on the loop thread before the loop starts waiting for
/// work; the process keeps dispatching until something calls
/// `LoopHandle::quit`. A non-zero quit code becomes the process exit code.
///
/// ```rust,ignore
/// #[idlekit::main(name = "viewer")]
/// fn main() {
///     let handle = idlekit::LoopHandle::current().unwrap();
///     handle.quit(0).unwrap();
/// }
/// ```
#[proc_macro_attribute]
pub fn main(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut tokens: Vec<TokenTree> = item.into_iter().collect();

    let Some((pos, block)) = utils::find_body(&tokens) else {
        return utils::compile_error("main", "expected a function body");
    };

    let builder = utils::builder_expr(utils::attr_value(&attr, "name"));

    let new_block = format!(
        "{{
            let __code = {{
                let mut main_loop = {builder}.expect(\"failed to build main loop\");
                main_loop
                    .run_with(move || {{
                        {block}
                    }})
                    .expect(\"main loop failed\")
            }};
            if __code != 0 {{
                ::std::process::exit(__code);
            }}
        }}"
    );

    if let Err(msg) = utils::replace_body(&mut tokens, pos, &new_block) {
        return utils::compile_error("main", &msg);
    }

    tokens.into_iter().collect()
}

/// Runs a test body on a fresh main loop.
///
/// The body executes on the loop thread; afterwards every command that is
/// already pending (idle callbacks, due timers) is dispatched before the
/// test returns.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut tokens: Vec<TokenTree> = item.into_iter().collect();

    let Some((pos, block)) = utils::find_body(&tokens) else {
        return utils::compile_error("test", "expected a function body");
    };

    let builder = utils::builder_expr(utils::attr_value(&attr, "name"));

    let new_block = format!(
        "{{
            let mut main_loop = {builder}.expect(\"failed to build main loop\");
            main_loop
                .block_on(move || {{ {block} }})
                .expect(\"main loop failed\");
        }}"
    );

    if let Err(msg) = utils::replace_body(&mut tokens, pos, &new_block) {
        return utils::compile_error("test", &msg);
    }

    let test_attr: TokenStream = "#[test]".parse().unwrap_or_default();
    let mut result: Vec<TokenTree> = test_attr.into_iter().collect();
    result.extend(tokens);

    result.into_iter().collect()
}
