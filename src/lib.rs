pub mod escape;
pub mod inline_parser;

pub use escape::escape_html;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders one chat message as safe inline HTML.
///
/// The message text is escaped first, so HTML-significant characters from
/// the input can never reach the output raw, and is then scanned once left
/// to right for markup delimiters. Malformed markup degrades to literal
/// text; this function cannot fail.
///
/// # Examples
///
/// ```
/// use chatmark::render_inline_markup;
///
/// let html = render_inline_markup("**bold** and `code`");
/// assert_eq!(html, "<strong>bold</strong> and <code>code</code>");
/// ```
///
/// # Arguments
///
/// * `text` - The raw, untrusted message text
pub fn render_inline_markup(text: &str) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    // Step 1: neutralize HTML-significant characters so the scanner only
    // ever sees inert text
    let escaped = escape::escape_html(text);

    // Step 2: single pass over the escaped text, resolving delimiters
    inline_parser::scan(&escaped)
}
