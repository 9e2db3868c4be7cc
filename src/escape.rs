//! HTML escaping for untrusted message text.
//!
//! Runs once, before scanning, so delimiter parsing only ever sees
//! neutralized text. The entity spellings match what the message display
//! layer has always received, `&#039;` included.

/// Replace the five HTML-significant characters with their entity forms.
///
/// Equivalent to sequential replacement with `&` first: entities introduced
/// here are never escaped a second time. Total and pure.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#039;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_no_double_escaping() {
        // An ampersand already part of an entity is still escaped once,
        // and the entities this function emits contain no further `&`
        // from the input
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_script_tag() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_multibyte_passthrough() {
        assert_eq!(escape_html("héllo 🦀 <ok>"), "héllo 🦀 &lt;ok&gt;");
    }
}
