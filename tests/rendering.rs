//! Cross-cutting properties of the rendering pipeline.
//!
//! Scenario coverage lives next to the scanner modules; these tests sweep
//! a corpus of representative and adversarial messages and assert the
//! properties that must hold for every input: determinism, the security
//! invariant, and tag balance.

use chatmark::render_inline_markup;

/// Tag fragments the renderer may emit, compound forms first so stripping
/// never leaves partial matches behind.
const TAG_FRAGMENTS: [&str; 10] = [
    "<pre><code>",
    "</code></pre>",
    "<strong>",
    "</strong>",
    "<code>",
    "</code>",
    "<em>",
    "</em>",
    "<u>",
    "</u>",
];

const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"];

fn corpus() -> Vec<&'static str> {
    vec![
        "",
        "plain message",
        "**bold** and *italic*",
        "_under_ and __line__",
        "`code` and ``block``",
        "*a**b*",
        "**a *b* c**",
        "**bold*",
        "__under_",
        "* *",
        "`` ``",
        "****",
        "____",
        "***triple***",
        "*unterminated",
        "``half a block",
        r"\*escaped\* and \\ too",
        r"a\",
        r"`a\`b`",
        "``a`b``",
        "<script>alert('&')</script>",
        r#"quotes "and" 'apostrophes'"#,
        "mixed **bold `code *star` end** _tail",
        "😀 *emoji* and __🦀__",
        "a_b_c *d* `e`",
    ]
}

/// Every raw `<` and `>` in the output must belong to an emitted tag, and
/// the quote characters must never survive at all.
fn assert_only_tag_markup(input: &str, html: &str) {
    let mut stripped = html.to_string();
    for tag in TAG_FRAGMENTS {
        stripped = stripped.replace(tag, "");
    }
    assert!(
        !stripped.contains('<') && !stripped.contains('>'),
        "raw angle bracket outside tags for input {:?}: {:?}",
        input,
        html
    );
    assert!(
        !stripped.contains('"') && !stripped.contains('\''),
        "raw quote survived for input {:?}: {:?}",
        input,
        html
    );
    for (pos, _) in html.match_indices('&') {
        assert!(
            ENTITIES.iter().any(|e| html[pos..].starts_with(e)),
            "bare ampersand at {} for input {:?}: {:?}",
            pos,
            input,
            html
        );
    }
}

/// Every emitted open tag must have a matching close tag in the output.
fn assert_balanced(input: &str, html: &str) {
    for (open, close) in [
        ("<strong>", "</strong>"),
        ("<em>", "</em>"),
        ("<u>", "</u>"),
        ("<code>", "</code>"),
        ("<pre><code>", "</code></pre>"),
    ] {
        assert_eq!(
            html.matches(open).count(),
            html.matches(close).count(),
            "unbalanced {} for input {:?}: {:?}",
            open,
            input,
            html
        );
    }
}

#[test]
fn renders_supported_syntax() {
    let cases = [
        ("**text**", "<strong>text</strong>"),
        ("*text*", "<em>text</em>"),
        ("__text__", "<u>text</u>"),
        ("_text_", "<em>text</em>"),
        ("`text`", "<code>text</code>"),
        ("``text``", "<pre><code>text</code></pre>"),
        (r"\*", "*"),
        (r"\_", "_"),
        (r"\`", "`"),
        (r"\\", r"\"),
    ];
    for (input, expected) in cases {
        similar_asserts::assert_eq!(render_inline_markup(input), expected);
    }
}

#[test]
fn output_is_deterministic() {
    for input in corpus() {
        let first = render_inline_markup(input);
        let second = render_inline_markup(input);
        similar_asserts::assert_eq!(first, second, "input {:?}", input);
    }
}

#[test]
fn no_input_markup_survives_unescaped() {
    for input in corpus() {
        let html = render_inline_markup(input);
        assert_only_tag_markup(input, &html);
    }
}

#[test]
fn emitted_tags_are_balanced() {
    for input in corpus() {
        let html = render_inline_markup(input);
        assert_balanced(input, &html);
    }
}

#[test]
fn hostile_payloads_are_neutralized() {
    let payloads = [
        r#"<img src=x onerror=alert(1)>"#,
        r#""onmouseover="alert(1)"#,
        "&lt;already escaped&gt;",
        "**<script>**",
        "`</code><script>`",
    ];
    for input in payloads {
        let html = render_inline_markup(input);
        assert_only_tag_markup(input, &html);
        assert_balanced(input, &html);
    }
}
