use super::*;

#[test]
fn renders_emphasis_and_links() {
    let html = render_markdown_html("Hi **there**, see [docs](https://example.com)");
    assert!(html.contains("<strong>there</strong>"));
    assert!(html.contains("<a href=\"https://example.com\">docs</a>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
}

#[test]
fn plain_text_is_wrapped_in_paragraph() {
    assert_eq!(render_markdown_html("hello"), "<p>hello</p>\n");
}
