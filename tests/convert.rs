use std::fs;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use minidown::{
    Config, NodeKind, ParseOptions, STYLESHEET, markdown_to_html, markdown_to_html_with_config,
    parse, parse_with_options, render,
};

fn document(body: &str) -> String {
    format!("<html>{STYLESHEET}<body>\n{body}\n</body>\n</html>")
}

#[test]
fn full_document() {
    let md = "# Notes\n\nSome `code` & <b>text</b>\nacross lines.\n\n* first\n* second\n  continued\n\n```\nfn main() {}\n```\n";
    let expected = document(
        "<h1>Notes</h1>\n\
         <p>Some <code>code</code> &amp; &lt;b&gt;text&lt;/b&gt; across lines.</p>\n\
         <ul>\n<li>first</li>\n<li>second continued</li>\n</ul>\n\
         <pre>fn main() {}\n</pre>",
    );
    assert_eq!(markdown_to_html(md), expected);
}

#[test]
fn paragraph_code_span_is_live_but_brackets_are_escaped() {
    let html = markdown_to_html("see `x` < y\n");
    assert!(html.contains("<p>see <code>x</code> &lt; y</p>"));
}

#[test]
fn pending_paragraph_renders_after_heading() {
    assert_eq!(
        markdown_to_html("text\n# Head\n\n"),
        document("<h1>Head</h1>\n<p>text</p>")
    );
}

#[test]
fn hash_only_heading() {
    assert_eq!(markdown_to_html("###\n"), document("<h2>#</h2>"));
    assert_eq!(markdown_to_html("####### deep\n"), document("deep"));
}

#[test]
fn pre_keeps_backticks_and_escapes() {
    let tree = parse("```\ncode line\n```\n\n");
    let first = tree.children(tree.root()).next().unwrap();
    assert_eq!(first.kind, NodeKind::Pre);
    assert_eq!(first.text, "code line\n");
}

#[test]
fn render_is_pure() {
    let tree = parse("# A\n\n* b\n\n");
    assert_eq!(render(&tree), render(&tree));
}

#[test]
fn trailing_paragraph_needs_terminator() {
    assert_eq!(markdown_to_html("dangling"), document(""));

    let flushing = ParseOptions {
        flush_unterminated: true,
    };
    let tree = parse_with_options("dangling", &flushing);
    assert_eq!(render(&tree), document("<p>dangling</p>"));

    let mut config = Config::compiled_default();
    config.parser.flush_unterminated = true;
    assert_eq!(
        markdown_to_html_with_config("dangling", &config),
        document("<p>dangling</p>")
    );
}

#[test]
fn convert_file_stamps_and_overwrites() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.md");
    let output = dir.path().join("output.html");
    fs::write(&input, "# Hello\n\nWorld.").unwrap();
    fs::write(&output, "old contents").unwrap();

    let mut config = Config::compiled_default();
    config.stamp.author = "Ada".to_string();
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    minidown::convert_file(&input, &output, &config, date).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        document(
            "<pre>Rendered by Ada on October 19, 2026\n</pre>\n<h1>Hello</h1>\n<p>World.</p>"
        )
    );
}

#[test]
fn convert_file_without_stamp() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.md");
    let output = dir.path().join("output.html");
    fs::write(&input, "* a\n* b\n").unwrap();

    let mut config = Config::compiled_default();
    config.stamp.enabled = false;
    let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

    minidown::convert_file(&input, &output, &config, date).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        document("<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p></p>")
    );
}

#[test]
fn convert_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let err = minidown::convert_file(
        &dir.path().join("nope.md"),
        &dir.path().join("out.html"),
        &Config::compiled_default(),
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
    assert!(!dir.path().join("out.html").exists());
}
