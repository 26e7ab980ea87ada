//! Integration tests for HTML rendering.

use sitemark::render::{to_html, to_html_with_stats, HtmlRenderer, LineState};
use sitemark::{convert_str, parse_str, Error, RenderOptions, SpanKind};

const SAMPLE: &str = "\
# Building a static site

This page is written in a tiny markup dialect. Paragraphs are single lines \
of text that get wrapped so that no line of the generated HTML is wider than \
seventy-one characters, however long the source line is.

## Lists

- first item with `inline code`
- second item linking to [https://example.com/a/long/path] [an example page]
- third item, `a multi word code span`, and trailing text

<architecture>

A closing paragraph mentions [https://rust-lang.org] [Rust]. and `cargo`.
";

fn render(text: &str) -> String {
    convert_str(text).unwrap()
}

// ==================== Scenarios ====================

#[test]
fn test_heading_scenario() {
    assert_eq!(render("# Hello World\n"), "<h1>\n  Hello World\n</h1>\n");
}

#[test]
fn test_list_scenario() {
    assert_eq!(
        render("- one\n- two\n"),
        "<ul>\n  <li>\n    one\n  </li>\n  <li>\n    two\n  </li>\n</ul>\n"
    );
}

#[test]
fn test_code_scenario() {
    assert_eq!(
        render("Check `this` out.\n"),
        "<p>\n  Check <code>this</code> out.\n</p>\n"
    );
}

/// Link text is bracketed; see `test_bare_link_text_is_fatal` for the bare form.
#[test]
fn test_link_scenario() {
    assert_eq!(
        render("[https://example.com] [click here]\n"),
        "<p>\n  <a href=\"https://example.com\">\n    click here</a>\n</p>\n"
    );
}

#[test]
fn test_image_scenario() {
    assert_eq!(
        render("<diagram>\n"),
        "<section>\n  <img src=\"img/diagram.png\" alt=\"diagram\">\n  <p>\n    diagram\n  </p>\n</section>\n"
    );
}

// ==================== Properties ====================

#[test]
fn test_consecutive_items_share_one_list() {
    let html = render("- a\n- b\n- c\n- d\n");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 4);
    assert_eq!(html.matches("</li>").count(), 4);
    assert!(html.ends_with("</ul>\n"));
}

#[test]
fn test_trailing_list_closed_once() {
    let html = render("# Title\n\nIntro.\n\n- only item");
    assert_eq!(html.matches("</ul>").count(), 1);
    assert!(html.ends_with("  </li>\n</ul>\n"));
}

#[test]
fn test_line_width_and_trailing_space() {
    let html = render(SAMPLE);
    for line in html.lines() {
        assert!(line.chars().count() <= 71, "line too long: {:?}", line);
        assert!(!line.ends_with(' '), "trailing space: {:?}", line);
    }
    assert!(html.ends_with('\n'));
}

#[test]
fn test_empty_image_name_has_no_trailing_space() {
    let html = render("<>\n");
    for line in html.lines() {
        assert!(!line.ends_with(' '), "trailing space: {:?}", line);
    }
    assert_eq!(html.matches("<p>").count(), 1);
    assert_eq!(html.matches("</p>").count(), 1);
}

#[test]
fn test_long_url_keeps_anchor_line_whole() {
    let url = "https://example.com/a/very/long/path/that/keeps/going/and/going/index.html";
    let html = render(&format!("See [{}] [docs]\n", url));
    let anchor = format!("  <a href=\"{}\">", url);
    assert_eq!(html, format!("<p>\n  See\n{}\n    docs</a>\n</p>\n", anchor));
    assert!(anchor.chars().count() > 71);
    for line in html.lines().filter(|line| *line != anchor) {
        assert!(line.chars().count() <= 71, "line too long: {:?}", line);
    }
}

#[test]
fn test_marker_balance() {
    let html = render(SAMPLE);
    assert_eq!(html.matches("<a href=\"").count(), 2);
    assert_eq!(html.matches("</a>").count(), 2);
    assert_eq!(
        html.matches("<code>").count(),
        html.matches("</code>").count()
    );
    assert_eq!(html.matches("<code>").count(), 3);
}

#[test]
fn test_depth_returns_to_zero_between_constructs() {
    let mut renderer = HtmlRenderer::new(RenderOptions::default());
    for line in SAMPLE.lines() {
        renderer.render_line(line).unwrap();
        let expected = usize::from(renderer.state() == LineState::InList);
        assert_eq!(renderer.depth(), expected);
    }
    let html = renderer.finish();
    assert!(html.starts_with("<h1>\n"));
}

#[test]
fn test_wrapping_exact_output() {
    let doc = parse_str("one two three four five six\n");
    let options = RenderOptions::new().with_line_width(20);
    let html = to_html(&doc, &options).unwrap();
    assert_eq!(html, "<p>\n  one two three four\n  five six\n</p>\n");
}

#[test]
fn test_link_text_wraps_at_link_depth() {
    let doc = parse_str("[https://example.com] [aaaa bbbb cccc dddd]\n");
    let options = RenderOptions::new().with_line_width(16);
    let html = to_html(&doc, &options).unwrap();
    assert_eq!(
        html,
        "<p>\n  <a href=\"https://example.com\">\n    aaaa bbbb\n    cccc\n    dddd</a>\n</p>\n"
    );
}

#[test]
fn test_custom_indent_and_images() {
    let doc = parse_str("- x\n<pic>\n");
    let options = RenderOptions::new()
        .with_indent_width(4)
        .with_image_dir("static/images")
        .with_image_extension("svg");
    let html = to_html(&doc, &options).unwrap();
    assert!(html.contains("    <li>\n        x\n    </li>\n"));
    assert!(html.contains("<img src=\"static/images/pic.svg\" alt=\"pic\">"));
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(
        render("# Title\r\n\r\n- a\r\n"),
        "<h1>\n  Title\n</h1>\n<ul>\n  <li>\n    a\n  </li>\n</ul>\n"
    );
}

// ==================== Errors ====================

/// Plain words after a URL never close the link, so the bare
/// `[url] click here` form is rejected; link text has to be bracketed.
#[test]
fn test_bare_link_text_is_fatal() {
    let result = convert_str("Fine.\n[https://example.com] click here\nNever reached.\n");
    match result {
        Err(Error::UnterminatedSpan { line, kind, text }) => {
            assert_eq!(line, 2);
            assert_eq!(kind, SpanKind::Link);
            assert_eq!(text, "[https://example.com] click here");
        }
        other => panic!("expected unterminated span, got {:?}", other),
    }
}

#[test]
fn test_code_span_cannot_cross_lines() {
    let result = convert_str("- start `of code\n- end` of code\n");
    assert!(matches!(
        result,
        Err(Error::UnterminatedSpan {
            line: 1,
            kind: SpanKind::Code,
            ..
        })
    ));
}

#[test]
fn test_error_message_names_line() {
    let err = convert_str("\n\n`oops\n").unwrap_err();
    assert_eq!(err.to_string(), "Unclosed code span on line 3: `oops");
}

// ==================== Statistics ====================

#[test]
fn test_stats_for_sample() {
    let result = to_html_with_stats(&parse_str(SAMPLE), &RenderOptions::default()).unwrap();
    let stats = &result.stats;
    assert_eq!(stats.heading_count, 2);
    assert_eq!(stats.list_count, 1);
    assert_eq!(stats.list_item_count, 3);
    assert_eq!(stats.image_count, 1);
    assert_eq!(stats.link_count, 2);
    assert_eq!(stats.code_span_count, 3);
    assert_eq!(stats.paragraph_count, 2);
    assert_eq!(stats.output_lines as usize, result.content.lines().count());
}
