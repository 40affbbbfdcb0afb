//! Integration tests for the inline tokenizer
//!
//! These tests validate exact token sequences, positions included, for the
//! three marker families, the link sequence, and their degraded forms.

use notedown_lexer::{tokenize_inlines, InlineToken, InlineTokenKind, SourcePosition};
use rstest::rstest;

/// Helper: strip positions from lexer output
fn strip_positions(tokens: Vec<InlineToken>) -> Vec<InlineTokenKind> {
    tokens.into_iter().map(|t| t.kind).collect()
}

/// Helper: a token at line:column
fn at(line: usize, column: usize, kind: InlineTokenKind) -> InlineToken {
    InlineToken::new(SourcePosition::new(line, column), kind)
}

fn text(content: &str) -> InlineTokenKind {
    InlineTokenKind::Text {
        content: content.to_string(),
    }
}

// ===== Text runs =====

#[test]
fn test_empty_input_produces_no_tokens() {
    assert!(tokenize_inlines("").is_empty());
}

#[test]
fn test_plain_text_is_one_token() {
    assert_eq!(
        tokenize_inlines("just some words."),
        vec![at(1, 1, text("just some words."))]
    );
}

#[test]
fn test_positions_track_line_feeds() {
    // A line feed is no delimiter inline; it rides along in the text run.
    let tokens = tokenize_inlines("a\n*b*");
    assert_eq!(
        tokens,
        vec![
            at(1, 1, text("a\n")),
            at(2, 1, InlineTokenKind::EmphasisStart { marker: '*' }),
            at(2, 2, text("b")),
            at(2, 3, InlineTokenKind::EmphasisEnd { marker: '*' }),
        ]
    );
}

// ===== Emphasis and strong =====

#[rstest]
#[case('*')]
#[case('_')]
fn test_emphasis_markers(#[case] marker: char) {
    let input = format!("{}word{}", marker, marker);
    assert_eq!(
        strip_positions(tokenize_inlines(&input)),
        vec![
            InlineTokenKind::EmphasisStart { marker },
            text("word"),
            InlineTokenKind::EmphasisEnd { marker },
        ]
    );
}

#[rstest]
#[case("**")]
#[case("__")]
fn test_strong_spellings(#[case] marker: &str) {
    let input = format!("{}word{}", marker, marker);
    assert_eq!(
        strip_positions(tokenize_inlines(&input)),
        vec![
            InlineTokenKind::StrongStart {
                marker: marker.to_string(),
            },
            text("word"),
            InlineTokenKind::StrongEnd {
                marker: marker.to_string(),
            },
        ]
    );
}

#[test]
fn test_emphasis_positions() {
    assert_eq!(
        tokenize_inlines("*foo*"),
        vec![
            at(1, 1, InlineTokenKind::EmphasisStart { marker: '*' }), // "*"
            at(1, 2, text("foo")),                                    // "foo"
            at(1, 5, InlineTokenKind::EmphasisEnd { marker: '*' }),   // "*"
        ]
    );
}

#[test]
fn test_mismatched_strong_spelling_demotes_to_text() {
    assert_eq!(
        strip_positions(tokenize_inlines("**emphasis__")),
        vec![
            InlineTokenKind::StrongStart {
                marker: "**".to_string(),
            },
            text("emphasis"),
            text("__"),
        ]
    );
}

#[test]
fn test_unclosed_markers_stay_open() {
    assert_eq!(
        strip_positions(tokenize_inlines("**dangling")),
        vec![
            InlineTokenKind::StrongStart {
                marker: "**".to_string(),
            },
            text("dangling"),
        ]
    );
}

#[test]
fn test_families_nest_across_each_other() {
    assert_eq!(
        strip_positions(tokenize_inlines("_a **b** c_")),
        vec![
            InlineTokenKind::EmphasisStart { marker: '_' },
            text("a "),
            InlineTokenKind::StrongStart {
                marker: "**".to_string(),
            },
            text("b"),
            InlineTokenKind::StrongEnd {
                marker: "**".to_string(),
            },
            text(" c"),
            InlineTokenKind::EmphasisEnd { marker: '_' },
        ]
    );
}

// ===== Code spans =====

#[test]
fn test_code_span_positions() {
    assert_eq!(
        tokenize_inlines("`x`"),
        vec![
            at(1, 1, InlineTokenKind::CodeStart { marker: '`' }), // "`"
            at(1, 2, text("x")),                                  // "x"
            at(1, 3, InlineTokenKind::CodeEnd { marker: '`' }),   // "`"
        ]
    );
}

#[test]
fn test_unterminated_code_span_runs_to_end() {
    assert_eq!(
        strip_positions(tokenize_inlines("`open")),
        vec![InlineTokenKind::CodeStart { marker: '`' }, text("open")]
    );
}

// ===== Links =====

#[test]
fn test_full_link_sequence_with_positions() {
    let tokens = tokenize_inlines("[click](https://example.org)");

    // Exact token sequence validation
    assert_eq!(
        tokens,
        vec![
            at(1, 1, InlineTokenKind::LinkStart),   // "["
            at(1, 2, text("click")),                // "click"
            at(1, 7, InlineTokenKind::LinkTextEnd), // "]"
            at(
                1,
                9,
                InlineTokenKind::LinkUrl {
                    url: "https://example.org".to_string(),
                },
            ), // the url, right after "("
            at(1, 28, InlineTokenKind::LinkEnd), // ")"
        ]
    );
}

#[test]
fn test_bracket_without_paren_dangles() {
    assert_eq!(
        strip_positions(tokenize_inlines("[click]")),
        vec![
            InlineTokenKind::LinkStart,
            text("click"),
            InlineTokenKind::LinkTextEnd,
        ]
    );
}

#[test]
fn test_link_text_may_contain_formatting() {
    assert_eq!(
        strip_positions(tokenize_inlines("[*hot*](x)")),
        vec![
            InlineTokenKind::LinkStart,
            InlineTokenKind::EmphasisStart { marker: '*' },
            text("hot"),
            InlineTokenKind::EmphasisEnd { marker: '*' },
            InlineTokenKind::LinkTextEnd,
            InlineTokenKind::LinkUrl {
                url: "x".to_string(),
            },
            InlineTokenKind::LinkEnd,
        ]
    );
}

#[test]
fn test_url_is_captured_verbatim() {
    // Delimiter characters lose their meaning inside the URL capture.
    assert_eq!(
        strip_positions(tokenize_inlines("[a](u_r*l`)")),
        vec![
            InlineTokenKind::LinkStart,
            text("a"),
            InlineTokenKind::LinkTextEnd,
            InlineTokenKind::LinkUrl {
                url: "u_r*l`".to_string(),
            },
            InlineTokenKind::LinkEnd,
        ]
    );
}

#[test]
fn test_stray_closing_bracket_emits_link_text_end() {
    assert_eq!(
        strip_positions(tokenize_inlines("a] b")),
        vec![text("a"), InlineTokenKind::LinkTextEnd, text(" b")]
    );
}

// ===== Mixed content =====

#[test]
fn test_mixed_inline_content() {
    let input = "see **the `code`** at [docs](https://docs.rs)";
    let tokens = strip_positions(tokenize_inlines(input));

    assert_eq!(
        tokens,
        vec![
            text("see "),
            InlineTokenKind::StrongStart {
                marker: "**".to_string(),
            },
            text("the "),
            InlineTokenKind::CodeStart { marker: '`' },
            text("code"),
            InlineTokenKind::CodeEnd { marker: '`' },
            InlineTokenKind::StrongEnd {
                marker: "**".to_string(),
            },
            text(" at "),
            InlineTokenKind::LinkStart,
            text("docs"),
            InlineTokenKind::LinkTextEnd,
            InlineTokenKind::LinkUrl {
                url: "https://docs.rs".to_string(),
            },
            InlineTokenKind::LinkEnd,
        ]
    );
}
