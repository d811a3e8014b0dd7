//! Block rule passing macro placeholder lines through untouched.
//!
//! Macro payloads are encoded before parsing, so a block-level macro looks like
//! `{{aHRtbGVsZW1lbnQoImNhbnZhcyIp}}` on a line of its own. Such a line is
//! emitted as a `macro` token instead of being wrapped in a paragraph.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::BlockRule;
use crate::token::{LineRange, Nesting, Token, TokenKind};

static MACRO_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{.*\}\}$").expect("valid macro line regex"));

/// Check whether a line, trimmed, is a whole-line macro placeholder.
#[must_use]
pub fn is_macro_line(line: &str) -> bool {
    MACRO_LINE.is_match(line.trim())
}

/// Emits whole-line macro placeholders as inert `macro` tokens.
///
/// Only the first line of a candidate block is examined. A placeholder that
/// lazily continues an ordinary paragraph stays part of that paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroPassthrough;

impl BlockRule for MacroPassthrough {
    fn name(&self) -> &'static str {
        "macro"
    }

    fn scan_line(&self, line: &str, line_number: usize) -> Option<Token> {
        if !is_macro_line(line) {
            return None;
        }
        Some(
            Token::new(TokenKind::Macro, Nesting::SelfClosing)
                .with_content(line.trim_end_matches('\r'))
                .with_map(LineRange::new(line_number, line_number + 1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::{Engine, Env};

    fn engine() -> Engine {
        Engine::builder().block_rule(MacroPassthrough).build()
    }

    fn kinds(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.type_name().into_owned()).collect()
    }

    #[test]
    fn test_is_macro_line() {
        assert!(is_macro_line("{{aHRtbA==}}"));
        assert!(is_macro_line("  {{aHRtbA==}}  "));
        assert!(is_macro_line("{{}}"));
        assert!(!is_macro_line("text {{aHRtbA==}}"));
        assert!(!is_macro_line("{{aHRtbA==}} text"));
        assert!(!is_macro_line("{aHRtbA==}"));
    }

    #[test]
    fn test_scan_line_emits_macro_token() {
        let token = MacroPassthrough.scan_line("{{YWJj}}", 4).unwrap();
        assert_eq!(token.type_name(), "macro");
        assert_eq!(token.content, "{{YWJj}}");
        assert_eq!(token.map, Some(LineRange::new(4, 5)));
    }

    #[test]
    fn test_scan_line_no_match() {
        assert!(MacroPassthrough.scan_line("plain text", 0).is_none());
    }

    #[test]
    fn test_single_line_block_is_not_wrapped() {
        let tokens = engine().tokenize("{{YWJj}}\n");
        assert_eq!(kinds(&tokens), vec!["macro"]);
        assert_eq!(tokens[0].content, "{{YWJj}}");
        assert_eq!(tokens[0].level, 0);
    }

    #[test]
    fn test_following_lines_become_paragraph() {
        let tokens = engine().tokenize("{{YWJj}}\nfollowing text\n");
        assert_eq!(
            kinds(&tokens),
            vec!["macro", "paragraph_open", "inline", "paragraph_close"]
        );
        assert_eq!(tokens[2].content, "following text");
        assert_eq!(tokens[1].map, Some(LineRange::new(1, 2)));
    }

    #[test]
    fn test_consecutive_macro_lines() {
        let tokens = engine().tokenize("{{YWJj}}\n{{ZGVm}}\n");
        assert_eq!(kinds(&tokens), vec!["macro", "macro"]);
        assert_eq!(tokens[1].content, "{{ZGVm}}");
        assert_eq!(tokens[1].map, Some(LineRange::new(1, 2)));
    }

    #[test]
    fn test_macro_after_first_line_stays_in_paragraph() {
        let tokens = engine().tokenize("some text\n{{YWJj}}\n");
        assert_eq!(
            kinds(&tokens),
            vec!["paragraph_open", "inline", "paragraph_close"]
        );
    }

    #[test]
    fn test_macro_inside_blockquote() {
        let tokens = engine().tokenize("> {{YWJj}}\n");
        assert_eq!(
            kinds(&tokens),
            vec!["blockquote_open", "macro", "blockquote_close"]
        );
        assert_eq!(tokens[1].level, 1);
    }

    #[test]
    fn test_macro_in_tight_list_item() {
        let tokens = engine().tokenize("- {{ a(\"b\") }}\n- x\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                "bullet_list_open",
                "list_item_open",
                "macro",
                "list_item_close",
                "list_item_open",
                "inline",
                "list_item_close",
                "bullet_list_close"
            ]
        );
        assert_eq!(tokens[2].content, "{{ a(\"b\") }}");
        assert_eq!(tokens[2].level, 2);
    }

    #[test]
    fn test_tight_list_item_text_after_macro_line() {
        let tokens = engine().tokenize("- {{YWJj}}\n  more text\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                "bullet_list_open",
                "list_item_open",
                "macro",
                "inline",
                "list_item_close",
                "bullet_list_close"
            ]
        );
        assert_eq!(tokens[3].content, "more text");
    }

    #[test]
    fn test_render_pads_with_newlines() {
        let engine = Engine::builder()
            .block_rule(MacroPassthrough)
            .render_rule(TokenKind::Macro, Nesting::SelfClosing, crate::rules::render_macro)
            .build();
        let html = engine
            .render("Intro\n\n{{YWJj}}\n\nOutro\n", &Env::new("en-US"))
            .unwrap();
        assert_eq!(html, "<p>Intro</p>\n\n{{YWJj}}\n<p>Outro</p>\n");
    }
}
