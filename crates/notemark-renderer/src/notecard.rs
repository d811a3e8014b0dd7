//! Blockquote to notecard rewrite.
//!
//! A blockquote whose first paragraph starts with a bold, localized label
//! (`> **Note:** …`, `> **Warning:** …`, `> **Callout:** …`) becomes a
//! notecard. The blockquote's open/close tokens are retyped to
//! `notecard_open`/`notecard_close` and tagged with a `notecardType`
//! attribute. For callouts the label paragraph is tombstoned (retyped to
//! `noop`) so it disappears from the output.
//!
//! Only the outermost blockquote at each scan position is considered;
//! blockquotes nested inside it are never converted on their own.

use std::sync::Arc;

use crate::engine::{CoreRule, Env};
use crate::error::RenderError;
use crate::locale::{NotecardKind, PatternCache, Resolution};
use crate::token::{Nesting, Token, TokenKind, find_token};

/// Attribute carrying the notecard kind on `notecard_open` tokens.
pub const NOTECARD_TYPE_ATTR: &str = "notecardType";

/// Core rule converting labelled blockquotes into notecards.
#[derive(Debug)]
pub struct NotecardTransform {
    patterns: Arc<PatternCache>,
}

impl NotecardTransform {
    #[must_use]
    pub fn new(patterns: Arc<PatternCache>) -> Self {
        Self { patterns }
    }
}

impl CoreRule for NotecardTransform {
    fn name(&self) -> &'static str {
        "notecard"
    }

    fn apply(&self, tokens: &mut [Token], env: &Env<'_>) -> Result<(), RenderError> {
        let mut pos = 0;
        while let Some(start) =
            find_token(tokens, TokenKind::Blockquote, Nesting::Open, None, pos)
        {
            let level = tokens[start].level;
            let Some(end) =
                find_token(tokens, TokenKind::Blockquote, Nesting::Close, Some(level), start + 1)
            else {
                pos = start + 1;
                continue;
            };
            // Nested blockquotes are never candidates on their own.
            pos = end;

            if !starts_with_paragraph(tokens, start) {
                continue;
            }

            let resolved = self.patterns.resolve(env.locale)?;
            if resolved.resolution == Resolution::Fallback {
                tracing::debug!(
                    locale = env.locale,
                    "No notecard labels for locale, using default"
                );
            }
            let Some(kind) = resolved.pattern.find(&tokens[start + 2].content) else {
                continue;
            };

            tracing::debug!(
                kind = kind.as_str(),
                line = ?tokens[start].map,
                "Converting blockquote to notecard"
            );
            tokens[start].kind = TokenKind::Notecard;
            tokens[start].attr_push(NOTECARD_TYPE_ATTR, kind.as_str());
            tokens[end].kind = TokenKind::Notecard;

            if kind == NotecardKind::Callout {
                tombstone_label_paragraph(tokens, start);
            }
        }
        Ok(())
    }
}

/// Check for `paragraph_open` + `inline` right after the blockquote opener.
fn starts_with_paragraph(tokens: &[Token], start: usize) -> bool {
    matches!(
        (tokens.get(start + 1), tokens.get(start + 2)),
        (Some(para), Some(inline))
            if para.is(TokenKind::Paragraph, Nesting::Open)
                && inline.is(TokenKind::Inline, Nesting::SelfClosing)
    )
}

/// Retype the first paragraph after `start` (open, inline, close) to `noop`.
fn tombstone_label_paragraph(tokens: &mut [Token], start: usize) {
    let Some(p_start) = find_token(tokens, TokenKind::Paragraph, Nesting::Open, None, start + 1)
    else {
        return;
    };
    let p_level = tokens[p_start].level;
    let Some(p_end) = find_token(
        tokens,
        TokenKind::Paragraph,
        Nesting::Close,
        Some(p_level),
        p_start + 1,
    ) else {
        return;
    };

    tokens[p_start].kind = TokenKind::Noop;
    tokens[p_end].kind = TokenKind::Noop;
    tokens[start + 2].kind = TokenKind::Noop;
}
