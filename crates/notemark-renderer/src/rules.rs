//! Render rules for fences, macros and notecards.

use crate::engine::EngineBuilder;
use crate::notecard::NOTECARD_TYPE_ATTR;
use crate::token::{Nesting, Token, TokenKind};

/// Register every render rule from this module on `builder`.
#[must_use]
pub fn install(builder: EngineBuilder) -> EngineBuilder {
    builder
        .render_rule(TokenKind::Fence, Nesting::SelfClosing, render_fence)
        .render_rule(TokenKind::Macro, Nesting::SelfClosing, render_macro)
        .render_rule(TokenKind::Notecard, Nesting::Open, render_notecard_open)
        .render_rule(TokenKind::Notecard, Nesting::Close, render_notecard_close)
        .render_rule(TokenKind::Noop, Nesting::Open, render_noop)
        .render_rule(TokenKind::Noop, Nesting::SelfClosing, render_noop)
        .render_rule(TokenKind::Noop, Nesting::Close, render_noop)
}

/// CSS class list for a fence info string.
///
/// The first word is the language, with a trailing `-nolint` removed; the
/// remaining words are metadata appended verbatim.
///
/// ```
/// use notemark_renderer::fence_class;
///
/// assert_eq!(fence_class("js example"), "brush: js example");
/// assert_eq!(fence_class("python-nolint"), "brush: python");
/// assert_eq!(fence_class(""), "");
/// ```
#[must_use]
pub fn fence_class(info: &str) -> String {
    let mut words = info.split_whitespace();
    let language = words
        .next()
        .map(|lang| lang.strip_suffix("-nolint").unwrap_or(lang))
        .unwrap_or_default();
    let meta = words.collect::<Vec<_>>().join(" ");

    if language.is_empty() {
        meta
    } else {
        format!("brush: {language} {meta}").trim().to_owned()
    }
}

/// `<pre class="brush: LANG META">` with escaped content.
pub fn render_fence(tokens: &[Token], idx: usize) -> String {
    let token = &tokens[idx];
    format!(
        r#"<pre class="{}">{}</pre>
"#,
        escape_html(&fence_class(&token.info)),
        escape_html(&token.content)
    )
}

/// Verbatim macro line padded with newlines.
pub fn render_macro(tokens: &[Token], idx: usize) -> String {
    format!("\n{}\n", tokens[idx].content)
}

/// Opening `<div>` of a notecard.
pub fn render_notecard_open(tokens: &[Token], idx: usize) -> String {
    match tokens[idx].attr_get(NOTECARD_TYPE_ATTR) {
        Some("callout") => "<div class=\"callout\">\n".to_owned(),
        Some(kind) => format!("<div class=\"notecard {}\">\n", escape_html(kind)),
        None => "<div class=\"notecard\">\n".to_owned(),
    }
}

pub fn render_notecard_close(_tokens: &[Token], _idx: usize) -> String {
    "</div>\n".to_owned()
}

pub fn render_noop(_tokens: &[Token], _idx: usize) -> String {
    String::new()
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
