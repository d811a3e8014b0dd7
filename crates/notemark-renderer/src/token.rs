//! Flat, level-annotated token tree.
//!
//! The engine turns pulldown-cmark's event stream into a list of [`Token`]s in
//! the style of markdown-it: block containers become open/close pairs, runs of
//! inline events become a single `inline` token, and leaf blocks (code, HTML,
//! rules) are self-contained. Core rules rewrite tokens in place; rewriting
//! only ever touches [`Token::kind`] and [`Token::attrs`], so open/close
//! pairing stays intact.

use std::borrow::Cow;

use pulldown_cmark::Event;
use serde::Serialize;

/// Tag-like token identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Paragraph,
    Heading,
    Blockquote,
    BulletList,
    OrderedList,
    ListItem,
    Table,
    TableHead,
    TableRow,
    TableCell,
    DefinitionList,
    DefinitionTerm,
    DefinitionDetails,
    FootnoteDefinition,
    Inline,
    Fence,
    CodeBlock,
    HtmlBlock,
    Hr,
    /// Block-level macro placeholder line.
    Macro,
    /// Blockquote reinterpreted as an admonition container.
    Notecard,
    /// Tombstoned token, renders as nothing.
    Noop,
}

impl TokenKind {
    /// Base name used to build [`Token::type_name`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Blockquote => "blockquote",
            Self::BulletList => "bullet_list",
            Self::OrderedList => "ordered_list",
            Self::ListItem => "list_item",
            Self::Table => "table",
            Self::TableHead => "thead",
            Self::TableRow => "tr",
            Self::TableCell => "td",
            Self::DefinitionList => "dl",
            Self::DefinitionTerm => "dt",
            Self::DefinitionDetails => "dd",
            Self::FootnoteDefinition => "footnote",
            Self::Inline => "inline",
            Self::Fence => "fence",
            Self::CodeBlock => "code_block",
            Self::HtmlBlock => "html_block",
            Self::Hr => "hr",
            Self::Macro => "macro",
            Self::Notecard => "notecard",
            Self::Noop => "noop",
        }
    }
}

/// Effect of a token on tree depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    /// Opens a container (+1).
    Open,
    /// Self-contained (0).
    SelfClosing,
    /// Closes a container (-1).
    Close,
}

impl Nesting {
    /// Numeric nesting delta.
    #[must_use]
    pub fn delta(self) -> i8 {
        match self {
            Self::Open => 1,
            Self::SelfClosing => 0,
            Self::Close => -1,
        }
    }
}

/// Zero-based, half-open source line range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One node of the flattened document tree.
#[derive(Clone, Debug, Serialize)]
pub struct Token {
    /// Token identifier. Rewritten by core rules.
    pub kind: TokenKind,
    /// Open, close or self-contained. Never rewritten.
    pub nesting: Nesting,
    /// Depth in the tree, derived from cumulative nesting.
    pub level: usize,
    /// Raw source text for inline and leaf tokens.
    pub content: String,
    /// Fence info string (language plus metadata).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
    /// Ordered attribute list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Source lines covered by this token.
    pub map: Option<LineRange>,
    /// Engine events this token was built from, used for default rendering.
    #[serde(skip)]
    pub(crate) events: Vec<Event<'static>>,
}

impl Token {
    /// Create a token with no content or attributes.
    #[must_use]
    pub fn new(kind: TokenKind, nesting: Nesting) -> Self {
        Self {
            kind,
            nesting,
            level: 0,
            content: String::new(),
            info: String::new(),
            attrs: Vec::new(),
            map: None,
            events: Vec::new(),
        }
    }

    /// Set the token content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the source line range.
    #[must_use]
    pub fn with_map(mut self, map: LineRange) -> Self {
        self.map = Some(map);
        self
    }

    /// Attach the engine events used for default rendering.
    #[must_use]
    pub(crate) fn with_events(mut self, events: Vec<Event<'static>>) -> Self {
        self.events = events;
        self
    }

    /// markdown-it style type name, e.g. `blockquote_open` or `inline`.
    #[must_use]
    pub fn type_name(&self) -> Cow<'static, str> {
        let base = self.kind.as_str();
        match self.nesting {
            Nesting::SelfClosing => Cow::Borrowed(base),
            Nesting::Open => Cow::Owned(format!("{base}_open")),
            Nesting::Close => Cow::Owned(format!("{base}_close")),
        }
    }

    /// Check kind and nesting at once.
    #[must_use]
    pub fn is(&self, kind: TokenKind, nesting: Nesting) -> bool {
        self.kind == kind && self.nesting == nesting
    }

    /// Value of the first attribute named `name`.
    #[must_use]
    pub fn attr_get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Append an attribute.
    pub fn attr_push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Replace the first attribute named `name`, or append it.
    pub fn attr_set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_owned(), value));
        }
    }
}

/// Find the next token of `kind`/`nesting` at or after `from`, optionally at `level`.
pub(crate) fn find_token(
    tokens: &[Token],
    kind: TokenKind,
    nesting: Nesting,
    level: Option<usize>,
    from: usize,
) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, token)| token.is(kind, nesting) && level.is_none_or(|l| token.level == l))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(
            Token::new(TokenKind::Blockquote, Nesting::Open).type_name(),
            "blockquote_open"
        );
        assert_eq!(
            Token::new(TokenKind::Notecard, Nesting::Close).type_name(),
            "notecard_close"
        );
        assert_eq!(
            Token::new(TokenKind::Inline, Nesting::SelfClosing).type_name(),
            "inline"
        );
        assert_eq!(
            Token::new(TokenKind::Noop, Nesting::Open).type_name(),
            "noop_open"
        );
    }

    #[test]
    fn test_attr_push_and_get() {
        let mut token = Token::new(TokenKind::Notecard, Nesting::Open);
        token.attr_push("notecardType", "note");
        token.attr_push("notecardType", "warning");
        assert_eq!(token.attr_get("notecardType"), Some("note"));
        assert_eq!(token.attr_get("missing"), None);
    }

    #[test]
    fn test_attr_set_replaces() {
        let mut token = Token::new(TokenKind::Notecard, Nesting::Open);
        token.attr_set("class", "a");
        token.attr_set("class", "b");
        assert_eq!(token.attrs, vec![("class".to_owned(), "b".to_owned())]);
    }

    #[test]
    fn test_find_token_with_level() {
        let mut outer = Token::new(TokenKind::Blockquote, Nesting::Close);
        outer.level = 0;
        let mut inner = Token::new(TokenKind::Blockquote, Nesting::Close);
        inner.level = 1;
        let tokens = vec![inner, outer];

        assert_eq!(
            find_token(&tokens, TokenKind::Blockquote, Nesting::Close, Some(0), 0),
            Some(1)
        );
        assert_eq!(
            find_token(&tokens, TokenKind::Blockquote, Nesting::Close, None, 0),
            Some(0)
        );
        assert_eq!(
            find_token(&tokens, TokenKind::Paragraph, Nesting::Open, None, 0),
            None
        );
    }
}
