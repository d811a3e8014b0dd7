//! Generic Markdown engine with pluggable rules.
//!
//! [`Engine`] wraps pulldown-cmark and runs a document through three phases:
//!
//! 1. **Block parsing**: the parser's event stream is folded into a flat
//!    [`Token`] list. Every paragraph start is offered to the registered
//!    [`BlockRule`]s first, so a rule can claim the block's first line.
//! 2. **Core rules**: each [`CoreRule`] rewrites the whole token list in place.
//! 3. **Rendering**: tokens with a registered [`RenderRule`] are rendered by it;
//!    everything else is rendered by pulldown-cmark's HTML writer.
//!
//! An engine is immutable once built and can be shared between threads.

use std::collections::HashMap;
use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::error::RenderError;
use crate::token::{LineRange, Nesting, Token, TokenKind};

/// Per-call environment visible to core rules.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a> {
    /// Active locale of the document being rendered.
    pub locale: &'a str,
}

impl<'a> Env<'a> {
    #[must_use]
    pub fn new(locale: &'a str) -> Self {
        Self { locale }
    }
}

/// Rule consulted at the start of every paragraph candidate.
///
/// A rule sees only the first line of the candidate block. Returning a token
/// consumes exactly that line; the remaining lines of the block become a new
/// candidate.
pub trait BlockRule: Send + Sync {
    /// Rule name, used in logs.
    fn name(&self) -> &'static str;

    /// Inspect the first line of a candidate block.
    ///
    /// `line_number` is the zero-based source line of `line`.
    fn scan_line(&self, line: &str, line_number: usize) -> Option<Token>;
}

/// Rule run over the complete token list after block parsing.
pub trait CoreRule: Send + Sync {
    /// Rule name, used in logs.
    fn name(&self) -> &'static str;

    /// Rewrite tokens in place.
    ///
    /// Implementations may change token kinds and attributes but must not
    /// insert, remove or reorder tokens.
    fn apply(&self, tokens: &mut [Token], env: &Env<'_>) -> Result<(), RenderError>;
}

/// Renderer for one token kind/nesting combination.
pub type RenderRule = fn(&[Token], usize) -> String;

/// Parser options used when none are given: tables, strikethrough,
/// footnotes and definition lists.
#[must_use]
pub fn default_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_DEFINITION_LIST
}

/// Builder for [`Engine`].
pub struct EngineBuilder {
    options: Options,
    block_rules: Vec<Box<dyn BlockRule>>,
    core_rules: Vec<Box<dyn CoreRule>>,
    render_rules: HashMap<(TokenKind, Nesting), RenderRule>,
}

impl EngineBuilder {
    /// Create a builder with [`default_options`] and no rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: default_options(),
            block_rules: Vec::new(),
            core_rules: Vec::new(),
            render_rules: HashMap::new(),
        }
    }

    /// Replace the parser options.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Add a block rule. Rules are consulted in registration order.
    #[must_use]
    pub fn block_rule<R: BlockRule + 'static>(mut self, rule: R) -> Self {
        self.block_rules.push(Box::new(rule));
        self
    }

    /// Add a core rule. Rules run in registration order.
    #[must_use]
    pub fn core_rule<R: CoreRule + 'static>(mut self, rule: R) -> Self {
        self.core_rules.push(Box::new(rule));
        self
    }

    /// Register a renderer, replacing any previous one for the same key.
    #[must_use]
    pub fn render_rule(mut self, kind: TokenKind, nesting: Nesting, rule: RenderRule) -> Self {
        self.render_rules.insert((kind, nesting), rule);
        self
    }

    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            options: self.options,
            block_rules: self.block_rules,
            core_rules: self.core_rules,
            render_rules: self.render_rules,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Markdown engine: block parsing, core rules and rendering.
pub struct Engine {
    options: Options,
    block_rules: Vec<Box<dyn BlockRule>>,
    core_rules: Vec<Box<dyn CoreRule>>,
    render_rules: HashMap<(TokenKind, Nesting), RenderRule>,
}

impl Engine {
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Parse `src` into tokens and run all core rules.
    pub fn parse(&self, src: &str, env: &Env<'_>) -> Result<Vec<Token>, RenderError> {
        let mut tokens = self.tokenize(src);
        for rule in &self.core_rules {
            tracing::trace!(rule = rule.name(), "Running core rule");
            rule.apply(&mut tokens, env)?;
        }
        Ok(tokens)
    }

    /// Block-parse `src` into tokens without running core rules.
    #[must_use]
    pub fn tokenize(&self, src: &str) -> Vec<Token> {
        let events: Vec<Spanned<'_>> = Parser::new_ext(src, self.options)
            .into_offset_iter()
            .collect();
        BlockState::new(src, &self.block_rules).run(&events)
    }

    /// Render tokens to HTML.
    ///
    /// Custom rule output is fed to pulldown-cmark's HTML writer as raw HTML
    /// alongside the default events, so one writer sees the whole document
    /// and footnote numbering stays consistent.
    #[must_use]
    pub fn render_tokens(&self, tokens: &[Token]) -> String {
        let mut events: Vec<Event<'_>> = Vec::with_capacity(tokens.len() * 2);

        for (idx, token) in tokens.iter().enumerate() {
            if let Some(rule) = self.render_rules.get(&(token.kind, token.nesting)) {
                let rendered = rule(tokens, idx);
                if !rendered.is_empty() {
                    events.push(Event::Html(rendered.into()));
                }
            } else {
                events.extend(token.events.iter().cloned());
            }
        }

        let mut out = String::with_capacity(4096);
        html::push_html(&mut out, events.into_iter());
        out
    }

    /// Parse, transform and render `src`.
    pub fn render(&self, src: &str, env: &Env<'_>) -> Result<String, RenderError> {
        let tokens = self.parse(src, env)?;
        Ok(self.render_tokens(&tokens))
    }
}

type Spanned<'s> = (Event<'s>, Range<usize>);

/// Byte offset to line number lookup.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(src: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(pos, _)| pos + 1))
            .collect();
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }

    fn map(&self, range: &Range<usize>) -> LineRange {
        let start = self.line_of(range.start);
        let last = self.line_of(range.end.saturating_sub(1).max(range.start));
        LineRange::new(start, last + 1)
    }
}

/// Block parsing state: folds events into tokens and tracks depth.
struct BlockState<'s, 'r> {
    src: &'s str,
    lines: LineIndex,
    rules: &'r [Box<dyn BlockRule>],
    tokens: Vec<Token>,
    level: usize,
}

impl<'s, 'r> BlockState<'s, 'r> {
    fn new(src: &'s str, rules: &'r [Box<dyn BlockRule>]) -> Self {
        Self {
            src,
            lines: LineIndex::new(src),
            rules,
            tokens: Vec::new(),
            level: 0,
        }
    }

    fn run(mut self, events: &[Spanned<'s>]) -> Vec<Token> {
        let mut idx = 0;
        while idx < events.len() {
            idx = self.step(events, idx);
        }
        self.tokens
    }

    fn push(&mut self, mut token: Token) {
        match token.nesting {
            Nesting::Open => {
                token.level = self.level;
                self.level += 1;
            }
            Nesting::Close => {
                self.level = self.level.saturating_sub(1);
                token.level = self.level;
            }
            Nesting::SelfClosing => token.level = self.level,
        }
        self.tokens.push(token);
    }

    /// Consume the event at `idx` (and any it owns); return the next index.
    fn step(&mut self, events: &[Spanned<'s>], idx: usize) -> usize {
        let (event, range) = &events[idx];
        match event {
            Event::Start(Tag::Paragraph) => {
                let end = closing_index(events, idx, &TagEnd::Paragraph);
                self.paragraph(&events[idx..=end]);
                end + 1
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let end = closing_index(events, idx, &TagEnd::CodeBlock);
                let mut token = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let mut token = Token::new(TokenKind::Fence, Nesting::SelfClosing);
                        token.info = info.to_string();
                        token
                    }
                    CodeBlockKind::Indented => {
                        Token::new(TokenKind::CodeBlock, Nesting::SelfClosing)
                    }
                };
                token.content = collect_text(&events[idx + 1..end]);
                self.push_leaf(token, &events[idx..=end], range);
                end + 1
            }
            Event::Start(Tag::HtmlBlock) => {
                let end = closing_index(events, idx, &TagEnd::HtmlBlock);
                let mut token = Token::new(TokenKind::HtmlBlock, Nesting::SelfClosing);
                token.content = collect_text(&events[idx + 1..end]);
                self.push_leaf(token, &events[idx..=end], range);
                end + 1
            }
            Event::Start(tag) => match block_kind(tag) {
                Some(kind) => {
                    let token = Token::new(kind, Nesting::Open)
                        .with_map(self.lines.map(range))
                        .with_events(vec![event.clone().into_static()]);
                    self.push(token);
                    idx + 1
                }
                None => self.inline_run(events, idx),
            },
            Event::End(tag) => match block_end_kind(tag) {
                Some(kind) => {
                    let token = Token::new(kind, Nesting::Close)
                        .with_events(vec![event.clone().into_static()]);
                    self.push(token);
                    idx + 1
                }
                None => self.inline_run(events, idx),
            },
            Event::Rule => {
                let token = Token::new(TokenKind::Hr, Nesting::SelfClosing)
                    .with_map(self.lines.map(range))
                    .with_events(vec![Event::Rule]);
                self.push(token);
                idx + 1
            }
            _ => self.inline_run(events, idx),
        }
    }

    /// Group the inline events starting at `idx` into one `inline` token.
    fn inline_run(&mut self, events: &[Spanned<'s>], idx: usize) -> usize {
        let end = events[idx..]
            .iter()
            .position(|(event, _)| !is_inline(event))
            .map_or(events.len(), |offset| idx + offset)
            .max(idx + 1);
        let run = &events[idx..end];

        // Tight list items have no paragraph; their text is still a block start.
        let in_tight_item = self
            .tokens
            .last()
            .is_some_and(|t| t.is(TokenKind::ListItem, Nesting::Open));
        if in_tight_item {
            let start = run.iter().map(|(_, r)| r.start).min().unwrap_or(0);
            let stop = run.iter().map(|(_, r)| r.end).max().unwrap_or(start);
            if let Some((rest, _)) = self.claim_lines(run, start, stop) {
                self.push_inline(rest);
            }
        } else {
            self.push_inline(run);
        }
        end
    }

    fn push_leaf(&mut self, token: Token, events: &[Spanned<'s>], range: &Range<usize>) {
        let token = token
            .with_map(self.lines.map(range))
            .with_events(to_static(events));
        self.push(token);
    }

    fn push_inline(&mut self, events: &[Spanned<'s>]) {
        if events.is_empty() {
            return;
        }
        let start = events.iter().map(|(_, r)| r.start).min().unwrap_or(0);
        let end = events.iter().map(|(_, r)| r.end).max().unwrap_or(start);
        let span = start..end;
        let token = Token::new(TokenKind::Inline, Nesting::SelfClosing)
            .with_content(self.inline_content(events, &span))
            .with_map(self.lines.map(&span))
            .with_events(to_static(events));
        self.push(token);
    }

    /// Source text of an inline run.
    ///
    /// Continuation lines start at their first inline event, which drops
    /// blockquote markers and container indentation.
    fn inline_content(&self, events: &[Spanned<'s>], span: &Range<usize>) -> String {
        let text = &self.src[span.clone()];
        if !text.contains('\n') {
            return text.trim_end().to_owned();
        }

        let mut content = String::with_capacity(text.len());
        let mut line_start = span.start;
        for (i, line) in text.split_inclusive('\n').enumerate() {
            let line_end = line_start + line.len();
            let from = if i == 0 {
                line_start
            } else {
                events
                    .iter()
                    .map(|(_, r)| r.start)
                    .filter(|&pos| pos >= line_start && pos < line_end)
                    .min()
                    .unwrap_or(line_start)
            };
            content.push_str(&self.src[from..line_end]);
            line_start = line_end;
        }
        content.truncate(content.trim_end().len());
        content
    }

    /// Emit a paragraph, offering its first line to the block rules.
    ///
    /// `events` starts with `Start(Paragraph)` and ends with `End(Paragraph)`.
    fn paragraph(&mut self, events: &[Spanned<'s>]) {
        let (_, para_range) = &events[0];
        let para_end = para_range.end;
        let body = &events[1..events.len().saturating_sub(1).max(1)];

        let Some((body, start)) = self.claim_lines(body, para_range.start, para_end) else {
            return;
        };

        let map = self.lines.map(&(start..para_end));
        self.push(
            Token::new(TokenKind::Paragraph, Nesting::Open)
                .with_map(map)
                .with_events(vec![Event::Start(Tag::Paragraph)]),
        );
        self.push_inline(body);
        self.push(
            Token::new(TokenKind::Paragraph, Nesting::Close)
                .with_events(vec![Event::End(TagEnd::Paragraph)]),
        );
    }

    /// Offer the first line of a block to the block rules, line after line.
    ///
    /// `body` holds the block's inline events and `start..end` its source.
    /// Returns the events left for normal handling with their start offset,
    /// or `None` when rules consumed every line.
    fn claim_lines<'e>(
        &mut self,
        mut body: &'e [Spanned<'s>],
        mut start: usize,
        end: usize,
    ) -> Option<(&'e [Spanned<'s>], usize)> {
        loop {
            let line_end = self.src[start..end]
                .find('\n')
                .map_or(end, |pos| start + pos);
            let line = &self.src[start..line_end];
            let line_number = self.lines.line_of(start);

            let Some(token) = self.scan_rules(line, line_number) else {
                return Some((body, start));
            };
            match split_first_line(body, line_end) {
                Split::Whole => {
                    self.push(token);
                    return None;
                }
                Split::Rest(rest) => {
                    self.push(token);
                    body = rest;
                    start = rest[0].1.start;
                }
                Split::Spanning => return Some((body, start)),
            }
        }
    }

    fn scan_rules(&self, line: &str, line_number: usize) -> Option<Token> {
        self.rules.iter().find_map(|rule| {
            let token = rule.scan_line(line, line_number)?;
            tracing::trace!(rule = rule.name(), line = line_number, "Block rule matched");
            Some(token)
        })
    }
}

/// How a paragraph's inline events divide around its first line.
enum Split<'e, 's> {
    /// The paragraph is a single line.
    Whole,
    /// Events after the first top-level line break.
    Rest(&'e [Spanned<'s>]),
    /// Inline markup spans the first line break; the line cannot be separated.
    Spanning,
}

fn split_first_line<'e, 's>(body: &'e [Spanned<'s>], line_end: usize) -> Split<'e, 's> {
    let mut depth = 0usize;
    for (idx, (event, _)) in body.iter().enumerate() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::SoftBreak | Event::HardBreak if depth == 0 => {
                let rest = &body[idx + 1..];
                return if rest.is_empty() {
                    Split::Whole
                } else {
                    Split::Rest(rest)
                };
            }
            _ => {}
        }
    }

    if body.iter().any(|(_, range)| range.start > line_end) {
        Split::Spanning
    } else {
        Split::Whole
    }
}

/// Index of the first `end` event after `idx`.
fn closing_index(events: &[Spanned<'_>], idx: usize, end: &TagEnd) -> usize {
    events[idx + 1..]
        .iter()
        .position(|(event, _)| matches!(event, Event::End(tag) if tag == end))
        .map_or(events.len() - 1, |offset| idx + 1 + offset)
}

fn collect_text(events: &[Spanned<'_>]) -> String {
    events
        .iter()
        .filter_map(|(event, _)| match event {
            Event::Text(text) | Event::Html(text) => Some(text.as_ref()),
            _ => None,
        })
        .collect()
}

fn to_static(events: &[Spanned<'_>]) -> Vec<Event<'static>> {
    events
        .iter()
        .map(|(event, _)| event.clone().into_static())
        .collect()
}

fn is_inline(event: &Event<'_>) -> bool {
    match event {
        Event::Start(tag) => block_kind(tag).is_none(),
        Event::End(tag) => block_end_kind(tag).is_none(),
        Event::Rule => false,
        _ => true,
    }
}

fn block_kind(tag: &Tag<'_>) -> Option<TokenKind> {
    let kind = match tag {
        Tag::Paragraph => TokenKind::Paragraph,
        Tag::Heading { .. } => TokenKind::Heading,
        Tag::BlockQuote(_) => TokenKind::Blockquote,
        Tag::CodeBlock(CodeBlockKind::Fenced(_)) => TokenKind::Fence,
        Tag::CodeBlock(CodeBlockKind::Indented) => TokenKind::CodeBlock,
        Tag::HtmlBlock => TokenKind::HtmlBlock,
        Tag::List(Some(_)) => TokenKind::OrderedList,
        Tag::List(None) => TokenKind::BulletList,
        Tag::Item => TokenKind::ListItem,
        Tag::FootnoteDefinition(_) => TokenKind::FootnoteDefinition,
        Tag::DefinitionList => TokenKind::DefinitionList,
        Tag::DefinitionListTitle => TokenKind::DefinitionTerm,
        Tag::DefinitionListDefinition => TokenKind::DefinitionDetails,
        Tag::Table(_) => TokenKind::Table,
        Tag::TableHead => TokenKind::TableHead,
        Tag::TableRow => TokenKind::TableRow,
        Tag::TableCell => TokenKind::TableCell,
        _ => return None,
    };
    Some(kind)
}

fn block_end_kind(tag: &TagEnd) -> Option<TokenKind> {
    let kind = match tag {
        TagEnd::Paragraph => TokenKind::Paragraph,
        TagEnd::Heading(_) => TokenKind::Heading,
        TagEnd::BlockQuote(_) => TokenKind::Blockquote,
        TagEnd::CodeBlock => TokenKind::CodeBlock,
        TagEnd::HtmlBlock => TokenKind::HtmlBlock,
        TagEnd::List(true) => TokenKind::OrderedList,
        TagEnd::List(false) => TokenKind::BulletList,
        TagEnd::Item => TokenKind::ListItem,
        TagEnd::FootnoteDefinition => TokenKind::FootnoteDefinition,
        TagEnd::DefinitionList => TokenKind::DefinitionList,
        TagEnd::DefinitionListTitle => TokenKind::DefinitionTerm,
        TagEnd::DefinitionListDefinition => TokenKind::DefinitionDetails,
        TagEnd::Table => TokenKind::Table,
        TagEnd::TableHead => TokenKind::TableHead,
        TagEnd::TableRow => TokenKind::TableRow,
        TagEnd::TableCell => TokenKind::TableCell,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.type_name().into_owned()).collect()
    }

    #[test]
    fn test_tokenize_blockquote_levels() {
        let engine = Engine::builder().build();
        let tokens = engine.tokenize("> **Note:** text\n");

        assert_eq!(
            kinds(&tokens),
            vec![
                "blockquote_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "blockquote_close"
            ]
        );
        let levels: Vec<usize> = tokens.iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 1, 0]);
        assert_eq!(tokens[2].content, "**Note:** text");
    }

    #[test]
    fn test_tokenize_line_ranges() {
        let engine = Engine::builder().build();
        let tokens = engine.tokenize("# Title\n\nFirst line\nsecond line\n");

        assert_eq!(tokens[0].type_name(), "heading_open");
        assert_eq!(tokens[0].map, Some(LineRange::new(0, 1)));
        assert_eq!(tokens[3].type_name(), "paragraph_open");
        assert_eq!(tokens[3].map, Some(LineRange::new(2, 4)));
    }

    #[test]
    fn test_tokenize_fence() {
        let engine = Engine::builder().build();
        let tokens = engine.tokenize("```js example\nlet a = 1;\n```\n");

        assert_eq!(kinds(&tokens), vec!["fence"]);
        assert_eq!(tokens[0].info, "js example");
        assert_eq!(tokens[0].content, "let a = 1;\n");
    }

    #[test]
    fn test_tokenize_tight_list_has_inline_without_paragraph() {
        let engine = Engine::builder().build();
        let tokens = engine.tokenize("- one\n- two\n");

        assert_eq!(
            kinds(&tokens),
            vec![
                "bullet_list_open",
                "list_item_open",
                "inline",
                "list_item_close",
                "list_item_open",
                "inline",
                "list_item_close",
                "bullet_list_close"
            ]
        );
    }

    #[test]
    fn test_default_rendering_matches_pulldown() {
        let markdown = "# Title\n\nSome *text* here.\n\n> quoted\n\n- a\n- b\n\n| x | y |\n|---|---|\n| 1 | 2 |\n";
        let engine = Engine::builder().build();
        let tokens = engine.tokenize(markdown);

        let mut expected = String::new();
        html::push_html(&mut expected, Parser::new_ext(markdown, default_options()));

        assert_eq!(engine.render_tokens(&tokens), expected);
    }

    #[test]
    fn test_render_rule_overrides_default() {
        fn hr(_tokens: &[Token], _idx: usize) -> String {
            "<hr class=\"rule\">\n".to_owned()
        }

        let engine = Engine::builder()
            .render_rule(TokenKind::Hr, Nesting::SelfClosing, hr)
            .build();
        let html = engine.render("a\n\n---\n\nb\n", &Env::new("en-US")).unwrap();

        assert_eq!(html, "<p>a</p>\n<hr class=\"rule\">\n<p>b</p>\n");
    }

    #[test]
    fn test_footnote_numbering_spans_custom_rules() {
        let engine = crate::rules::install(Engine::builder()).build();
        let markdown = "a[^x]\n\n```\ncode\n```\n\nb[^y]\n\n[^x]: X\n\n[^y]: Y\n";

        let html = engine.render(markdown, &Env::new("en-US")).unwrap();

        assert!(html.contains("<pre class=\"\">code\n</pre>"), "{html}");
        assert!(html.contains(r##"<a href="#x">1</a>"##), "{html}");
        assert!(html.contains(r##"<a href="#y">2</a>"##), "{html}");
        assert!(
            html.contains(r#"id="x"><sup class="footnote-definition-label">1</sup>"#),
            "{html}"
        );
        assert!(
            html.contains(r#"id="y"><sup class="footnote-definition-label">2</sup>"#),
            "{html}"
        );
    }

    #[test]
    fn test_inline_content_drops_blockquote_markers() {
        let engine = Engine::builder().build();
        let tokens = engine.tokenize("> **Note:** first\n> second *line*\n>   third\n");

        assert_eq!(tokens[2].type_name(), "inline");
        assert_eq!(tokens[2].content, "**Note:** first\nsecond *line*\nthird");
        assert_eq!(tokens[2].map, Some(LineRange::new(0, 3)));
    }

    #[test]
    fn test_inline_content_drops_list_indentation() {
        let engine = Engine::builder().build();
        let tokens = engine.tokenize("- one\n  two\n");

        assert_eq!(tokens[2].type_name(), "inline");
        assert_eq!(tokens[2].content, "one\ntwo");
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_of(0), 0);
        assert_eq!(index.line_of(2), 0);
        assert_eq!(index.line_of(3), 1);
        assert_eq!(index.line_of(6), 2);
        assert_eq!(index.line_of(7), 3);
        assert_eq!(index.map(&(3..6)), LineRange::new(1, 2));
    }
}
