//! Document conversion pipeline.
//!
//! [`Converter`] sequences a document through:
//!
//! 1. legacy definition-list normalization,
//! 2. macro encoding,
//! 3. the engine (block parsing with the macro passthrough rule, the notecard
//!    transform, rendering with the custom render rules),
//! 4. macro decoding.
//!
//! The engine is built on the first call and reused for every later call,
//! whatever locale those calls use. The notecard transform reads the locale
//! of each call to pick its label pattern.

use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::codec::{Base64Codec, MacroCodec};
use crate::deflist::replace_legacy_dl;
use crate::engine::{Engine, Env};
use crate::error::RenderError;
use crate::locale::{DEFAULT_LOCALE, LabelSource, PatternCache};
use crate::notecard::NotecardTransform;
use crate::passthrough::MacroPassthrough;
use crate::rules;
use crate::token::{Token, TokenKind};

/// Per-document options.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// BCP-47 style locale, e.g. `en-US` or `fr`.
    pub locale: String,
}

impl RenderOptions {
    #[must_use]
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

/// Build the engine with the macro rule, notecard transform and render rules.
#[must_use]
pub fn build_engine(patterns: Arc<PatternCache>) -> Engine {
    let builder = Engine::builder()
        .block_rule(MacroPassthrough)
        .core_rule(NotecardTransform::new(patterns));
    rules::install(builder).build()
}

/// Markdown to HTML converter.
///
/// The engine and the label pattern cache are owned by the converter: each
/// is built on first use and reused for every later call on the same
/// instance. Share one converter (it is `Send + Sync`) to get a single
/// build for the whole process.
///
/// # Example
///
/// ```
/// use notemark_renderer::{BuiltinLabels, Converter, RenderOptions};
///
/// let converter = Converter::new(BuiltinLabels);
/// let html = converter
///     .render("> **Note:** Read this.\n", &RenderOptions::default())
///     .unwrap();
/// assert!(html.starts_with(r#"<div class="notecard note">"#));
/// ```
pub struct Converter {
    engine: OnceLock<Engine>,
    patterns: Arc<PatternCache>,
    codec: Box<dyn MacroCodec>,
}

impl Converter {
    /// Create a converter reading notecard labels from `labels`.
    ///
    /// Macros are encoded with [`Base64Codec`].
    #[must_use]
    pub fn new<S: LabelSource + 'static>(labels: S) -> Self {
        Self {
            engine: OnceLock::new(),
            patterns: Arc::new(PatternCache::new(labels)),
            codec: Box::new(Base64Codec),
        }
    }

    /// Replace the macro codec.
    #[must_use]
    pub fn with_codec<C: MacroCodec + 'static>(mut self, codec: C) -> Self {
        self.codec = Box::new(codec);
        self
    }

    /// Label patterns shared with the notecard transform.
    #[must_use]
    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    fn engine(&self) -> &Engine {
        self.engine.get_or_init(|| {
            tracing::debug!("Building markdown engine");
            build_engine(Arc::clone(&self.patterns))
        })
    }

    /// Convert a Markdown document to HTML.
    pub fn render(&self, markdown: &str, options: &RenderOptions) -> Result<String, RenderError> {
        let normalized = replace_legacy_dl(markdown);
        let encoded = self.codec.encode(&normalized);
        let html = self
            .engine()
            .render(&encoded, &Env::new(&options.locale))?;
        Ok(self.codec.decode(&html))
    }

    /// Parse and transform a document, returning the token tree.
    ///
    /// Macro placeholders in token content are decoded.
    pub fn tokens(&self, markdown: &str, options: &RenderOptions) -> Result<Vec<Token>, RenderError> {
        let normalized = replace_legacy_dl(markdown);
        let encoded = self.codec.encode(&normalized);
        let mut tokens = self
            .engine()
            .parse(&encoded, &Env::new(&options.locale))?;
        for token in tokens
            .iter_mut()
            .filter(|t| matches!(t.kind, TokenKind::Macro | TokenKind::Inline | TokenKind::Noop))
        {
            token.content = self.codec.decode(&token.content);
        }
        Ok(tokens)
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("engine_built", &self.engine.get().is_some())
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
