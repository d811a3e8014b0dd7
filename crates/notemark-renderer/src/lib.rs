//! Markdown to HTML renderer for documentation pages.
//!
//! On top of a pulldown-cmark based [`Engine`], this crate adds:
//!
//! - [`MacroPassthrough`]: block rule that passes whole-line macro
//!   placeholders (`{{…}}`) through without wrapping them in paragraphs
//! - [`NotecardTransform`]: core rule that turns blockquotes starting with a
//!   bold, localized `Note:` / `Warning:` / `Callout:` label into
//!   `<div class="notecard …">` containers
//! - [`rules`]: render rules for fences, macros and notecards
//! - [`replace_legacy_dl`]: rewrite of the legacy `- term` / `- : definition`
//!   spelling of definition lists
//!
//! [`Converter`] wires these together with a [`MacroCodec`].
//!
//! # Example
//!
//! ```
//! use notemark_renderer::{BuiltinLabels, Converter, RenderOptions};
//!
//! let converter = Converter::new(BuiltinLabels);
//! let html = converter
//!     .render("> **Callout:**\n>\n> Try it!\n", &RenderOptions::default())
//!     .unwrap();
//! assert_eq!(html, "<div class=\"callout\">\n<p>Try it!</p>\n</div>\n");
//! ```

mod codec;
mod deflist;
mod engine;
mod error;
mod locale;
mod notecard;
mod passthrough;
mod pipeline;
pub mod rules;
mod token;

pub use codec::{Base64Codec, IdentityCodec, MacroCodec};
pub use deflist::replace_legacy_dl;
pub use engine::{BlockRule, CoreRule, Engine, EngineBuilder, Env, RenderRule, default_options};
pub use error::{LocaleError, RenderError};
pub use locale::{
    BuiltinLabels, DEFAULT_LOCALE, JsonLabelSource, LabelSource, Labels, LocalePattern,
    NotecardKind, PatternCache, Resolution, Resolved, StaticLabels,
};
pub use notecard::{NOTECARD_TYPE_ATTR, NotecardTransform};
pub use passthrough::{MacroPassthrough, is_macro_line};
pub use pipeline::{Converter, RenderOptions, build_engine};
pub use rules::{escape_html, fence_class};
pub use token::{LineRange, Nesting, Token, TokenKind};
