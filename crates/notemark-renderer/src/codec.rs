//! Macro payload encoding.
//!
//! Macro invocations (`{{ jsxref("Array") }}`) contain characters Markdown
//! would interpret. Before parsing, a [`MacroCodec`] replaces each invocation
//! with an opaque placeholder that survives parsing and rendering unchanged;
//! after rendering, the placeholders are decoded back.

use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::{Captures, Regex};

/// Reversible macro placeholder transform.
///
/// `decode(encode(x))` must reproduce every macro span of `x` byte for byte,
/// and both directions must leave non-macro text unchanged.
pub trait MacroCodec: Send + Sync {
    fn encode(&self, text: &str) -> String;
    fn decode(&self, text: &str) -> String;
}

/// Leaves text unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityCodec;

impl MacroCodec for IdentityCodec {
    fn encode(&self, text: &str) -> String {
        text.to_owned()
    }

    fn decode(&self, text: &str) -> String {
        text.to_owned()
    }
}

static INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid invocation regex"));

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9+/=]*)\}\}").expect("valid placeholder regex"));

/// Encodes each single-line `{{…}}` payload as standard base64.
///
/// ```
/// use notemark_renderer::{Base64Codec, MacroCodec};
///
/// let encoded = Base64Codec.encode("See {{ jsxref(\"Array\") }}.");
/// assert_eq!(encoded, "See {{IGpzeHJlZigiQXJyYXkiKSA=}}.");
/// assert_eq!(Base64Codec.decode(&encoded), "See {{ jsxref(\"Array\") }}.");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl MacroCodec for Base64Codec {
    fn encode(&self, text: &str) -> String {
        INVOCATION
            .replace_all(text, |caps: &Captures<'_>| {
                format!("{{{{{}}}}}", STANDARD.encode(&caps[1]))
            })
            .into_owned()
    }

    fn decode(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                STANDARD
                    .decode(&caps[1])
                    .ok()
                    .and_then(|bytes| String::from_utf8(bytes).ok())
                    .map_or_else(|| caps[0].to_owned(), |payload| format!("{{{{{payload}}}}}"))
            })
            .into_owned()
    }
}
