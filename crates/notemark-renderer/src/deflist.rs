//! Legacy definition-list syntax.
//!
//! Older documents spell a definition list as two bullet items, the second
//! starting with a colon:
//!
//! ```text
//! - Term
//! - : Definition
//! ```
//!
//! [`replace_legacy_dl`] rewrites that into the `Term` / `:   Definition` form
//! understood by the parser's definition-list extension.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static LEGACY_DL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(> )?( *)- ([^\n]+)\n+(> )?( *)- : ").expect("valid legacy dl regex")
});

/// Rewrite legacy definition lists.
///
/// The blockquote marker of the term line is kept, as is the one on the
/// definition line; list indentation on both lines is dropped. Blank lines
/// between term and definition are collapsed.
///
/// ```
/// use notemark_renderer::replace_legacy_dl;
///
/// assert_eq!(replace_legacy_dl("- Term\n- : Definition\n"), "Term\n:   Definition\n");
/// ```
#[must_use]
pub fn replace_legacy_dl(text: &str) -> Cow<'_, str> {
    LEGACY_DL.replace_all(text, "${1}${3}\n${4}:   ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_pair() {
        assert_eq!(
            replace_legacy_dl("- Term\n- : Definition\n"),
            "Term\n:   Definition\n"
        );
    }

    #[test]
    fn test_multiple_pairs() {
        let input = "- `a`\n- : First\n- `b`\n- : Second\n";
        assert_eq!(
            replace_legacy_dl(input),
            "`a`\n:   First\n`b`\n:   Second\n"
        );
    }

    #[test]
    fn test_nested_indentation_dropped() {
        assert_eq!(
            replace_legacy_dl("  - Term\n  - : Definition\n"),
            "Term\n:   Definition\n"
        );
    }

    #[test]
    fn test_blockquote_prefix_kept() {
        assert_eq!(
            replace_legacy_dl("> - Term\n> - : Definition\n"),
            "> Term\n> :   Definition\n"
        );
    }

    #[test]
    fn test_blank_lines_collapsed() {
        assert_eq!(
            replace_legacy_dl("- Term\n\n- : Definition\n"),
            "Term\n:   Definition\n"
        );
    }

    #[test]
    fn test_regular_list_untouched() {
        let input = "- one\n- two\n";
        assert!(matches!(replace_legacy_dl(input), Cow::Borrowed(_)));
        assert_eq!(replace_legacy_dl(input), input);
    }

    #[test]
    fn test_multiline_definition_continuation_kept() {
        assert_eq!(
            replace_legacy_dl("- Term\n- : Definition\n  more text\n"),
            "Term\n:   Definition\n  more text\n"
        );
    }
}
