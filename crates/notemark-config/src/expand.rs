//! Environment variable and home directory expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//! - a leading `~` in paths, expanded to the home directory

use std::path::PathBuf;

use crate::ConfigError;

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.var_name),
    })
}

/// Expand `${VAR}` references and then a leading `~` in a path string.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<PathBuf, ConfigError> {
    let expanded = expand_env(value, field)?;
    Ok(PathBuf::from(shellexpand::tilde(&expanded).as_ref()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("NOTEMARK_TEST_SIMPLE", "hello");
        }
        let result = expand_env("${NOTEMARK_TEST_SIMPLE}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("NOTEMARK_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("NOTEMARK_TEST_UNSET");
        }
        let result = expand_env("${NOTEMARK_TEST_UNSET:-fallback}", "test.field").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("NOTEMARK_TEST_MISSING");
        }
        let err = expand_env("${NOTEMARK_TEST_MISSING}", "localization.dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("NOTEMARK_TEST_MISSING"));
        assert!(err.to_string().contains("localization.dir"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(expand_env("en-US", "render.locale").unwrap(), "en-US");
        assert_eq!(expand_env("$VAR", "render.locale").unwrap(), "$VAR");
    }

    #[test]
    fn test_expand_path_embedded_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("NOTEMARK_TEST_ROOT", "/srv/content");
        }
        let result = expand_path("${NOTEMARK_TEST_ROOT}/l10n", "localization.dir").unwrap();
        assert_eq!(result, PathBuf::from("/srv/content/l10n"));
        unsafe {
            std::env::remove_var("NOTEMARK_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_path_relative_unchanged() {
        let result = expand_path("localizations", "localization.dir").unwrap();
        assert_eq!(result, PathBuf::from("localizations"));
    }
}
