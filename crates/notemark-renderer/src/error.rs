//! Error types for rendering and localization.

use std::path::PathBuf;

/// Localization data error.
///
/// Raised while building notecard label patterns. These are configuration
/// errors: they surface on first use of the label data and are fatal for the
/// document being rendered.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// Localization directory or file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Localization file is not valid JSON or has the wrong shape.
    #[error("Invalid localization file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A notecard label is missing or empty.
    #[error("Locale {locale} has no usable {key} translation")]
    MissingLabel { locale: String, key: String },
    /// Neither the requested locale nor the default locale has labels.
    #[error("No notecard labels for default locale {0}")]
    MissingDefault(String),
    /// Label pattern failed to compile.
    #[error("Invalid notecard label pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Rendering error.
///
/// Malformed Markdown never produces an error; only configuration problems do.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{0}")]
    Locale(#[from] LocaleError),
}
