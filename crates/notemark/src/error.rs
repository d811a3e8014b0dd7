//! CLI error types.

use notemark_config::ConfigError;
use notemark_renderer::{LocaleError, RenderError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Locale(#[from] LocaleError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
