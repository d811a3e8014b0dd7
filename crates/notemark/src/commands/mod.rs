//! CLI command implementations.

pub(crate) mod locales;
pub(crate) mod render;
pub(crate) mod tokens;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use notemark_config::{CliSettings, Config};
use notemark_renderer::{BuiltinLabels, Converter, JsonLabelSource, RenderOptions};

use crate::error::CliError;

pub(crate) use locales::LocalesArgs;
pub(crate) use render::RenderArgs;
pub(crate) use tokens::TokensArgs;

/// Options shared by every command that needs a converter.
#[derive(Args)]
pub(crate) struct ConverterArgs {
    /// Path to configuration file (default: auto-discover notemark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document locale used to match notecard labels (overrides config).
    #[arg(short, long, env = "NOTEMARK_LOCALE")]
    locale: Option<String>,

    /// Directory of `<locale>.json` label catalogs (overrides config).
    #[arg(long)]
    localization_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConverterArgs {
    /// Load configuration with these arguments applied on top.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            locale: self.locale.clone(),
            localization_dir: self.localization_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Build the converter and per-document options from configuration.
    pub(crate) fn converter(&self) -> Result<(Converter, RenderOptions), CliError> {
        let config = self.load_config()?;
        let converter = match &config.localization_resolved.dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Using localization catalogs");
                Converter::new(JsonLabelSource::new(dir))
            }
            None => Converter::new(BuiltinLabels),
        };
        let options = RenderOptions::with_locale(config.render.locale);
        Ok((converter, options))
    }
}

/// Read a document from a file, or from stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    use std::io::Write;

    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        std::fs::write(&path, "# Title\n").unwrap();

        assert_eq!(read_input(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_input(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");

        write_output(Some(&path), "<p>x</p>\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>x</p>\n");
    }

    #[test]
    fn test_converter_uses_catalog_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("de.json"),
            r#"{"translations": {"": {
                "card_note_label": {"msgstr": ["Hinweis:"]},
                "card_warning_label": {"msgstr": ["Warnung:"]},
                "card_callout_label": {"msgstr": ["Notiz:"]}
            }}}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notemark.toml"), "").unwrap();
        let args = ConverterArgs {
            config: Some(dir.path().join("notemark.toml")),
            locale: Some("de".to_owned()),
            localization_dir: Some(dir.path().to_path_buf()),
            verbose: false,
        };

        let (converter, options) = args.converter().unwrap();
        let html = converter.render("> **Hinweis:** Text\n", &options).unwrap();

        assert_eq!(options.locale, "de");
        assert!(html.starts_with("<div class=\"notecard note\">"));
    }
}
