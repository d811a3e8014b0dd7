//! `notemark locales` command implementation.

use clap::Args;
use notemark_renderer::Resolution;

use super::ConverterArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the locales command.
#[derive(Args)]
pub(crate) struct LocalesArgs {
    #[command(flatten)]
    pub converter: ConverterArgs,
}

impl LocalesArgs {
    /// List locales with notecard labels and report how the configured
    /// locale resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the label catalogs are invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (converter, options) = self.converter.converter()?;
        let patterns = converter.patterns();

        for locale in patterns.locales()? {
            output.info(&locale);
        }

        let resolved = patterns.resolve(&options.locale)?;
        if resolved.resolution == Resolution::Fallback {
            output.warning(&format!(
                "No labels for {}; documents fall back to the default locale",
                options.locale
            ));
        } else {
            output.success(&format!("Labels found for {}", options.locale));
        }
        Ok(())
    }
}
