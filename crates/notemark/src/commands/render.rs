//! `notemark render` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{ConverterArgs, read_input, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render, or `-` for stdin.
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub converter: ConverterArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading, rendering or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (converter, options) = self.converter.converter()?;
        let markdown = read_input(&self.input)?;

        let html = converter.render(&markdown, &options)?;
        write_output(self.output.as_deref(), &html)?;

        if let Some(path) = &self.output {
            Output::new().success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}
