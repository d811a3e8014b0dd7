//! `notemark tokens` command implementation.

use std::borrow::Cow;
use std::path::PathBuf;

use clap::Args;
use notemark_renderer::Token;
use serde::Serialize;

use super::{ConverterArgs, read_input, write_output};
use crate::error::CliError;

/// Arguments for the tokens command.
#[derive(Args)]
pub(crate) struct TokensArgs {
    /// Markdown file to parse, or `-` for stdin.
    input: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub converter: ConverterArgs,
}

/// Token with its markdown-it style type name, e.g. `notecard_open`.
#[derive(Serialize)]
struct TokenEntry<'a> {
    #[serde(rename = "type")]
    type_name: Cow<'static, str>,
    #[serde(flatten)]
    token: &'a Token,
}

impl TokensArgs {
    /// Execute the tokens command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading, parsing or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (converter, options) = self.converter.converter()?;
        let markdown = read_input(&self.input)?;

        let tokens = converter.tokens(&markdown, &options)?;
        let mut json = to_json(&tokens)?;
        json.push('\n');
        write_output(self.output.as_deref(), &json)
    }
}

fn to_json(tokens: &[Token]) -> Result<String, CliError> {
    let entries: Vec<TokenEntry<'_>> = tokens
        .iter()
        .map(|token| TokenEntry {
            type_name: token.type_name(),
            token,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
