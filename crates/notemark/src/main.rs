//! notemark CLI - Markdown to HTML with notecards.
//!
//! Provides commands for:
//! - `render`: Convert a Markdown document to HTML
//! - `tokens`: Dump the rewritten token tree as JSON
//! - `locales`: List locales with notecard labels

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LocalesArgs, RenderArgs, TokensArgs};
use output::Output;

/// notemark - Markdown to HTML renderer.
#[derive(Parser)]
#[command(name = "notemark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown document to HTML.
    Render(RenderArgs),
    /// Print the token tree of a document as JSON.
    Tokens(TokensArgs),
    /// List locales with notecard labels.
    Locales(LocalesArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.converter.verbose,
            Self::Tokens(args) => args.converter.verbose,
            Self::Locales(args) => args.converter.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Tokens(args) => args.execute(),
        Commands::Locales(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
