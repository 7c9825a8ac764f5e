//! Show command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::config::load_config;
use crate::domain::Config;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// KEY=value lines
    Text,
    /// Pretty-printed JSON object
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Directory containing the .env settings file
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print secrets instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let config = load_config(&args.dir).with_context(|| {
        format!("Failed to load configuration from {}", args.dir.display())
    })?;
    let config = if args.show_secrets { config } else { config.redacted() };

    println!("{}", render(&config, args.format)?);
    Ok(())
}

fn render(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(config
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")
        }
    }
}
