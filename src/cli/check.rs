//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, settings_file_path};

#[derive(Args)]
pub struct CheckArgs {
    /// Directory containing the .env settings file
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let settings_file = settings_file_path(&args.dir);
    let config = load_config(&args.dir)
        .with_context(|| format!("Configuration from {} is not usable", settings_file.display()))?;

    tracing::debug!("Resolved configuration: {:?}", config.redacted());
    println!("configuration OK");
    Ok(())
}
