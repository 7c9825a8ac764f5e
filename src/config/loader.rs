//! Settings file discovery and layered loading

use super::source::KeyValues;
use crate::domain::Config;
use crate::error::Result;
use figment::providers::Serialized;
use figment::Figment;
use std::path::{Path, PathBuf};

/// Name of the settings file looked up in the configuration directory.
pub const SETTINGS_FILE_NAME: &str = ".env";

pub fn settings_file_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

/// Load the configuration from `dir/.env` and the process environment.
pub fn load_config(dir: &Path) -> Result<Config> {
    load(dir, KeyValues::from_process_env())
}

/// Load the configuration with an explicit environment snapshot instead of
/// the process environment.
pub fn load_config_from<I, K, V>(dir: &Path, vars: I) -> Result<Config>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    load(dir, KeyValues::from_vars(vars))
}

fn load(dir: &Path, env: KeyValues) -> Result<Config> {
    let settings_file = settings_file_path(dir);

    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(file) = KeyValues::from_file(&settings_file)? {
        figment = figment.merge(file);
    }
    tracing::debug!("{} recognized variables in {}", env.len(), env.name());
    figment = figment.merge(env);

    // Lossy extraction turns "72" into a number and "true" into a boolean.
    let config: Config = figment.extract_lossy().map_err(Box::new)?;
    Ok(config)
}
