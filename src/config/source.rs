//! Figment provider over raw `KEY=value` pairs.
//!
//! Both the settings file and the process environment are exposed through
//! [`KeyValues`]. Every value is emitted as a string; coercion to integers and
//! booleans happens once, at extraction time.

use crate::domain::{is_recognized_key, ENVIRONMENT_KEY, KEYS};
use crate::error::{ConfigError, Result};
use figment::value::{Dict, Map, Value};
use figment::{Metadata, Profile, Provider};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct KeyValues {
    name: String,
    pairs: Vec<(String, String)>,
}

impl KeyValues {
    /// Read the recognized keys of an env-style settings file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() => {
                tracing::debug!(
                    "No settings file at {}, using environment and defaults",
                    path.display()
                );
                return Ok(None);
            }
            Err(err) => return Err(ConfigError::from_dotenv(path, err)),
        };

        let mut pairs = Vec::new();
        for item in iter {
            let (key, value) = item.map_err(|err| ConfigError::from_dotenv(path, err))?;
            if is_recognized_key(&key) {
                pairs.push((key, value));
            } else {
                tracing::debug!("Ignoring unrecognized key {} in {}", key, path.display());
            }
        }

        tracing::debug!("Loaded {} settings from {}", pairs.len(), path.display());
        Ok(Some(Self { name: format!(".env file {}", path.display()), pairs }))
    }

    /// Keep the recognized, non-empty variables of an environment snapshot.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, value)| is_recognized_key(key) && !value.is_empty())
            .collect();
        Self { name: "environment".to_string(), pairs }
    }

    /// Snapshot of the recognized variables of the current process.
    pub fn from_process_env() -> Self {
        Self::from_vars(
            KEYS.iter()
                .chain(std::iter::once(&ENVIRONMENT_KEY))
                .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value))),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Provider for KeyValues {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.name.clone())
    }

    fn data(&self) -> std::result::Result<Map<Profile, Dict>, figment::Error> {
        // Later pairs win, matching how a repeated key behaves in a .env file.
        let dict: Dict =
            self.pairs.iter().map(|(key, value)| (key.clone(), Value::from(value.clone()))).collect();
        Ok(Profile::Default.collect(dict))
    }
}
