//! Configuration loading and merging
//!
//! Resolves the backend settings from a `.env` file, the process environment
//! and built-in defaults, with proper precedence (Env > File > Defaults).

pub mod loader;
pub mod source;

pub use loader::{load_config, load_config_from, settings_file_path, SETTINGS_FILE_NAME};
pub use source::KeyValues;
