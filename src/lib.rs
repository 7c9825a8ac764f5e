//! muchtodo-config: configuration loading for the MuchToDo backend
//!
//! Resolves the backend settings from an optional `.env` file, the process
//! environment and built-in defaults into a single immutable [`Config`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use config::{load_config, load_config_from};
pub use domain::Config;
pub use error::{ConfigError, Result};
