//! muchtodo-config: inspect and validate the MuchToDo backend configuration
//!
//! Loads the settings exactly as the backend does at startup and prints or
//! checks the resolved values.

use anyhow::Result;

fn main() -> Result<()> {
    muchtodo_config::cli::run()
}
