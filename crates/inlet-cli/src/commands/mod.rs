//! CLI command implementations.

pub mod init;
pub mod run;
pub mod status;
pub mod tools;

use anyhow::{Context, Result};
use inlet_config::Config;
use std::path::Path;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "inlet.toml";

/// Load configuration from the working directory.
pub fn load_config() -> Result<Config> {
    Config::load_from(Path::new(CONFIG_FILE)).context("Failed to load configuration")
}
