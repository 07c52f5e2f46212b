//! Credential loading from the environment.

use crate::error::{ConfigError, ConfigResult};

pub const DRIVE_TOKEN_VAR: &str = "INLET_DRIVE_TOKEN";
pub const EMBED_API_KEY_VAR: &str = "INLET_EMBED_API_KEY";
pub const INDEX_API_KEY_VAR: &str = "INLET_INDEX_API_KEY";
pub const ROOT_FOLDER_VAR: &str = "INLET_ROOT_FOLDER";

/// Service credentials. Never read from the config file; only from the
/// environment (a `.env` file is honored if present).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub drive_token: String,
    pub embed_api_key: String,
    pub index_api_key: String,
}

impl Credentials {
    /// Load all credentials from the environment. Missing variables are
    /// startup-fatal.
    pub fn from_env() -> ConfigResult<Self> {
        // Best effort; a missing .env file is fine.
        let _ = dotenvy::dotenv();

        Ok(Self {
            drive_token: require(DRIVE_TOKEN_VAR)?,
            embed_api_key: require(EMBED_API_KEY_VAR)?,
            index_api_key: require(INDEX_API_KEY_VAR)?,
        })
    }

    /// Root folder override from the environment, if set.
    pub fn root_folder_from_env() -> Option<String> {
        std::env::var(ROOT_FOLDER_VAR).ok().filter(|v| !v.is_empty())
    }
}

fn require(var: &'static str) -> ConfigResult<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingCredential(var))
}
