//! Inlet Config - Configuration and credential loading for Inlet.

mod config;
mod credentials;
mod error;

pub use config::*;
pub use credentials::Credentials;
pub use error::{ConfigError, ConfigResult};
