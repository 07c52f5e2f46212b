//! Configuration structures and loading.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure, read from `inlet.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub drive: DriveConfig,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Config {
    /// Load configuration from a specific path. A missing file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create a default config file with comments.
    pub fn create_default_file(path: &Path) -> ConfigResult<()> {
        std::fs::write(path, Self::default_config_string())?;
        Ok(())
    }

    /// Generate a default config file with helpful comments.
    pub fn default_config_string() -> String {
        r#"# Inlet Configuration
# Incremental document ingestion into a vector index

[drive]
# Remote file-store API base URL
api_base = "https://www.googleapis.com/drive/v3"

# Root folder to ingest (recursively). Can also be set via INLET_ROOT_FOLDER.
# root_folder = ""

[embedding]
# Embedding service API base URL
api_base = "https://api.openai.com/v1"

# Embedding model
model = "text-embedding-3-small"

# Request timeout in seconds
timeout_seconds = 120

[index]
# Vector index host
# host = "https://my-index.example.pinecone.io"

# Namespace (logical partition) that all vectors land in
namespace = "site"

[pipeline]
# Manifest file tracking processed documents
manifest_path = "inlet_manifest.json"

[tools]
# Document-conversion tool used for legacy slide decks
soffice = "soffice"

# Plain-text extractor used for legacy word documents
antiword = "antiword"
"#
        .to_string()
    }

    /// Check the settings the pipeline cannot run without. Credentials
    /// are validated separately when loaded from the environment.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.drive.root_folder.is_empty() {
            return Err(ConfigError::Invalid(
                "drive.root_folder is not set (or set INLET_ROOT_FOLDER)".to_string(),
            ));
        }
        if self.index.host.is_empty() {
            return Err(ConfigError::Invalid("index.host is not set".to_string()));
        }
        Ok(())
    }
}

/// Remote file-store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    pub api_base: String,
    pub root_folder: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base: "https://www.googleapis.com/drive/v3".to_string(),
            root_folder: String::new(),
        }
    }
}

/// Embedding service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub api_base: String,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            model: "text-embedding-3-small".to_string(),
            timeout_seconds: 120,
        }
    }
}

/// Vector index settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub host: String,
    pub namespace: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            namespace: "site".to_string(),
        }
    }
}

/// Pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub manifest_path: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            manifest_path: "inlet_manifest.json".to_string(),
        }
    }
}

/// External tool paths for legacy binary formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub soffice: String,
    pub antiword: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            soffice: "soffice".to_string(),
            antiword: "antiword".to_string(),
        }
    }
}
