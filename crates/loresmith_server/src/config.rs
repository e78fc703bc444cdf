//! Layered service configuration.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (include_str! from loresmith.toml)
//! 2. `~/.config/loresmith/loresmith.toml`
//! 3. `./loresmith.toml`
//! 4. `LORESMITH__<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use loresmith_error::{ConfigError, LoresmithResult};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../loresmith.toml");

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

/// Anthropic model settings. The API key comes from `ANTHROPIC_API_KEY`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnthropicSection {
    /// Model identifier
    pub model: String,
    /// Completion budget per request
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Messages endpoint
    pub api_url: String,
}

/// Connection pool settings. The URL comes from `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSection {
    /// Maximum pooled connections
    pub pool_size: u32,
}

/// Pinning service settings. The JWT comes from `PINATA_JWT`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpfsSection {
    /// Pinata API base URL
    pub api_url: String,
    /// Gateway for browsable links
    pub gateway_url: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoresmithConfig {
    /// HTTP listener
    pub server: ServerSection,
    /// LLM provider
    pub anthropic: AnthropicSection,
    /// Document store
    pub database: DatabaseSection,
    /// Metadata pinning
    pub ipfs: IpfsSection,
    /// Logging
    pub logging: LoggingSection,
}

impl LoresmithConfig {
    /// Load configuration from every layer.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value has the
    /// wrong type.
    pub fn load() -> LoresmithResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/loresmith/loresmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("loresmith").required(false))
            .add_source(
                Environment::with_prefix("LORESMITH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with a single file.
    pub fn from_file(path: impl AsRef<Path>) -> LoresmithResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// The bundled defaults alone.
    pub fn defaults() -> LoresmithResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> LoresmithResult<Self> {
        Ok(builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {e}")))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {e}")))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = LoresmithConfig::defaults().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.anthropic.max_tokens, 2048);
        assert_eq!(config.database.pool_size, 8);
        assert!(!config.logging.json);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("loresmith-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.toml");
        std::fs::write(&path, "[server]\nport = 8081\n\n[logging]\njson = true\n").unwrap();

        let config = LoresmithConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.logging.json);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = std::env::temp_dir().join(format!("loresmith-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

        assert!(LoresmithConfig::from_file(&path).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
