use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the keyword search server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
}

/// Identity advertised to MCP clients during the handshake
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name reported in `serverInfo`
    pub name: String,
    /// Usage hint sent to clients alongside the capabilities
    pub instructions: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "keyword-search-server".into(),
            instructions: "Use search_keyword to find every line of a file that contains a keyword. \
                Results report 1-based line numbers and zero-based character offsets of each \
                occurrence. Matching is case-insensitive unless caseSensitive is true."
                .into(),
        }
    }
}

/// Defaults applied to every scan
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Used when a request omits `caseSensitive`
    pub case_sensitive: bool,
    /// Strip a trailing `\r` from each line (CRLF files)
    pub normalize_line_endings: bool,
    /// Reject files that are not valid UTF-8 instead of decoding them lossily
    pub strict_utf8: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Resolve the configuration for this process.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Get the per-user config file path, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "keyword-search", "keyword-search")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
