use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .test-auditor.toml.
///
/// All fields are optional; the tool works with zero config as long as a
/// token arrives via flag or environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    /// GitHub API token. If None, falls back to GITHUB_ACCESS_TOKEN env var.
    pub token: Option<String>,
    /// GitHub hostname for Enterprise installs. Defaults to github.com.
    pub host: Option<String>,
}

impl Config {
    /// Load configuration from .test-auditor.toml in the current directory,
    /// falling back to defaults when the file is absent.
    ///
    /// The environment fallback is resolved here, once at startup; deeper
    /// logic only ever sees plain values.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(".test-auditor.toml");
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };

        if config.github.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_ACCESS_TOKEN") {
                config.github.token = Some(token);
            }
        }

        Ok(config)
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }

    pub fn github_host(&self) -> String {
        self.github
            .host
            .clone()
            .unwrap_or_else(|| "github.com".to_string())
    }
}
