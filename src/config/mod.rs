mod api;
mod defaults;

use crate::cli::Args;
use crate::prompt::DEFAULT_HISTORY_WINDOW;
use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::ApiConfig;
pub use defaults::{default_data_dir, DEFAULT_API_ENDPOINT, DEFAULT_MODEL};

use crate::error::{CareloopError, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default_model: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub history_window: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_window: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { verbose: None }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

/// Resolved runtime configuration. Precedence everywhere: CLI args >
/// environment variables > config file > built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the direct API path. Optional because the proxy
    /// path carries no client-side credential at all.
    pub api_key: Option<String>,
    pub api_endpoint: String,
    pub model: String,
    pub proxy_url: Option<String>,
    pub history_window: usize,
    pub verbose: bool,
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let json_config = JsonConfig::load().unwrap_or_default();

        // Credential comes from the environment only, never from a file
        let api_key = env::var("GEMINI_API_KEY").ok();

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("CARE_API_ENDPOINT").ok())
            .or(json_config.api.endpoint.clone())
            .map(|endpoint| endpoint.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let model = args
            .model
            .clone()
            .or_else(|| env::var("CARE_MODEL").ok())
            .or(json_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let proxy_url = env::var("CARE_PROXY_URL")
            .ok()
            .or(json_config.api.proxy_url.clone())
            .map(|url| url.trim_end_matches('/').to_string());

        let history_window = env::var("CARE_HISTORY_WINDOW")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .or(json_config.chat.history_window)
            .unwrap_or(DEFAULT_HISTORY_WINDOW);

        let verbose = env::var("CARE_VERBOSE")
            .ok()
            .map(|v| v == "true")
            .or(json_config.session.verbose)
            .unwrap_or(false);

        let data_dir = env::var("CARE_DATA_DIR")
            .ok()
            .or(json_config.store.data_dir.clone())
            .map(PathBuf::from);

        Ok(Config {
            api_key,
            api_endpoint,
            model,
            proxy_url,
            history_window,
            verbose,
            data_dir,
        })
    }

    /// The direct API path cannot run without a credential; failing here
    /// keeps the check ahead of any network I/O.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            CareloopError::ConfigError(
                "GEMINI_API_KEY environment variable not set (or set CARE_PROXY_URL to use a proxy)"
                    .to_string(),
            )
        })
    }
}

impl JsonConfig {
    pub fn load() -> AnyResult<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                // YAML first, JSON fallback
                let config: JsonConfig = if path.extension().and_then(|s| s.to_str())
                    == Some("yaml")
                    || path.extension().and_then(|s| s.to_str()) == Some("yml")
                {
                    serde_yaml::from_str(&contents).with_context(|| {
                        format!("Failed to parse YAML config file: {}", path.display())
                    })?
                } else {
                    serde_json::from_str(&contents).with_context(|| {
                        format!("Failed to parse JSON config file: {}", path.display())
                    })?
                };

                return Ok(config);
            }
        }

        Ok(JsonConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".careloop.yaml"));
        paths.push(PathBuf::from(".careloop.yml"));
        paths.push(PathBuf::from(".careloop.json"));

        // 2. User's config directory (global config)
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("careloop");
            paths.push(config_dir.join("careloop.yaml"));
            paths.push(config_dir.join("careloop.yml"));
            paths.push(config_dir.join("careloop.json"));
        }

        paths
    }
}
