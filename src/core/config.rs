//! Configuration management for the Pokedex CLI
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/pokedex/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{PokedexError, Result};

/// Well-known root of the location-area catalog, used until the API hands
/// back a `next` cursor.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/location-area/";

/// Main configuration for the Pokedex CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote catalog configuration
    pub api: ApiConfig,
}

/// Remote catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the location-area catalog
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("POKEDEX_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_secs: env::var("POKEDEX_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pokedex")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file; env vars still win over it
        if let Ok(mut config) = Self::load_from_file() {
            config.apply_env_overrides();
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Overwrite file-loaded values with any set environment variables
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = env::var("POKEDEX_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(secs) = env::var("POKEDEX_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.api.timeout_secs = secs;
            }
        }
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(PokedexError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| PokedexError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| PokedexError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}
