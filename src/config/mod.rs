//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("{0} not configured")]
    MissingCredential(String),

    #[error("{0} has an invalid format")]
    InvalidCredential(String),
}

/// Per-game match window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWindow {
    /// How many match IDs to request from the match list endpoint
    pub match_history_count: usize,

    /// How many of those matches are fetched and folded
    pub matches_analyzed: usize,

    /// How many match details are echoed back as recent matches
    pub recent_matches: usize,
}

impl MatchWindow {
    fn league() -> Self {
        Self {
            match_history_count: 25,
            matches_analyzed: 10,
            recent_matches: 10,
        }
    }

    fn valorant() -> Self {
        Self {
            match_history_count: 25,
            matches_analyzed: 25,
            recent_matches: 10,
        }
    }
}

fn default_league_window() -> MatchWindow {
    MatchWindow::league()
}

fn default_valorant_window() -> MatchWindow {
    MatchWindow::valorant()
}

/// Riot Games API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiotConfig {
    /// Environment variable holding the API key
    #[serde(default = "default_riot_key_env")]
    pub api_key_env: String,

    /// Platform host (summoner-v4, league-v4)
    #[serde(default = "default_platform_url")]
    pub platform_url: String,

    /// Regional host (account-v1, match-v5)
    #[serde(default = "default_regional_url")]
    pub regional_url: String,

    /// Valorant shard host (val match-v1)
    #[serde(default = "default_valorant_url")]
    pub valorant_url: String,

    /// Tagline used when a Riot ID has no `#TAG` part
    #[serde(default = "default_tagline")]
    pub default_tagline: String,

    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Cap on in-flight match detail requests per stats request
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_requests: usize,

    #[serde(default = "default_league_window")]
    pub league: MatchWindow,

    #[serde(default = "default_valorant_window")]
    pub valorant: MatchWindow,
}

fn default_riot_key_env() -> String {
    "RIOT_API_KEY".to_string()
}

fn default_platform_url() -> String {
    "https://na1.api.riotgames.com".to_string()
}

fn default_regional_url() -> String {
    "https://americas.api.riotgames.com".to_string()
}

fn default_valorant_url() -> String {
    "https://na.api.riotgames.com".to_string()
}

fn default_tagline() -> String {
    "NA1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_concurrent() -> usize {
    4
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_riot_key_env(),
            platform_url: default_platform_url(),
            regional_url: default_regional_url(),
            valorant_url: default_valorant_url(),
            default_tagline: default_tagline(),
            timeout_seconds: default_timeout(),
            max_concurrent_requests: default_max_concurrent(),
            league: MatchWindow::league(),
            valorant: MatchWindow::valorant(),
        }
    }
}

impl RiotConfig {
    /// Read the Riot API key from the environment and check its shape.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        let key = std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential("Riot API key".to_string()))?;
        validate_riot_key(key.trim())?;
        Ok(key.trim().to_string())
    }
}

/// A Riot key is a UUID, optionally prefixed with `RGAPI-`.
pub fn validate_riot_key(key: &str) -> Result<(), ConfigError> {
    let bare = key.strip_prefix("RGAPI-").unwrap_or(key);
    if bare.len() != 36 {
        return Err(ConfigError::InvalidCredential("Riot API key".to_string()));
    }
    Ok(())
}

/// Shorten a credential for log output.
pub fn redact(key: &str) -> String {
    let visible: String = key.chars().take(10).collect();
    format!("{}...[REDACTED]", visible)
}

/// Steam Web API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamConfig {
    #[serde(default = "default_steam_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_steam_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_steam_key_env() -> String {
    "STEAM_API_KEY".to_string()
}

fn default_steam_url() -> String {
    "https://api.steampowered.com".to_string()
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_steam_key_env(),
            base_url: default_steam_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl SteamConfig {
    pub fn api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential("Steam API key".to_string()))
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub riot: RiotConfig,

    #[serde(default)]
    pub steam: SteamConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            riot: RiotConfig::default(),
            steam: SteamConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.riot.timeout_seconds == 0 || self.steam.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.riot.max_concurrent_requests == 0 {
            return Err(ConfigError::ValidationError(
                "max_concurrent_requests must be greater than 0".to_string(),
            ));
        }

        if self.riot.league.matches_analyzed == 0 || self.riot.valorant.matches_analyzed == 0 {
            return Err(ConfigError::ValidationError(
                "matches_analyzed must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
