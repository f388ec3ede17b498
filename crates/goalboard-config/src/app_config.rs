//! Application configuration
//!
//! Configuration loaded from .goalboard.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .goalboard.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Simulated latency of mock API writes (save, delete, toggle)
    #[serde(default = "default_api_latency_ms")]
    pub api_latency_ms: u64,

    /// Simulated latency of the initial todo/goal fetch
    #[serde(default = "default_fetch_latency_ms")]
    pub fetch_latency_ms: u64,

    /// Probability (0.0 - 1.0) that a mock API write fails
    #[serde(default = "default_api_failure_rate")]
    pub api_failure_rate: f64,

    /// Todo/goal names containing any of these words are rejected
    #[serde(default = "default_banned_words")]
    pub banned_words: Vec<String>,

    /// Log every action and resulting state
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,

    /// Start the mock API with a few sample todos and goals
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_api_latency_ms() -> u64 {
    300
}

fn default_fetch_latency_ms() -> u64 {
    1000
}

fn default_api_failure_rate() -> f64 {
    0.1
}

fn default_banned_words() -> Vec<String> {
    vec!["bitcoin".to_string()]
}

fn default_log_actions() -> bool {
    true
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_latency_ms: default_api_latency_ms(),
            fetch_latency_ms: default_fetch_latency_ms(),
            api_failure_rate: default_api_failure_rate(),
            banned_words: default_banned_words(),
            log_actions: default_log_actions(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD, the config directory, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML, clamping the failure rate into 0.0..=1.0
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        if !(0.0..=1.0).contains(&config.api_failure_rate) {
            log::warn!(
                "api_failure_rate {} out of range, clamping",
                config.api_failure_rate
            );
            config.api_failure_rate = config.api_failure_rate.clamp(0.0, 1.0);
        }
        Ok(config)
    }
}
