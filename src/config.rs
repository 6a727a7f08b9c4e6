//! Configuration management for TopicWatch
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all dispatcher settings. It uses the `figment`
//! crate to load configuration from a `topicwatch.toml` file and merge it
//! with environment variables.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// The main configuration struct for the dispatcher.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the dispatcher.
    pub log_level: String,
    /// Configuration for notification dispatch.
    pub notifications: NotificationsConfig,
    /// Performance tuning knobs.
    pub performance: PerformanceConfig,
}

/// Configuration for notification dispatch.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationsConfig {
    /// Whether notifications are dispatched at all.
    pub enabled: bool,
}

/// Performance tuning knobs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PerformanceConfig {
    /// Capacity of the event channel feeding the dispatcher.
    pub queue_capacity: usize,
}

impl Config {
    /// Loads the dispatcher configuration from the specified file.
    ///
    /// # Arguments
    /// * `config_path` - The path to the TOML configuration file.
    pub fn load(config_path: &str) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g., TOPICWATCH_LOG_LEVEL=debug
            .merge(Env::prefixed("TOPICWATCH_"))
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            notifications: NotificationsConfig { enabled: true },
            performance: PerformanceConfig {
                queue_capacity: 1024,
            },
        }
    }
}
