//! Application configuration.
//!
//! Aggregates configuration from all modules into a single Config struct
//! that can be loaded from YAML files or environment variables. Every field
//! has a default, so an empty configuration reproduces the standard point
//! awards and scheduling rules.

mod rewards;
mod runtime;

pub use rewards::{
    RewardsConfig, ScheduleConfig, DEFAULT_MIN_LEAD_MINUTES, DEFAULT_PICKUP_POINTS,
    DEFAULT_REFERRAL_POINTS,
};
pub use runtime::{GeoConfig, LoggingConfig};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "ecopoint.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "ECOPOINT_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "ECOPOINT";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "ECOPOINT_LOG";

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flat point awards.
    pub rewards: RewardsConfig,
    /// Pickup scheduling rules.
    pub schedule: ScheduleConfig,
    /// Drop-off search settings.
    pub geo: GeoConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `ecopoint.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config: Config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would let a balance go down or a search misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let awards = [
            ("rewards.pickup_points", self.rewards.pickup_points),
            ("rewards.referral_points", self.rewards.referral_points),
            ("geo.default_radius_km", self.geo.default_radius_km),
        ];
        for (key, value) in awards {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }
        if self.schedule.min_lead_minutes < 0 {
            return Err(ConfigError::Invalid(format!(
                "schedule.min_lead_minutes must not be negative, got {}",
                self.schedule.min_lead_minutes
            )));
        }
        Ok(())
    }

    /// Create config for testing.
    pub fn for_test() -> Self {
        Self::default()
    }
}
