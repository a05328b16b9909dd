//! Shell and logging settings.

use serde::Deserialize;

/// Drop-off search settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Radius used when the search prompt is left blank.
    pub default_radius_km: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 5.0,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `ECOPOINT_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
