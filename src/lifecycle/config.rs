use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`SystemConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_VAR: &str = "STOREFRONT_CHANNEL_CAPACITY";

/// Runtime settings for [`StoreSystem`](super::StoreSystem).
///
/// Log verbosity is not part of this struct; it comes from `RUST_LOG`
/// (see [`setup_tracing`](super::setup_tracing)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of the catalog actor's request channel. When it is full,
    /// callers wait for space.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable lookup; unset variables keep their defaults.
    ///
    /// # Errors
    /// [`ConfigError::InvalidNumber`] when a variable is set to something other
    /// than a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: CHANNEL_CAPACITY_VAR,
                    value,
                })?;
        }
        Ok(config)
    }
}
