//! Gate configuration.
//!
//! Names the request parameters the authorization gate searches, in order,
//! when a requirement carries no explicit board id. Loaded from environment
//! variables with defaults that match the usual `/boards/{boardId}` routes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gate::ResourceIdSource;

/// Environment variable listing route keys (comma-separated).
pub const ROUTE_KEYS_VAR: &str = "AUTHZ_ROUTE_KEYS";
/// Environment variable listing query keys (comma-separated).
pub const QUERY_KEYS_VAR: &str = "AUTHZ_QUERY_KEYS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Where the gate looks for a board id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Route parameter names, tried first, in order.
    pub route_keys: Vec<String>,

    /// Query parameter names, tried after every route key, in order.
    pub query_keys: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            route_keys: vec!["boardId".to_string(), "id".to_string()],
            query_keys: vec!["boardId".to_string()],
        }
    }
}

impl GateConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AUTHZ_ROUTE_KEYS`: route parameter names (default: `boardId,id`)
    /// - `AUTHZ_QUERY_KEYS`: query parameter names (default: `boardId`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        let config = Self {
            route_keys: lookup(ROUTE_KEYS_VAR)
                .map(|v| split_keys(&v))
                .unwrap_or(default.route_keys),
            query_keys: lookup(QUERY_KEYS_VAR)
                .map(|v| split_keys(&v))
                .unwrap_or(default.query_keys),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that at least one key is configured and none are blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.route_keys.is_empty() && self.query_keys.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: format!("{ROUTE_KEYS_VAR}/{QUERY_KEYS_VAR}"),
                message: "at least one route or query key is required".to_string(),
            });
        }
        for (var, keys) in [(ROUTE_KEYS_VAR, &self.route_keys), (QUERY_KEYS_VAR, &self.query_keys)] {
            if keys.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    key: var.to_string(),
                    message: "keys must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The ordered lookup sequence: every route key, then every query key.
    pub fn sources(&self) -> Vec<ResourceIdSource> {
        self.route_keys
            .iter()
            .cloned()
            .map(ResourceIdSource::Route)
            .chain(self.query_keys.iter().cloned().map(ResourceIdSource::Query))
            .collect()
    }
}

fn split_keys(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}
