//! Portal configuration, loaded from JSON.

use std::path::Path;
use std::time::Duration;

use arenagate_route::RouteConfig;
use serde::{Deserialize, Serialize};

use crate::ArenagateError;

/// Everything a [`Portal`](crate::Portal) can be configured with.
///
/// All fields have defaults, so `{}` is a valid config file:
///
/// ```json
/// {
///   "routes": { "login": "/sign-in", "aliases": { "/home": "/" } },
///   "login_delay_ms": 250
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Paths the guards work with.
    pub routes: RouteConfig,

    /// Round trip of the simulated authenticator, in milliseconds.
    pub login_delay_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            routes: RouteConfig::default(),
            login_delay_ms: 1_000,
        }
    }
}

impl PortalConfig {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    /// [`ArenagateError::Config`] for malformed JSON,
    /// [`ArenagateError::Route`] for invalid paths.
    pub fn from_json_str(json: &str) -> Result<Self, ArenagateError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ArenagateError::Config(format!("invalid JSON: {e}")))?;
        config.validated()
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArenagateError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ArenagateError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "loaded portal config");
        Self::from_json_str(&json)
    }

    /// Validates the route table.
    pub fn validated(mut self) -> Result<Self, ArenagateError> {
        self.routes = self.routes.validated()?;
        Ok(self)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
