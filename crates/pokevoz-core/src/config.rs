//! Relay configuration loaded from the process environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Top-level relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokevozConfig {
    /// Interface the HTTP server binds to.
    pub bind: String,
    /// HTTP server port.
    pub port: u16,
    /// Base URL of the species-data API (no trailing slash).
    pub pokeapi_base: String,
    /// Timeout applied to every outbound HTTP call, in seconds.
    pub http_timeout_secs: u64,
}

impl Default for PokevozConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.into(),
            port: DEFAULT_PORT,
            pokeapi_base: DEFAULT_POKEAPI_BASE.into(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl PokevozConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let bind = lookup("POKEVOZ_BIND")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(defaults.bind);
        let pokeapi_base = lookup("POKEAPI_BASE")
            .map(|b| b.trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or(defaults.pokeapi_base);
        let http_timeout_secs = lookup("POKEVOZ_HTTP_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .filter(|t| *t > 0)
            .unwrap_or(defaults.http_timeout_secs);

        Self {
            bind,
            port,
            pokeapi_base,
            http_timeout_secs,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Socket address string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PokevozConfig::from_vars(lookup(&[]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.pokeapi_base, DEFAULT_POKEAPI_BASE);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = PokevozConfig::from_vars(lookup(&[
            ("PORT", "8080"),
            ("POKEVOZ_BIND", "127.0.0.1"),
            ("POKEAPI_BASE", "http://localhost:9000/api/v2/"),
            ("POKEVOZ_HTTP_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.pokeapi_base, "http://localhost:9000/api/v2");
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = PokevozConfig::from_vars(lookup(&[
            ("PORT", "not-a-port"),
            ("POKEVOZ_HTTP_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }
}
