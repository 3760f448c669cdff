use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address override (e.g. "0.0.0.0:8080"); falls back to the
    /// leptos site address when unset
    pub listen: Option<String>,

    /// Serve on a unix socket at this path instead of TCP
    pub socket: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// tracing env-filter directive (e.g. "info" or "jdcosta=debug")
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - `JDCOSTA_LISTEN`
    /// - `JDCOSTA_SOCKET`
    /// - `JDCOSTA_LOG_FILTER`
    ///
    /// # Errors
    ///
    /// Returns an error when an env var is set to a value the
    /// configuration shape cannot absorb.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("JDCOSTA_").split("_"))
            .extract()
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Default, Serialize)]
struct ConfigDefaults {
    listen: Option<String>,
    socket: Option<String>,
    log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::load().unwrap();
        assert!(config.listen.is_none());
        assert!(config.socket.is_none());
        assert_eq!(config.log.filter, "info");
    }
}
