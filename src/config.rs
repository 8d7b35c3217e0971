use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Healthmate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_BIND: &str = "HEALTHMATE_BIND";
pub const ENV_KNOWLEDGE: &str = "HEALTHMATE_KNOWLEDGE";
pub const ENV_MAX_UPLOAD_BYTES: &str = "HEALTHMATE_MAX_UPLOAD_BYTES";

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// 5 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "healthmate=info,healthmate_lib=info,tower_http=warn"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} must be a positive byte count, got {value}")]
    InvalidUploadLimit { var: &'static str, value: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// JSON knowledge file replacing the builtin tables.
    pub knowledge_path: Option<PathBuf>,
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            knowledge_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidBind {
            var: ENV_BIND,
            value: bind.clone(),
        })?;

        let max_upload_bytes = match get(ENV_MAX_UPLOAD_BYTES) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidUploadLimit {
                        var: ENV_MAX_UPLOAD_BYTES,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            bind_addr,
            knowledge_path: get(ENV_KNOWLEDGE).map(PathBuf::from),
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_BIND, "0.0.0.0:9000"),
            (ENV_KNOWLEDGE, "/etc/healthmate/knowledge.json"),
            (ENV_MAX_UPLOAD_BYTES, "1024"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(
            config.knowledge_path,
            Some(PathBuf::from("/etc/healthmate/knowledge.json"))
        );
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[(ENV_BIND, "  "), (ENV_KNOWLEDGE, "")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_bind_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_BIND, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));
        assert!(err.to_string().contains(ENV_BIND));
    }

    #[test]
    fn zero_or_garbage_upload_limit_is_rejected() {
        for raw in ["0", "-5", "lots"] {
            let err =
                AppConfig::from_lookup(lookup(&[(ENV_MAX_UPLOAD_BYTES, raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUploadLimit { .. }), "{raw}");
        }
    }

    #[test]
    fn app_name_is_healthmate() {
        assert_eq!(APP_NAME, "Healthmate");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}
