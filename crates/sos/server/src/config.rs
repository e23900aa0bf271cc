use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use sos_service::Severity;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Server configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Bearer keys accepted from callers.
    pub api_keys: Vec<String>,
    pub apns: ApnsConfig,
    /// Upper bound on one multicast provider call.
    pub provider_timeout: Duration,
    /// Minimum severity written to the operator log.
    pub log_level: Severity,
}

#[derive(Clone)]
pub struct ApnsConfig {
    /// PKCS12 push certificate.
    pub cert_path: PathBuf,
    pub cert_password: String,
    /// APNs topic, usually the app bundle ID.
    pub topic: String,
    pub sandbox: bool,
}

impl ApnsConfig {
    pub fn endpoint(&self) -> a2::Endpoint {
        if self.sandbox {
            a2::Endpoint::Sandbox
        } else {
            a2::Endpoint::Production
        }
    }
}

impl Config {
    /// Load configuration from `SOS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let listen_addr = get("SOS_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "SOS_LISTEN_ADDR",
                reason: e.to_string(),
            })?;

        let api_keys: Vec<String> = get("SOS_API_KEYS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        if api_keys.is_empty() {
            return Err(ConfigError::Missing("SOS_API_KEYS"));
        }

        let apns = ApnsConfig {
            cert_path: get("SOS_APNS_CERT_PATH")
                .map(PathBuf::from)
                .ok_or(ConfigError::Missing("SOS_APNS_CERT_PATH"))?,
            // password may legitimately be empty, so read it raw
            cert_password: lookup("SOS_APNS_CERT_PASSWORD").unwrap_or_default(),
            topic: get("SOS_APNS_TOPIC").ok_or(ConfigError::Missing("SOS_APNS_TOPIC"))?,
            sandbox: match get("SOS_APNS_SANDBOX") {
                Some(v) => parse_bool("SOS_APNS_SANDBOX", &v)?,
                None => false,
            },
        };

        let timeout_secs = match get("SOS_PROVIDER_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "SOS_PROVIDER_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "SOS_PROVIDER_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let log_level = match get("SOS_LOG_LEVEL") {
            Some(v) => v.parse::<Severity>().map_err(|e: sos_service::ParseSeverityError| {
                ConfigError::Invalid {
                    key: "SOS_LOG_LEVEL",
                    reason: e.to_string(),
                }
            })?,
            None => Severity::Info,
        };

        Ok(Self {
            listen_addr,
            api_keys,
            apns,
            provider_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got {value:?}"),
        }),
    }
}
