//! Bridge connection settings

use std::time::Duration;
use url::Url;

use crate::bridge::BridgeError;

/// Default port the host listens on
pub const DEFAULT_BRIDGE_PORT: u16 = 19455;

pub const ENV_BRIDGE_URL: &str = "FS_BRIDGE_URL";
pub const ENV_BRIDGE_TIMEOUT_SECS: &str = "FS_BRIDGE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    url: String,
    /// How long a single call may wait for its reply. `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            url: format!("ws://127.0.0.1:{}", DEFAULT_BRIDGE_PORT),
            request_timeout: None,
        }
    }
}

impl BridgeConfig {
    /// Validates `url`; only `ws` and `wss` are accepted.
    pub fn new(url: &str) -> Result<Self, BridgeError> {
        let parsed = Url::parse(url).map_err(|e| BridgeError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "ws" | "wss" => Ok(Self {
                url: url.to_string(),
                request_timeout: None,
            }),
            other => Err(BridgeError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }

    /// Local host on `port`.
    pub fn local(port: u16) -> Self {
        Self {
            url: format!("ws://127.0.0.1:{}", port),
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reads `FS_BRIDGE_URL` and `FS_BRIDGE_TIMEOUT_SECS`, falling back to
    /// defaults for whichever is unset.
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_BRIDGE_URL) {
            Some(url) => Self::new(url.trim())?,
            None => Self::default(),
        };

        if let Some(raw) = lookup(ENV_BRIDGE_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                BridgeError::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_BRIDGE_TIMEOUT_SECS, raw
                ))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_points_at_local_host() {
        let config = BridgeConfig::default();
        assert_eq!(config.url(), "ws://127.0.0.1:19455");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config, BridgeConfig::local(DEFAULT_BRIDGE_PORT));
    }

    #[test]
    fn test_new_accepts_ws_and_wss() {
        assert!(BridgeConfig::new("ws://localhost:9000").is_ok());
        assert!(BridgeConfig::new("wss://host.example/bridge").is_ok());
    }

    #[test]
    fn test_new_rejects_other_schemes() {
        let err = BridgeConfig::new("http://localhost:9000").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidUrl { .. }));
        assert!(err.to_string().contains("unsupported scheme 'http'"));
    }

    #[test]
    fn test_new_rejects_garbage() {
        let err = BridgeConfig::new("not a url").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = BridgeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_url_and_timeout() {
        let config = BridgeConfig::from_lookup(lookup(&[
            (ENV_BRIDGE_URL, "ws://10.0.0.2:7000"),
            (ENV_BRIDGE_TIMEOUT_SECS, " 15 "),
        ]))
        .unwrap();
        assert_eq!(config.url(), "ws://10.0.0.2:7000");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err =
            BridgeConfig::from_lookup(lookup(&[(ENV_BRIDGE_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidConfig(_)));
    }

    #[test]
    fn test_with_request_timeout() {
        let config = BridgeConfig::local(1234).with_request_timeout(Duration::from_millis(250));
        assert_eq!(config.url(), "ws://127.0.0.1:1234");
        assert_eq!(config.request_timeout, Some(Duration::from_millis(250)));
    }
}
