//! Metadata client configuration.
//!
//! Locates the metadata service by host and port. Defaults point to a local
//! EdgeX deployment (`localhost:48081`). Override via environment variables
//! or explicit construction for other deployments and tests.

use url::Url;

/// Host and port of one EdgeX service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl ServiceEndpoint {
    /// Create an endpoint from host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://{host}:{port}/` as a parsed URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = format!("http://{}:{}", self.host, self.port);
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw, e.to_string()))
    }
}

/// Configuration for connecting to the metadata service.
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    /// Where the metadata service listens.
    pub endpoint: ServiceEndpoint,
    /// Request timeout in seconds, enforced by the HTTP transport.
    pub timeout_secs: u64,
}

/// Default metadata port of an EdgeX v1 deployment.
pub const DEFAULT_METADATA_PORT: u16 = 48081;

impl MetadataConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `EDGEX_METADATA_HOST` (default: `localhost`)
    /// - `EDGEX_METADATA_PORT` (default: `48081`)
    /// - `EDGEX_METADATA_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_overriding(None, None, None)
    }

    /// Like [`from_env`](Self::from_env), but a `Some` value replaces its
    /// variable, which is then not read at all. A malformed variable only
    /// fails when nothing overrides it.
    pub fn from_env_overriding(
        host: Option<String>,
        port: Option<u16>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let host = match host {
            Some(host) => host,
            None => std::env::var("EDGEX_METADATA_HOST").unwrap_or_else(|_| "localhost".into()),
        };
        let port = match port {
            Some(port) => port,
            None => env_parse("EDGEX_METADATA_PORT", DEFAULT_METADATA_PORT)?,
        };
        let timeout_secs = match timeout_secs {
            Some(secs) => secs,
            None => env_parse("EDGEX_METADATA_TIMEOUT_SECS", 30)?,
        };

        let config = Self {
            endpoint: ServiceEndpoint::new(host, port),
            timeout_secs,
        };
        config.endpoint.base_url()?;
        Ok(config)
    }

    /// Create a configuration pointing at a loopback port (for testing).
    pub fn local(port: u16) -> Self {
        Self {
            endpoint: ServiceEndpoint::new("127.0.0.1", port),
            timeout_secs: 5,
        }
    }
}

fn env_parse<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(var.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(String, String),
    #[error("invalid URL {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_builds_loopback_config() {
        let cfg = MetadataConfig::local(9000);
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.endpoint.base_url().unwrap().as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn base_url_rejects_bad_host() {
        let endpoint = ServiceEndpoint::new("bad host", 80);
        assert!(matches!(endpoint.base_url(), Err(ConfigError::InvalidUrl(..))));
    }

    #[test]
    fn env_parse_uses_default_when_var_absent() {
        let port: u16 = env_parse("NONEXISTENT_VAR_EDGEX_12345", 48081).unwrap();
        assert_eq!(port, 48081);
    }

    #[test]
    fn env_parse_rejects_non_numeric_port() {
        std::env::set_var("TEST_BAD_PORT_EDGEX", "eighty");
        let result: Result<u16, _> = env_parse("TEST_BAD_PORT_EDGEX", 48081);
        std::env::remove_var("TEST_BAD_PORT_EDGEX");
        assert!(matches!(result, Err(ConfigError::InvalidValue(var, _)) if var == "TEST_BAD_PORT_EDGEX"));
    }

    #[test]
    fn overrides_shadow_malformed_environment() {
        std::env::set_var("EDGEX_METADATA_HOST", "bad host");
        std::env::set_var("EDGEX_METADATA_PORT", "eighty");
        let overridden = MetadataConfig::from_env_overriding(Some("meta".into()), Some(48081), Some(7));
        let plain = MetadataConfig::from_env();
        std::env::remove_var("EDGEX_METADATA_HOST");
        std::env::remove_var("EDGEX_METADATA_PORT");

        let cfg = overridden.unwrap();
        assert_eq!(cfg.endpoint, ServiceEndpoint::new("meta", 48081));
        assert_eq!(cfg.timeout_secs, 7);
        assert!(matches!(plain, Err(ConfigError::InvalidValue(var, _)) if var == "EDGEX_METADATA_PORT"));
    }
}
