//! # edgex-cli — Operator CLI for EdgeX core-metadata
//!
//! Provides the `edgex-meta` command-line interface over
//! [`edgex_metadata_client`].
//!
//! ## Subcommands
//!
//! - `edgex-meta ping` — Liveness of the metadata service.
//! - `edgex-meta device` — Lookup, listing, deletion and state changes.
//! - `edgex-meta profile` — Fetch (validated), upload, and offline check.
//! - `edgex-meta service` / `addressable` — Lookup by name.
//! - `edgex-meta schedule` — Schedule lookup and events per service.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Call failed; the error signal code and reason are logged |
//! | 2 | Lookup succeeded but found nothing |
//!
//! ```bash
//! edgex-meta --host edgex-core-metadata ping
//! edgex-meta device get --id 5c1a2b
//! edgex-meta profile get "Modbus Meter"
//! ```

pub mod addressable;
pub mod device;
pub mod profile;
pub mod schedule;
pub mod service;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use edgex_metadata_client::{MetadataClient, MetadataConfig, MetadataError};

/// Exit code for a lookup that found nothing.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Connection flags. Each overrides the matching `EDGEX_METADATA_*`
/// environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Metadata service host.
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Metadata service port.
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    /// Environment configuration with command-line overrides applied.
    pub fn resolve(&self) -> Result<MetadataConfig> {
        MetadataConfig::from_env_overriding(self.host.clone(), self.port, self.timeout)
            .context("invalid metadata connection settings")
    }
}

/// Wrap a failed call with its error signal for the operator.
pub fn call_failed(e: MetadataError) -> anyhow::Error {
    let signal = e.signal();
    let context = format!("metadata call failed (code {}): {}", signal.code, signal.reason);
    anyhow::Error::new(e).context(context)
}

/// Print `value` as pretty JSON and return exit code 0.
pub fn print_json<T: Serialize>(value: &T) -> Result<u8> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(0)
}

/// Print an optional lookup result; [`EXIT_NOT_FOUND`] when absent.
pub fn print_found<T: Serialize>(what: &str, name: &str, value: Option<T>) -> Result<u8> {
    match value {
        Some(v) => print_json(&v),
        None => {
            println!("NOT FOUND: {what} {name}");
            Ok(EXIT_NOT_FOUND)
        }
    }
}

/// Execute `edgex-meta ping`.
pub async fn run_ping(client: &MetadataClient) -> Result<u8> {
    client.check_liveness().await.map_err(call_failed)?;
    println!("OK: metadata service is up");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment_defaults() {
        let args = ConnectionArgs {
            host: Some("edgex-core-metadata".into()),
            port: Some(59881),
            timeout: Some(3),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.endpoint.host, "edgex-core-metadata");
        assert_eq!(config.endpoint.port, 59881);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn flags_shadow_malformed_environment() {
        std::env::set_var("EDGEX_METADATA_HOST", "bad host");
        std::env::set_var("EDGEX_METADATA_PORT", "eighty");
        let args = ConnectionArgs {
            host: Some("edgex-core-metadata".into()),
            port: Some(48081),
            timeout: None,
        };
        let result = args.resolve();
        std::env::remove_var("EDGEX_METADATA_HOST");
        std::env::remove_var("EDGEX_METADATA_PORT");

        let config = result.unwrap();
        assert_eq!(config.endpoint.host, "edgex-core-metadata");
        assert_eq!(config.endpoint.port, 48081);
    }

    #[test]
    fn bad_host_flag_is_rejected() {
        let args = ConnectionArgs {
            host: Some("not a host".into()),
            ..ConnectionArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn call_failed_carries_signal() {
        let err = call_failed(MetadataError::Status {
            endpoint: "GET /device/name/{name}".into(),
            status: 404,
            body: "Device not found".into(),
        });
        let msg = format!("{err:#}");
        assert!(msg.contains("code 404"));
        assert!(msg.contains("Device not found"));
    }

    #[test]
    fn print_found_absent_is_not_found_code() {
        let code = print_found::<u8>("addressable", "nowhere", None).unwrap();
        assert_eq!(code, EXIT_NOT_FOUND);
    }
}
