//! # edgex-meta CLI entry point
//!
//! Parses command-line arguments, installs logging, builds one metadata
//! client and dispatches to subcommand handlers.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use edgex_cli::addressable::{run_addressable, AddressableArgs};
use edgex_cli::device::{run_device, DeviceArgs};
use edgex_cli::profile::{run_profile, ProfileArgs};
use edgex_cli::schedule::{run_schedule, ScheduleArgs};
use edgex_cli::service::{run_service, ServiceArgs};
use edgex_cli::{run_ping, ConnectionArgs};
use edgex_metadata_client::MetadataClient;

/// EdgeX metadata CLI
///
/// Queries and updates the EdgeX v1 core-metadata service. The service
/// location comes from EDGEX_METADATA_HOST / EDGEX_METADATA_PORT unless
/// --host / --port are given.
#[derive(Parser, Debug)]
#[command(name = "edgex-meta", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the metadata service is responding.
    Ping,

    /// Device lookup, deletion and state changes.
    Device(DeviceArgs),

    /// Device profile fetch, upload and local validation.
    Profile(ProfileArgs),

    /// Device service lookup.
    Service(ServiceArgs),

    /// Addressable lookup.
    Addressable(AddressableArgs),

    /// Schedules and schedule events.
    Schedule(ScheduleArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("edgex-meta v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> Result<u8> {
    let config = cli.connection.resolve()?;
    tracing::debug!(
        host = %config.endpoint.host,
        port = config.endpoint.port,
        "resolved metadata endpoint"
    );
    let client = MetadataClient::new(config).context("failed to build metadata client")?;

    match &cli.command {
        Commands::Ping => run_ping(&client).await,
        Commands::Device(args) => run_device(args, &client).await,
        Commands::Profile(args) => run_profile(args, &client).await,
        Commands::Service(args) => run_service(args, &client).await,
        Commands::Addressable(args) => run_addressable(args, &client).await,
        Commands::Schedule(args) => run_schedule(args, &client).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "edgex-meta", "device", "get", "pump-01", "--host", "meta", "--port", "48081", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.connection.host.as_deref(), Some("meta"));
        assert_eq!(cli.connection.port, Some(48081));
        assert!(matches!(cli.command, Commands::Device(_)));
    }

    #[test]
    fn ping_takes_no_arguments() {
        assert!(matches!(
            Cli::try_parse_from(["edgex-meta", "ping"]).unwrap().command,
            Commands::Ping
        ));
        assert!(Cli::try_parse_from(["edgex-meta", "ping", "extra"]).is_err());
    }

    #[test]
    fn schedule_events_takes_service() {
        let cli = Cli::try_parse_from(["edgex-meta", "schedule", "events", "device-virtual"]).unwrap();
        assert!(matches!(cli.command, Commands::Schedule(_)));
    }

    #[test]
    fn port_must_be_numeric() {
        assert!(Cli::try_parse_from(["edgex-meta", "--port", "eighty", "ping"]).is_err());
    }
}
