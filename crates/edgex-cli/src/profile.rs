//! # Profile Subcommand
//!
//! - `get` — Fetch a profile by name; the client validates it before printing.
//! - `upload` — Upload a profile definition file.
//! - `check` — Validate a profile JSON file locally, without contacting
//!   the metadata service.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use edgex_core::{check_profile, DeviceProfile};
use edgex_metadata_client::MetadataClient;

use crate::{call_failed, print_json};

/// Arguments for the `edgex-meta profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Fetch and validate a profile by name.
    Get {
        /// Profile name (escaped on the wire).
        name: String,
    },

    /// Upload a profile definition file.
    Upload {
        /// Path to the profile file.
        file: PathBuf,
    },

    /// Validate a profile JSON file without contacting the service.
    Check {
        /// Path to a JSON-encoded device profile.
        file: PathBuf,
    },
}

/// Execute the profile subcommand.
pub async fn run_profile(args: &ProfileArgs, client: &MetadataClient) -> Result<u8> {
    match &args.command {
        ProfileCommand::Get { name } => {
            let profile = client.profiles().get_by_name(name).await.map_err(call_failed)?;
            print_json(&profile)
        }

        ProfileCommand::Upload { file } => {
            let id = client.profiles().upload_file(file).await.map_err(call_failed)?;
            println!("OK: uploaded {} as profile {id}", file.display());
            Ok(0)
        }

        ProfileCommand::Check { file } => cmd_check(file),
    }
}

/// Validate a local profile file.
pub fn cmd_check(file: &Path) -> Result<u8> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let profile: DeviceProfile = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a device profile", file.display()))?;

    check_profile(&profile)
        .with_context(|| format!("profile {:?} is invalid", profile.name))?;

    println!(
        "OK: profile {:?} ({} resources) is valid",
        profile.name,
        profile.device_resources.len()
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_profile(json: serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn check_accepts_valid_profile() {
        let file = write_profile(serde_json::json!({
            "name": "thermostat",
            "deviceResources": [{
                "name": "Temperature",
                "properties": {"value": {"type": "Int16", "scale": "0.1", "base": "0x10"}}
            }]
        }));
        assert_eq!(cmd_check(file.path()).unwrap(), 0);
    }

    #[test]
    fn check_rejects_bad_transform() {
        let file = write_profile(serde_json::json!({
            "name": "thermostat",
            "deviceResources": [{
                "name": "Temperature",
                "properties": {"value": {"type": "Int16", "base": "ten"}}
            }]
        }));
        let err = cmd_check(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Temperature"));
    }

    #[test]
    fn check_reports_unreadable_file() {
        let err = cmd_check(Path::new("/nonexistent/edgex/profile.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
