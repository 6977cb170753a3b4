//! # Device Subcommand
//!
//! - `get` — Fetch a device by name, or by id with `--id`.
//! - `list` — Devices owned by a device service.
//! - `delete` — Delete by name, or by id with `--id`.
//! - `admin` — Lock or unlock a device.
//! - `op` — Enable or disable a device.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use edgex_core::{AdminState, OperatingState};
use edgex_metadata_client::MetadataClient;

use crate::{call_failed, print_json};

/// Arguments for the `edgex-meta device` subcommand.
#[derive(Args, Debug)]
pub struct DeviceArgs {
    #[command(subcommand)]
    pub command: DeviceCommand,
}

/// Device subcommands.
#[derive(Subcommand, Debug)]
pub enum DeviceCommand {
    /// Fetch a device.
    Get(DeviceKey),

    /// List the devices owned by a device service.
    List {
        /// Device service name.
        #[arg(long)]
        service: String,
    },

    /// Delete a device.
    Delete(DeviceKey),

    /// Set the administrative state.
    Admin {
        /// Device id.
        id: String,
        #[arg(value_enum)]
        state: AdminStateArg,
    },

    /// Set the operating state.
    Op {
        /// Device id.
        id: String,
        #[arg(value_enum)]
        state: OperatingStateArg,
    },
}

/// A device addressed by name or by `--id`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DeviceKey {
    /// Device name.
    #[arg(required_unless_present = "id", conflicts_with = "id")]
    pub name: Option<String>,

    /// Device id.
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdminStateArg {
    Locked,
    Unlocked,
}

impl From<AdminStateArg> for AdminState {
    fn from(arg: AdminStateArg) -> Self {
        match arg {
            AdminStateArg::Locked => AdminState::Locked,
            AdminStateArg::Unlocked => AdminState::Unlocked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperatingStateArg {
    Enabled,
    Disabled,
}

impl From<OperatingStateArg> for OperatingState {
    fn from(arg: OperatingStateArg) -> Self {
        match arg {
            OperatingStateArg::Enabled => OperatingState::Enabled,
            OperatingStateArg::Disabled => OperatingState::Disabled,
        }
    }
}

/// Execute the device subcommand.
pub async fn run_device(args: &DeviceArgs, client: &MetadataClient) -> Result<u8> {
    let devices = client.devices();

    match &args.command {
        DeviceCommand::Get(key) => {
            let device = match (&key.id, &key.name) {
                (Some(id), _) => devices.get(id).await,
                (None, Some(name)) => devices.get_by_name(name).await,
                (None, None) => anyhow::bail!("a device name or --id is required"),
            }
            .map_err(call_failed)?;
            print_json(&device)
        }

        DeviceCommand::List { service } => {
            let list = devices.list_for_service(service).await.map_err(call_failed)?;
            tracing::info!(service = %service, count = list.len(), "devices listed");
            print_json(&list)
        }

        DeviceCommand::Delete(key) => {
            let label = match (&key.id, &key.name) {
                (Some(id), _) => {
                    devices.delete(id).await.map_err(call_failed)?;
                    format!("id {id}")
                }
                (None, Some(name)) => {
                    devices.delete_by_name(name).await.map_err(call_failed)?;
                    name.clone()
                }
                (None, None) => anyhow::bail!("a device name or --id is required"),
            };
            println!("OK: deleted device {label}");
            Ok(0)
        }

        DeviceCommand::Admin { id, state } => {
            let state = AdminState::from(*state);
            devices
                .set_admin_state(id, state)
                .await
                .map_err(call_failed)?;
            println!("OK: device {id} admin state {state}");
            Ok(0)
        }

        DeviceCommand::Op { id, state } => {
            let state = OperatingState::from(*state);
            devices
                .set_operating_state(id, state)
                .await
                .map_err(call_failed)?;
            println!("OK: device {id} operating state {state}");
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: DeviceCommand,
    }

    fn parse(args: &[&str]) -> Result<DeviceCommand, clap::Error> {
        let argv = std::iter::once("device").chain(args.iter().copied());
        TestCli::try_parse_from(argv).map(|cli| cli.command)
    }

    #[test]
    fn get_by_name() {
        match parse(&["get", "pump-01"]).unwrap() {
            DeviceCommand::Get(key) => {
                assert_eq!(key.name.as_deref(), Some("pump-01"));
                assert!(key.id.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn get_by_id() {
        match parse(&["get", "--id", "5c1a2b"]).unwrap() {
            DeviceCommand::Get(key) => assert_eq!(key.id.as_deref(), Some("5c1a2b")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn get_requires_name_or_id() {
        assert!(parse(&["get"]).is_err());
        assert!(parse(&["get", "pump-01", "--id", "5c1a2b"]).is_err());
    }

    #[test]
    fn list_requires_service() {
        assert!(parse(&["list"]).is_err());
        assert!(matches!(
            parse(&["list", "--service", "device-modbus"]).unwrap(),
            DeviceCommand::List { service } if service == "device-modbus"
        ));
    }

    #[test]
    fn admin_and_op_states() {
        assert!(matches!(
            parse(&["admin", "5c1a2b", "locked"]).unwrap(),
            DeviceCommand::Admin { state: AdminStateArg::Locked, .. }
        ));
        assert!(matches!(
            parse(&["op", "5c1a2b", "disabled"]).unwrap(),
            DeviceCommand::Op { state: OperatingStateArg::Disabled, .. }
        ));
        assert!(parse(&["op", "5c1a2b", "paused"]).is_err());
    }

    #[test]
    fn state_args_convert() {
        assert_eq!(AdminState::from(AdminStateArg::Unlocked), AdminState::Unlocked);
        assert_eq!(
            OperatingState::from(OperatingStateArg::Disabled).as_path_segment(),
            "disabled"
        );
    }
}
