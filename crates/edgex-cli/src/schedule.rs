//! # Schedule Subcommand
//!
//! - `get` — Fetch a schedule by name.
//! - `events` — Schedule events owned by a device service.

use anyhow::Result;
use clap::{Args, Subcommand};

use edgex_metadata_client::MetadataClient;

use crate::{call_failed, print_json};

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// Fetch a schedule by name.
    Get {
        /// Schedule name.
        name: String,
    },

    /// List the schedule events of a device service.
    Events {
        /// Device service name.
        service: String,
    },
}

/// Execute the schedule subcommand.
pub async fn run_schedule(args: &ScheduleArgs, client: &MetadataClient) -> Result<u8> {
    let schedules = client.schedules();

    match &args.command {
        ScheduleCommand::Get { name } => {
            let schedule = schedules.get_by_name(name).await.map_err(call_failed)?;
            print_json(&schedule)
        }
        ScheduleCommand::Events { service } => {
            let events = schedules
                .events_for_service(service)
                .await
                .map_err(call_failed)?;
            print_json(&events)
        }
    }
}
