//! `edgex-meta service get <name>`.

use anyhow::Result;
use clap::{Args, Subcommand};

use edgex_metadata_client::MetadataClient;

use crate::{call_failed, print_found};

#[derive(Args, Debug)]
pub struct ServiceArgs {
    #[command(subcommand)]
    pub command: ServiceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommand {
    /// Fetch a device service by name. Exits 2 if none exists.
    Get {
        /// Device service name.
        name: String,
    },
}

/// Execute the service subcommand.
pub async fn run_service(args: &ServiceArgs, client: &MetadataClient) -> Result<u8> {
    match &args.command {
        ServiceCommand::Get { name } => {
            let service = client.services().get_by_name(name).await.map_err(call_failed)?;
            print_found("device service", name, service)
        }
    }
}
