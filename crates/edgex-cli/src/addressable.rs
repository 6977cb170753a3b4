//! `edgex-meta addressable get <name>`.

use anyhow::Result;
use clap::{Args, Subcommand};

use edgex_metadata_client::MetadataClient;

use crate::{call_failed, print_found};

#[derive(Args, Debug)]
pub struct AddressableArgs {
    #[command(subcommand)]
    pub command: AddressableCommand,
}

#[derive(Subcommand, Debug)]
pub enum AddressableCommand {
    /// Fetch an addressable by name. Exits 2 if none exists.
    Get {
        /// Addressable name.
        name: String,
    },
}

/// Execute the addressable subcommand.
pub async fn run_addressable(args: &AddressableArgs, client: &MetadataClient) -> Result<u8> {
    match &args.command {
        AddressableCommand::Get { name } => {
            let addressable = client
                .addressables()
                .get_by_name(name)
                .await
                .map_err(call_failed)?;
            print_found("addressable", name, addressable)
        }
    }
}
