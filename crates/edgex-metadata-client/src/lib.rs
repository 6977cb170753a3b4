//! # edgex-metadata-client — Typed async client for EdgeX core-metadata
//!
//! Wraps the v1 REST API of the EdgeX metadata service (default port
//! 48081) for device services that need to register and look up their
//! devices, profiles, addressables and schedules:
//!
//! - **Devices** via [`DeviceClient`]
//! - **Device profiles** via [`DeviceProfileClient`] (validated on fetch)
//! - **Device services** via [`DeviceServiceClient`]
//! - **Addressables** via [`AddressableClient`]
//! - **Schedules and schedule events** via [`ScheduleClient`]
//!
//! ## Error Convention
//!
//! Every operation returns `Result<T, MetadataError>`. The flat
//! `(code, reason)` pair shared with other EdgeX services is available via
//! [`MetadataError::signal`]: non-2xx responses report the HTTP status and
//! the response body, transport failures report code 10.
//!
//! ## Example
//!
//! ```no_run
//! use edgex_metadata_client::{MetadataClient, MetadataConfig};
//!
//! # async fn run() -> Result<(), edgex_metadata_client::MetadataError> {
//! let client = MetadataClient::new(MetadataConfig::from_env()?)?;
//! if client.ping().await {
//!     let profile = client.profiles().get_by_name("Modbus Meter").await?;
//!     println!("{} resources", profile.device_resources.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod addressables;
pub mod config;
pub mod devices;
pub mod error;
pub mod profiles;
pub(crate) mod routes;
pub mod schedules;
pub mod services;
pub(crate) mod transport;

pub use addressables::AddressableClient;
pub use config::{ConfigError, MetadataConfig, ServiceEndpoint};
pub use devices::{DeviceClient, DeviceUpdate, NewDevice};
pub use error::{signal_of, ErrorKind, ErrorSignal, MetadataError};
pub use profiles::DeviceProfileClient;
pub use schedules::{NewSchedule, NewScheduleEvent, ScheduleClient};
pub use services::DeviceServiceClient;

use std::time::Duration;

use transport::{Payload, Transport};

/// Top-level metadata client. Holds one sub-client per entity family, all
/// sharing a single connection pool.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    transport: Transport,
    devices: DeviceClient,
    profiles: DeviceProfileClient,
    services: DeviceServiceClient,
    addressables: AddressableClient,
    schedules: ScheduleClient,
}

impl MetadataClient {
    /// Create a client from configuration. No request is made.
    pub fn new(config: MetadataConfig) -> Result<Self, MetadataError> {
        let base_url = config.endpoint.base_url()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MetadataError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        let transport = Transport::new(http, base_url);

        Ok(Self {
            devices: DeviceClient::new(transport.clone()),
            profiles: DeviceProfileClient::new(transport.clone()),
            services: DeviceServiceClient::new(transport.clone()),
            addressables: AddressableClient::new(transport.clone()),
            schedules: ScheduleClient::new(transport.clone()),
            transport,
        })
    }

    /// Device endpoints.
    pub fn devices(&self) -> &DeviceClient {
        &self.devices
    }

    /// Device profile endpoints.
    pub fn profiles(&self) -> &DeviceProfileClient {
        &self.profiles
    }

    /// Device service endpoints.
    pub fn services(&self) -> &DeviceServiceClient {
        &self.services
    }

    /// Addressable endpoints.
    pub fn addressables(&self) -> &AddressableClient {
        &self.addressables
    }

    /// Schedule and schedule event endpoints.
    pub fn schedules(&self) -> &ScheduleClient {
        &self.schedules
    }

    /// `GET /api/v1/ping`, reporting why the service is unreachable.
    pub async fn check_liveness(&self) -> Result<(), MetadataError> {
        self.transport
            .send(&routes::PING, &[], Payload::Empty)
            .await
            .map(drop)
    }

    /// `true` exactly when [`check_liveness`](Self::check_liveness) yields
    /// signal code 0.
    pub async fn ping(&self) -> bool {
        let signal = signal_of(&self.check_liveness().await);
        if !signal.is_ok() {
            tracing::warn!(code = signal.code, reason = %signal.reason, "metadata service not responding");
        }
        signal.is_ok()
    }
}
