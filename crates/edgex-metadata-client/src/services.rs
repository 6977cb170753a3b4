//! Device service operations.

use edgex_core::DeviceService;

use crate::error::MetadataError;
use crate::routes;
use crate::transport::Transport;

/// Client for device service endpoints.
#[derive(Debug, Clone)]
pub struct DeviceServiceClient {
    transport: Transport,
}

impl DeviceServiceClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Get a device service by name; `Ok(None)` if the service answers 404.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<DeviceService>, MetadataError> {
        self.transport
            .fetch_optional(&routes::SERVICE_BY_NAME, &[("name", name)])
            .await
    }

    /// Register a device service; returns the new id.
    pub async fn create(&self, service: &DeviceService) -> Result<String, MetadataError> {
        self.transport.submit(&routes::SERVICE_CREATE, service).await
    }
}
