//! Addressable operations.

use edgex_core::Addressable;

use crate::error::MetadataError;
use crate::routes;
use crate::transport::{Payload, Transport};

/// Client for addressable endpoints.
#[derive(Debug, Clone)]
pub struct AddressableClient {
    transport: Transport,
}

impl AddressableClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Get an addressable by name; `Ok(None)` if the service answers 404.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Addressable>, MetadataError> {
        self.transport
            .fetch_optional(&routes::ADDRESSABLE_BY_NAME, &[("name", name)])
            .await
    }

    /// Create an addressable; returns the new id.
    pub async fn create(&self, addressable: &Addressable) -> Result<String, MetadataError> {
        self.transport
            .submit(&routes::ADDRESSABLE_CREATE, addressable)
            .await
    }

    /// Replace an addressable, matched by name. The id is not sent.
    pub async fn update(&self, addressable: &Addressable) -> Result<(), MetadataError> {
        let body = Addressable {
            id: None,
            ..addressable.clone()
        };
        self.transport
            .submit(&routes::ADDRESSABLE_UPDATE, &body)
            .await
            .map(drop)
    }

    /// Delete an addressable by name.
    pub async fn delete_by_name(&self, name: &str) -> Result<(), MetadataError> {
        self.transport
            .send(&routes::ADDRESSABLE_DELETE_BY_NAME, &[("name", name)], Payload::Empty)
            .await
            .map(drop)
    }
}
