//! Device profile operations.
//!
//! Profiles fetched by name are validated before they are returned; a
//! profile the validator rejects never reaches the caller.

use std::path::Path;

use edgex_core::DeviceProfile;

use crate::error::MetadataError;
use crate::routes;
use crate::transport::{Payload, Transport};

/// Client for device profile endpoints.
#[derive(Debug, Clone)]
pub struct DeviceProfileClient {
    transport: Transport,
}

impl DeviceProfileClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a profile by name and validate its device resources.
    ///
    /// Calls `GET /api/v1/deviceprofile/name/{name}` with the name
    /// percent-escaped. Returns [`MetadataError::ProfileParse`] if any
    /// resource has an unknown value type or a malformed transform.
    pub async fn get_by_name(&self, name: &str) -> Result<DeviceProfile, MetadataError> {
        let profile: DeviceProfile = self
            .transport
            .fetch(&routes::PROFILE_BY_NAME, &[("name", name)])
            .await?;
        edgex_core::check_profile(&profile).map_err(|source| {
            tracing::error!(profile = name, "error while parsing device profile");
            MetadataError::ProfileParse {
                name: name.to_string(),
                source,
            }
        })?;
        Ok(profile)
    }

    /// Create a profile from a value; returns the new id.
    pub async fn create(&self, profile: &DeviceProfile) -> Result<String, MetadataError> {
        self.transport.submit(&routes::PROFILE_CREATE, profile).await
    }

    /// Upload a profile definition file as multipart part `file`; returns
    /// the new id. Nothing is sent if the file cannot be read.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<String, MetadataError> {
        let path = path.as_ref();
        self.transport
            .send(&routes::PROFILE_UPLOAD_FILE, &[], Payload::File(path))
            .await
            .map_err(|e| {
                tracing::info!(path = %path.display(), reason = %e.signal().reason, "profile upload failed");
                e
            })
    }
}
