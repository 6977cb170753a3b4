//! Device operations against core-metadata.
//!
//! | Method | Path (under `/api/v1`) | Operation |
//! |--------|------------------------|-----------|
//! | GET    | `/device/servicename/{name}` | Devices owned by a service |
//! | GET    | `/device/{id}` | Get by id |
//! | GET    | `/device/name/{name}` | Get by name |
//! | POST   | `/device` | Create; response body is the new id |
//! | PUT    | `/device` | Sparse update |
//! | DELETE | `/device/id/{id}` | Delete by id |
//! | DELETE | `/device/name/{name}` | Delete by name |
//! | PUT    | `/device/{id}/opstate/{enabled\|disabled}` | Set operating state |
//! | PUT    | `/device/{id}/adminstate/{LOCKED\|UNLOCKED}` | Set admin state |

use edgex_core::{Addressable, AdminState, Device, DeviceProfile, DeviceService, OperatingState};
use serde::{Serialize, Serializer};

use crate::error::MetadataError;
use crate::routes;
use crate::transport::{Payload, Transport};

/// Fields supplied to create a device. Entity references are by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDevice {
    /// Unique device name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Free-form tags.
    pub labels: Vec<String>,
    /// Origin timestamp (ms since epoch).
    pub origin: u64,
    /// Addressable the device is reached through.
    pub addressable_name: String,
    /// Owning device service.
    pub service_name: String,
    /// Device profile describing the device's resources.
    pub profile_name: String,
}

impl NewDevice {
    /// The device as it is posted: admin state `UNLOCKED`, operating state
    /// `ENABLED`, referenced entities carrying only their names.
    pub fn to_device(&self) -> Device {
        Device {
            name: self.name.clone(),
            description: self.description.clone(),
            labels: self.labels.clone(),
            origin: self.origin,
            admin_state: AdminState::Unlocked,
            operating_state: OperatingState::Enabled,
            addressable: Addressable::named(&self.addressable_name),
            service: DeviceService::named(&self.service_name),
            profile: DeviceProfile::named(&self.profile_name),
            ..Device::default()
        }
    }
}

/// Sparse device update. Only fields that are `Some` are sent.
///
/// ```
/// use edgex_metadata_client::DeviceUpdate;
///
/// let update = DeviceUpdate::by_name("pump-01").profile("pump-v2");
/// let json = serde_json::to_value(&update).unwrap();
/// assert_eq!(json, serde_json::json!({"name": "pump-01", "profile": {"name": "pump-v2"}}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Sent as `"profile": {"name": ...}`.
    #[serde(
        rename = "profile",
        skip_serializing_if = "Option::is_none",
        serialize_with = "profile_ref"
    )]
    pub profile_name: Option<String>,
}

impl DeviceUpdate {
    /// Update addressed by device id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Update addressed by device name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Rename the device.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the labels.
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Point the device at another profile, by name.
    pub fn profile(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }
}

fn profile_ref<S: Serializer>(profile_name: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct NameRef<'a> {
        name: &'a str,
    }
    match profile_name {
        Some(name) => NameRef { name }.serialize(s),
        None => s.serialize_none(),
    }
}

/// Client for device endpoints.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    transport: Transport,
}

impl DeviceClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// All devices owned by the named device service.
    pub async fn list_for_service(&self, service_name: &str) -> Result<Vec<Device>, MetadataError> {
        self.transport
            .fetch(&routes::DEVICES_BY_SERVICE, &[("name", service_name)])
            .await
    }

    /// Get a device by id. 404 is an error.
    pub async fn get(&self, id: &str) -> Result<Device, MetadataError> {
        self.transport.fetch(&routes::DEVICE_BY_ID, &[("id", id)]).await
    }

    /// Get a device by name. 404 is an error.
    pub async fn get_by_name(&self, name: &str) -> Result<Device, MetadataError> {
        self.transport
            .fetch(&routes::DEVICE_BY_NAME, &[("name", name)])
            .await
    }

    /// Create a device and return it with the server-assigned id.
    pub async fn create(&self, req: &NewDevice) -> Result<Device, MetadataError> {
        let mut device = req.to_device();
        let id = self.transport.submit(&routes::DEVICE_CREATE, &device).await?;
        tracing::debug!(device = %device.name, %id, "device created");
        device.id = Some(id);
        Ok(device)
    }

    /// Send a sparse update.
    pub async fn update(&self, update: &DeviceUpdate) -> Result<(), MetadataError> {
        self.transport
            .submit(&routes::DEVICE_UPDATE, update)
            .await
            .map(drop)
    }

    /// Delete a device by id.
    pub async fn delete(&self, id: &str) -> Result<(), MetadataError> {
        self.transport
            .send(&routes::DEVICE_DELETE_BY_ID, &[("id", id)], Payload::Empty)
            .await
            .map(drop)
    }

    /// Delete a device by name.
    pub async fn delete_by_name(&self, name: &str) -> Result<(), MetadataError> {
        self.transport
            .send(&routes::DEVICE_DELETE_BY_NAME, &[("name", name)], Payload::Empty)
            .await
            .map(drop)
    }

    /// Set the operating state (`enabled`/`disabled` in the path).
    pub async fn set_operating_state(
        &self,
        id: &str,
        state: OperatingState,
    ) -> Result<(), MetadataError> {
        let params = [("id", id), ("state", state.as_path_segment())];
        self.transport
            .send(&routes::DEVICE_OPSTATE, &params, Payload::Empty)
            .await
            .map(drop)
    }

    /// Set the admin state (`LOCKED`/`UNLOCKED` in the path).
    pub async fn set_admin_state(&self, id: &str, state: AdminState) -> Result<(), MetadataError> {
        let params = [("id", id), ("state", state.as_str())];
        self.transport
            .send(&routes::DEVICE_ADMINSTATE, &params, Payload::Empty)
            .await
            .map(drop)
    }
}
