//! Devices and their administrative / operating states.

use serde::{Deserialize, Serialize};

use crate::addressable::Addressable;
use crate::device_service::DeviceService;
use crate::is_zero;
use crate::profile::DeviceProfile;

/// Administrative state: whether the device may be commanded at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminState {
    /// Commands are refused.
    Locked,
    /// Commands are accepted.
    #[default]
    Unlocked,
}

impl AdminState {
    /// Path segment used by the `adminstate` endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "LOCKED",
            Self::Unlocked => "UNLOCKED",
        }
    }
}

impl std::fmt::Display for AdminState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating state: whether the device is currently usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingState {
    /// Device is in service.
    #[default]
    Enabled,
    /// Device is out of service.
    Disabled,
}

impl OperatingState {
    /// Path segment used by the `opstate` endpoint (lowercase on the wire).
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for OperatingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        })
    }
}

/// A device registered with the metadata service.
///
/// At creation the addressable, service and profile are references carrying
/// only a name; the server resolves them and returns full records on reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique device name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Unordered labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Administrative state.
    #[serde(default)]
    pub admin_state: AdminState,
    /// Operating state.
    #[serde(default)]
    pub operating_state: OperatingState,
    /// Connection endpoint.
    #[serde(default)]
    pub addressable: Addressable,
    /// Owning device service.
    #[serde(default)]
    pub service: DeviceService,
    /// Device profile.
    #[serde(default)]
    pub profile: DeviceProfile,
    /// Last connection timestamp (ms since epoch).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_connected: u64,
    /// Last reading timestamp (ms since epoch).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_reported: u64,
    /// Origin timestamp (ms since epoch).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub origin: u64,
    /// Creation timestamp (ms since epoch).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: u64,
    /// Last-modified timestamp (ms since epoch).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: u64,
    /// Opaque location payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
}
