//! Device services: logical groupings that own devices.

use serde::{Deserialize, Serialize};

use crate::addressable::Addressable;
use crate::device::{AdminState, OperatingState};
use crate::is_zero;

/// A device service registered with the metadata service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceService {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique service name.
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
    /// Callback endpoint of the service itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addressable: Option<Addressable>,
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
}

impl DeviceService {
    /// A by-name reference with default states.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_with_addressable() {
        let s: DeviceService = serde_json::from_value(serde_json::json!({
            "id": "svc-1",
            "name": "device-modbus",
            "adminState": "UNLOCKED",
            "operatingState": "DISABLED",
            "addressable": {"name": "device-modbus", "address": "edgex-device-modbus", "port": 49991},
            "labels": ["modbus"]
        }))
        .unwrap();
        assert_eq!(s.operating_state, OperatingState::Disabled);
        let addr = s.addressable.unwrap();
        assert_eq!(addr.port, 49991);
        assert_eq!(addr.address, "edgex-device-modbus");
    }

    #[test]
    fn encodes_without_absent_fields() {
        let json = serde_json::to_value(DeviceService::named("device-virtual")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "device-virtual",
                "adminState": "UNLOCKED",
                "operatingState": "ENABLED"
            })
        );
    }
}
