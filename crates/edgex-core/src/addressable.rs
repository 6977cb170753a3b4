//! Addressables: named connection endpoints referenced by devices, device
//! services and schedule events.

use serde::{Deserialize, Serialize};

use crate::is_zero;

/// A named network endpoint descriptor.
///
/// Only `name` is required on the wire; every other field defaults when the
/// server omits it and is skipped when empty, so a by-name reference encodes
/// as `{"name": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addressable {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique addressable name.
    #[serde(default)]
    pub name: String,
    /// Transport protocol, e.g. `HTTP`, `TCP`, `MQTT`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    /// HTTP method used when the protocol is HTTP.
    #[serde(default, rename = "method", skip_serializing_if = "String::is_empty")]
    pub http_method: String,
    /// Host name or IP address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Port number.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub port: u16,
    /// Request path.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Message-bus publisher name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub publisher: String,
    /// Credential user.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    /// Credential password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Message-bus topic.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub topic: String,
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

impl Addressable {
    /// A by-name reference with every other field empty.
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
    fn named_reference_encodes_name_only() {
        let json = serde_json::to_value(Addressable::named("modbus-tcp")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "modbus-tcp"}));
    }

    #[test]
    fn decodes_server_record() {
        let a: Addressable = serde_json::from_value(serde_json::json!({
            "id": "5b8f0b2f9f8fc20001a1e9d7",
            "name": "camera-endpoint",
            "protocol": "HTTP",
            "method": "POST",
            "address": "10.0.0.12",
            "port": 49990,
            "path": "/api/v1/callback",
            "created": 1536172847000u64,
            "unknownField": true
        }))
        .unwrap();
        assert_eq!(a.id.as_deref(), Some("5b8f0b2f9f8fc20001a1e9d7"));
        assert_eq!(a.http_method, "POST");
        assert_eq!(a.port, 49990);
        assert_eq!(a.created, 1536172847000);
        assert!(a.user.is_empty());
    }
}
