//! Device profiles: templates describing the readable/writable data points
//! of a class of device, including each point's scalar type and numeric
//! transform coefficients.
//!
//! Transform coefficients (`offset`, `scale`, `base`) stay strings here. Their
//! required lexical form depends on the resource's value type and is checked
//! by [`crate::validate`], not at decode time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::is_zero;

/// Value descriptor of a device resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    /// Value-type name, classified by [`crate::ResultType::classify`].
    #[serde(default, rename = "type")]
    pub value_type: String,
    /// Access mode: `R`, `W` or `RW`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub read_write: String,
    /// Lower bound.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub minimum: String,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maximum: String,
    /// Value reported when the device supplies none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    /// Size in bytes for binary/string values.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,
    /// Bit mask applied to raw readings.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mask: String,
    /// Bit shift applied to raw readings.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shift: String,
    /// Multiplicative transform coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    /// Additive transform coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    /// Exponent base transform coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Expected value; readings that differ disable the device.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assertion: String,
    /// Display precision.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub precision: String,
}

/// Engineering units of a device resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Units {
    /// Units descriptor type (normally `String`).
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub units_type: String,
    /// Access mode.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub read_write: String,
    /// Unit label, e.g. `degC`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
}

/// Value and units of a device resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    /// Value descriptor.
    #[serde(default)]
    pub value: PropertyValue,
    /// Units descriptor.
    #[serde(default)]
    pub units: Units,
}

/// A single readable/writable data point declared by a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceResource {
    /// Resource name, unique within the profile.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Optional tag.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Value and units.
    #[serde(default)]
    pub properties: ProfileProperty,
    /// Protocol-specific attributes, interpreted by the device driver.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl DeviceResource {
    /// Resource with the given name and value descriptor.
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            properties: ProfileProperty {
                value,
                units: Units::default(),
            },
            ..Self::default()
        }
    }
}

/// One step of a device command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOperation {
    /// Ordering index.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub index: String,
    /// `get` or `set`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation: String,
    /// Device resource operated on.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    /// Parameter value for `set`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parameter: String,
    /// Resource name alias.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    /// Secondary resources read alongside.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<String>,
    /// Value mappings applied to readings.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, String>,
}

/// A named device command composed of get/set resource operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResource {
    /// Command name.
    #[serde(default)]
    pub name: String,
    /// Operations performed on read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub get: Vec<ResourceOperation>,
    /// Operations performed on write.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set: Vec<ResourceOperation>,
}

/// A device profile as stored by the metadata service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique profile name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Unordered labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Device manufacturer.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,
    /// Device model.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    /// Declared data points, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_resources: Vec<DeviceResource>,
    /// Device commands.
    #[serde(
        default,
        rename = "resources",
        alias = "deviceCommands",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub device_commands: Vec<ProfileResource>,
    /// Core (REST-exposed) commands, kept opaque.
    #[serde(
        default,
        rename = "commands",
        alias = "coreCommands",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub core_commands: Vec<serde_json::Value>,
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

impl DeviceProfile {
    /// A by-name reference with no resources.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
