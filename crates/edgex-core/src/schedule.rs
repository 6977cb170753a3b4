//! Schedules and schedule events.
//!
//! A schedule describes *when* (start, end, frequency or cron); a schedule
//! event binds a schedule to an addressable and device service and carries
//! the parameters to deliver on each firing.

use serde::{Deserialize, Serialize};

use crate::addressable::Addressable;
use crate::is_zero;

/// A named recurrence definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique schedule name.
    #[serde(default)]
    pub name: String,
    /// Start time, `yyyyMMdd'T'HHmmss`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start: String,
    /// End time, `yyyyMMdd'T'HHmmss`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end: String,
    /// ISO-8601 period, e.g. `PT15S`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub frequency: String,
    /// Cron expression, alternative to `frequency`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cron: String,
    /// Fire once then retire.
    #[serde(default)]
    pub run_once: bool,
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

/// An action fired by a schedule against an addressable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique event name.
    #[serde(default)]
    pub name: String,
    /// Name of the triggering schedule.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schedule: String,
    /// Target endpoint.
    #[serde(default)]
    pub addressable: Addressable,
    /// Free-form payload delivered on each firing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parameters: String,
    /// Name of the owning device service.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service: String,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_run_once_is_camel_case() {
        let s = Schedule {
            name: "every-15s".into(),
            frequency: "PT15S".into(),
            run_once: true,
            ..Schedule::default()
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "every-15s", "frequency": "PT15S", "runOnce": true})
        );
    }

    #[test]
    fn event_decodes_nested_addressable() {
        let e: ScheduleEvent = serde_json::from_value(serde_json::json!({
            "id": "ev-1",
            "name": "read-temp",
            "schedule": "every-15s",
            "addressable": {"name": "temp-addr", "path": "/api/v1/device/all/Temperature"},
            "parameters": "{}",
            "service": "device-virtual"
        }))
        .unwrap();
        assert_eq!(e.schedule, "every-15s");
        assert_eq!(e.addressable.path, "/api/v1/device/all/Temperature");
        assert_eq!(e.service, "device-virtual");
    }
}
