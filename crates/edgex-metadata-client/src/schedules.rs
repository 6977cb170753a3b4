//! Schedule and schedule event operations.

use edgex_core::{Addressable, Schedule, ScheduleEvent};

use crate::error::MetadataError;
use crate::routes;
use crate::transport::Transport;

/// Fields supplied to create a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSchedule {
    /// Unique schedule name.
    pub name: String,
    /// Origin timestamp (ms since epoch).
    pub origin: u64,
    /// Start time, formatted like `20000101T000000`.
    pub start: String,
    /// End time, same format as `start`.
    pub end: String,
    /// ISO 8601 period such as `PT15S`.
    pub frequency: String,
    /// Cron expression, an alternative to `frequency`.
    pub cron: String,
    /// Fire once at `start`, then stop.
    pub run_once: bool,
}

impl NewSchedule {
    /// The schedule as it is posted.
    pub fn to_schedule(&self) -> Schedule {
        Schedule {
            name: self.name.clone(),
            origin: self.origin,
            start: self.start.clone(),
            end: self.end.clone(),
            frequency: self.frequency.clone(),
            cron: self.cron.clone(),
            run_once: self.run_once,
            ..Schedule::default()
        }
    }
}

/// Fields supplied to create a schedule event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewScheduleEvent {
    /// Unique event name.
    pub name: String,
    /// Origin timestamp (ms since epoch).
    pub origin: u64,
    /// Name of the addressable the event targets.
    pub addressable_name: String,
    /// Body sent to the addressable when the event fires.
    pub parameters: String,
    /// Name of the triggering schedule.
    pub schedule_name: String,
    /// Name of the owning device service.
    pub service_name: String,
}

impl NewScheduleEvent {
    /// The event as it is posted, referencing the addressable by name.
    pub fn to_event(&self) -> ScheduleEvent {
        ScheduleEvent {
            name: self.name.clone(),
            origin: self.origin,
            addressable: Addressable::named(&self.addressable_name),
            parameters: self.parameters.clone(),
            schedule: self.schedule_name.clone(),
            service: self.service_name.clone(),
            ..ScheduleEvent::default()
        }
    }
}

/// Client for schedule and schedule event endpoints.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    transport: Transport,
}

impl ScheduleClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Get a schedule by name. 404 is an error.
    pub async fn get_by_name(&self, name: &str) -> Result<Schedule, MetadataError> {
        self.transport
            .fetch(&routes::SCHEDULE_BY_NAME, &[("name", name)])
            .await
    }

    /// Create a schedule and return it with the server-assigned id.
    pub async fn create(&self, req: &NewSchedule) -> Result<Schedule, MetadataError> {
        let mut schedule = req.to_schedule();
        let id = self.transport.submit(&routes::SCHEDULE_CREATE, &schedule).await?;
        schedule.id = Some(id);
        Ok(schedule)
    }

    /// All schedule events owned by the named device service.
    pub async fn events_for_service(
        &self,
        service_name: &str,
    ) -> Result<Vec<ScheduleEvent>, MetadataError> {
        self.transport
            .fetch(&routes::SCHEDULE_EVENTS_BY_SERVICE, &[("name", service_name)])
            .await
    }

    /// Create a schedule event and return it with the server-assigned id.
    pub async fn create_event(
        &self,
        req: &NewScheduleEvent,
    ) -> Result<ScheduleEvent, MetadataError> {
        let mut event = req.to_event();
        let id = self
            .transport
            .submit(&routes::SCHEDULE_EVENT_CREATE, &event)
            .await?;
        event.id = Some(id);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_references_addressable_by_name() {
        let req = NewScheduleEvent {
            name: "read-temp".into(),
            addressable_name: "temp-addr".into(),
            schedule_name: "every-15s".into(),
            service_name: "device-virtual".into(),
            ..NewScheduleEvent::default()
        };
        let json = serde_json::to_value(req.to_event()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "read-temp",
                "schedule": "every-15s",
                "addressable": {"name": "temp-addr"},
                "service": "device-virtual"
            })
        );
    }
}
