//! # Route Table
//!
//! Every metadata endpoint the client calls, with its verb, path template
//! and two per-endpoint policies the service contract is not consistent
//! about:
//!
//! - **404 handling.** Addressable and device-service lookups by name treat
//!   404 as "no such record" (`Ok(None)`); every other endpoint treats 404
//!   as an error.
//! - **Key escaping.** Only the profile-by-name lookup percent-escapes its
//!   key; other keys are substituted verbatim.
//!
//! | Route | Method | Path (under `/api/v1`) | 404 | Key |
//! |-------|--------|------------------------|-----|-----|
//! | [`PROFILE_BY_NAME`] | GET | `deviceprofile/name/{name}` | error | escaped |
//! | [`PROFILE_CREATE`] | POST | `deviceprofile` | error | – |
//! | [`PROFILE_UPLOAD_FILE`] | POST | `deviceprofile/uploadfile` | error | – |
//! | [`SERVICE_BY_NAME`] | GET | `deviceservice/name/{name}` | empty | raw |
//! | [`SERVICE_CREATE`] | POST | `deviceservice` | error | – |
//! | [`DEVICES_BY_SERVICE`] | GET | `device/servicename/{name}` | error | raw |
//! | [`DEVICE_BY_ID`] | GET | `device/{id}` | error | raw |
//! | [`DEVICE_BY_NAME`] | GET | `device/name/{name}` | error | raw |
//! | [`DEVICE_CREATE`] | POST | `device` | error | – |
//! | [`DEVICE_UPDATE`] | PUT | `device` | error | – |
//! | [`DEVICE_DELETE_BY_ID`] | DELETE | `device/id/{id}` | error | raw |
//! | [`DEVICE_DELETE_BY_NAME`] | DELETE | `device/name/{name}` | error | raw |
//! | [`DEVICE_OPSTATE`] | PUT | `device/{id}/opstate/{state}` | error | raw |
//! | [`DEVICE_ADMINSTATE`] | PUT | `device/{id}/adminstate/{state}` | error | raw |
//! | [`ADDRESSABLE_BY_NAME`] | GET | `addressable/name/{name}` | empty | raw |
//! | [`ADDRESSABLE_CREATE`] | POST | `addressable` | error | – |
//! | [`ADDRESSABLE_UPDATE`] | PUT | `addressable` | error | – |
//! | [`ADDRESSABLE_DELETE_BY_NAME`] | DELETE | `addressable/name/{name}` | error | raw |
//! | [`SCHEDULE_BY_NAME`] | GET | `schedule/name/{name}` | error | raw |
//! | [`SCHEDULE_CREATE`] | POST | `schedule` | error | – |
//! | [`SCHEDULE_EVENTS_BY_SERVICE`] | GET | `scheduleevent/servicename/{name}` | error | raw |
//! | [`SCHEDULE_EVENT_CREATE`] | POST | `scheduleevent` | error | – |
//! | [`PING`] | GET | `ping` | error | – |

use std::borrow::Cow;

use url::Url;

/// API version path segment shared by every metadata endpoint.
const API_PREFIX: &str = "api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// How a 404 response is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotFound {
    /// Successful empty result.
    Empty,
    /// `MetadataError::Status` like any other non-2xx.
    Fail,
}

/// How path parameters are substituted into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyEncoding {
    Raw,
    Escaped,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Route {
    pub(crate) verb: Verb,
    pub(crate) template: &'static str,
    pub(crate) keys: KeyEncoding,
    pub(crate) not_found: NotFound,
}

impl Route {
    const fn new(verb: Verb, template: &'static str) -> Self {
        Self {
            verb,
            template,
            keys: KeyEncoding::Raw,
            not_found: NotFound::Fail,
        }
    }

    const fn escaped(self) -> Self {
        Self {
            keys: KeyEncoding::Escaped,
            ..self
        }
    }

    const fn empty_on_not_found(self) -> Self {
        Self {
            not_found: NotFound::Empty,
            ..self
        }
    }

    /// Label used in errors and logs, e.g. `GET /device/name/{name}`.
    pub(crate) fn endpoint(&self) -> String {
        format!("{} /{}", self.verb, self.template)
    }

    /// Full request URL with `{param}` placeholders substituted.
    ///
    /// The template is scanned once, so braces inside a substituted value are
    /// never taken for placeholders. Unknown placeholders are kept verbatim.
    pub(crate) fn url(&self, base: &Url, params: &[(&str, &str)]) -> String {
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            path.push_str(&rest[..open]);
            let name = &rest[open + 1..close];
            match params.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => {
                    let value = match self.keys {
                        KeyEncoding::Raw => Cow::Borrowed(*value),
                        KeyEncoding::Escaped => urlencoding::encode(value),
                    };
                    path.push_str(&value);
                }
                None => path.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        path.push_str(rest);
        format!("{base}{API_PREFIX}/{path}")
    }
}

pub(crate) const PROFILE_BY_NAME: Route = Route::new(Verb::Get, "deviceprofile/name/{name}").escaped();
pub(crate) const PROFILE_CREATE: Route = Route::new(Verb::Post, "deviceprofile");
pub(crate) const PROFILE_UPLOAD_FILE: Route = Route::new(Verb::Post, "deviceprofile/uploadfile");

pub(crate) const SERVICE_BY_NAME: Route =
    Route::new(Verb::Get, "deviceservice/name/{name}").empty_on_not_found();
pub(crate) const SERVICE_CREATE: Route = Route::new(Verb::Post, "deviceservice");

pub(crate) const DEVICES_BY_SERVICE: Route = Route::new(Verb::Get, "device/servicename/{name}");
pub(crate) const DEVICE_BY_ID: Route = Route::new(Verb::Get, "device/{id}");
pub(crate) const DEVICE_BY_NAME: Route = Route::new(Verb::Get, "device/name/{name}");
pub(crate) const DEVICE_CREATE: Route = Route::new(Verb::Post, "device");
pub(crate) const DEVICE_UPDATE: Route = Route::new(Verb::Put, "device");
pub(crate) const DEVICE_DELETE_BY_ID: Route = Route::new(Verb::Delete, "device/id/{id}");
pub(crate) const DEVICE_DELETE_BY_NAME: Route = Route::new(Verb::Delete, "device/name/{name}");
pub(crate) const DEVICE_OPSTATE: Route = Route::new(Verb::Put, "device/{id}/opstate/{state}");
pub(crate) const DEVICE_ADMINSTATE: Route = Route::new(Verb::Put, "device/{id}/adminstate/{state}");

pub(crate) const ADDRESSABLE_BY_NAME: Route =
    Route::new(Verb::Get, "addressable/name/{name}").empty_on_not_found();
pub(crate) const ADDRESSABLE_CREATE: Route = Route::new(Verb::Post, "addressable");
pub(crate) const ADDRESSABLE_UPDATE: Route = Route::new(Verb::Put, "addressable");
pub(crate) const ADDRESSABLE_DELETE_BY_NAME: Route =
    Route::new(Verb::Delete, "addressable/name/{name}");

pub(crate) const SCHEDULE_BY_NAME: Route = Route::new(Verb::Get, "schedule/name/{name}");
pub(crate) const SCHEDULE_CREATE: Route = Route::new(Verb::Post, "schedule");
pub(crate) const SCHEDULE_EVENTS_BY_SERVICE: Route =
    Route::new(Verb::Get, "scheduleevent/servicename/{name}");
pub(crate) const SCHEDULE_EVENT_CREATE: Route = Route::new(Verb::Post, "scheduleevent");

pub(crate) const PING: Route = Route::new(Verb::Get, "ping");

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://edgex-core-metadata:48081").unwrap()
    }

    #[test]
    fn profile_lookup_escapes_name() {
        let url = PROFILE_BY_NAME.url(&base(), &[("name", "Modbus Meter/v2")]);
        assert_eq!(
            url,
            "http://edgex-core-metadata:48081/api/v1/deviceprofile/name/Modbus%20Meter%2Fv2"
        );
    }

    #[test]
    fn device_lookup_keeps_name_verbatim() {
        let url = DEVICE_BY_NAME.url(&base(), &[("name", "pump-01.a~b")]);
        assert_eq!(url, "http://edgex-core-metadata:48081/api/v1/device/name/pump-01.a~b");
    }

    #[test]
    fn state_routes_substitute_both_params() {
        let url = DEVICE_OPSTATE.url(&base(), &[("id", "abc"), ("state", "disabled")]);
        assert_eq!(url, "http://edgex-core-metadata:48081/api/v1/device/abc/opstate/disabled");
        let url = DEVICE_ADMINSTATE.url(&base(), &[("id", "abc"), ("state", "LOCKED")]);
        assert!(url.ends_with("/api/v1/device/abc/adminstate/LOCKED"));
    }

    #[test]
    fn braces_in_values_are_not_substituted() {
        let url = DEVICE_OPSTATE.url(&base(), &[("id", "{state}"), ("state", "disabled")]);
        assert!(url.ends_with("/api/v1/device/{state}/opstate/disabled"));
        let url = DEVICE_BY_NAME.url(&base(), &[("name", "{name}")]);
        assert!(url.ends_with("/api/v1/device/name/{name}"));
    }

    #[test]
    fn only_addressable_and_service_lookups_are_empty_on_404() {
        let empty: Vec<&str> = [
            PROFILE_BY_NAME,
            SERVICE_BY_NAME,
            DEVICES_BY_SERVICE,
            DEVICE_BY_ID,
            DEVICE_BY_NAME,
            ADDRESSABLE_BY_NAME,
            SCHEDULE_BY_NAME,
            SCHEDULE_EVENTS_BY_SERVICE,
            PING,
        ]
        .iter()
        .filter(|r| r.not_found == NotFound::Empty)
        .map(|r| r.template)
        .collect();
        assert_eq!(empty, vec!["deviceservice/name/{name}", "addressable/name/{name}"]);
    }

    #[test]
    fn only_profile_lookup_escapes() {
        assert_eq!(PROFILE_BY_NAME.keys, KeyEncoding::Escaped);
        for route in [DEVICE_BY_NAME, SERVICE_BY_NAME, ADDRESSABLE_BY_NAME, SCHEDULE_BY_NAME] {
            assert_eq!(route.keys, KeyEncoding::Raw);
        }
    }

    #[test]
    fn endpoint_label() {
        assert_eq!(DEVICE_DELETE_BY_ID.endpoint(), "DELETE /device/id/{id}");
        assert_eq!(PING.endpoint(), "GET /ping");
    }
}
