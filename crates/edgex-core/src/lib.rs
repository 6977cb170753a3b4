#![deny(missing_docs)]

//! # edgex-core — Domain Types for the EdgeX Metadata Catalog
//!
//! This crate defines the entities tracked by the EdgeX metadata service and
//! the only non-trivial local logic around them: classification of resource
//! value types and validation of the numeric transforms a device profile
//! declares. It performs no I/O and uses only `serde`, `serde_json`, `thiserror`
//! and `tracing` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Server-issued identifiers.** Every entity carries `id: Option<String>`.
//!    It is `None` until the metadata service assigns one; nothing in the
//!    workspace fabricates ids locally.
//!
//! 2. **Tolerant decoding, sparse encoding.** Models decode whatever subset of
//!    fields the server sends and encode only populated fields, so a
//!    reference such as a device's profile serializes as `{"name": "..."}`.
//!
//! 3. **C-compatible numeric scanning.** [`numeric`] reproduces `strtold` /
//!    `strtoll(.., 0)` acceptance rules because profiles are authored against
//!    device services that parse transforms that way.
//!
//! 4. **Fail-fast validation.** [`validate::check_profile`] stops at the first
//!    offending resource and reports it as a typed [`ProfileError`].

pub mod addressable;
pub mod device;
pub mod device_service;
pub mod error;
pub mod numeric;
pub mod profile;
pub mod resulttype;
pub mod schedule;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use addressable::Addressable;
pub use device::{AdminState, Device, OperatingState};
pub use device_service::DeviceService;
pub use error::{NumericError, ParseResultTypeError, ProfileError, TransformField};
pub use profile::{
    DeviceProfile, DeviceResource, ProfileProperty, ProfileResource, PropertyValue,
    ResourceOperation, Units,
};
pub use resulttype::ResultType;
pub use schedule::{Schedule, ScheduleEvent};
pub use validate::{check_profile, validate_profile};

/// `skip_serializing_if` predicate for zero-valued timestamps and ports.
pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
