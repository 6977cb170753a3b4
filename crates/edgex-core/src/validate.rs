//! # Device Profile Validation
//!
//! A profile is accepted only if every device resource declares a known
//! value type and, for numeric types, transform coefficients that scan under
//! the rule for that type's class:
//!
//! | Class | offset | scale | base |
//! |-------|--------|-------|------|
//! | `Uint8..Uint64`, `Int8..Int64` | float | float | integer |
//! | `Float32`, `Float64` | float | float | float |
//! | `Bool`, `String`, `Binary` | – | – | – |
//!
//! Integer resources scan offset and scale as floats because the metadata
//! service fills in `"1.0"` / `"0.0"` defaults for them. Absent or empty
//! coefficients are accepted without scanning.
//!
//! Validation stops at the first offending resource.

use crate::error::{NumericError, ProfileError, TransformField};
use crate::numeric::{scan_float, scan_int};
use crate::profile::{DeviceProfile, DeviceResource, PropertyValue};
use crate::resulttype::ResultType;

#[derive(Debug, Clone, Copy)]
enum Literal {
    Float,
    Integer,
}

impl Literal {
    fn scan(self, raw: &str) -> Result<(), NumericError> {
        match self {
            Self::Float => scan_float(raw).map(drop),
            Self::Integer => scan_int(raw).map(drop),
        }
    }
}

fn coefficient(value: &PropertyValue, field: TransformField) -> Option<&str> {
    match field {
        TransformField::Offset => value.offset.as_deref(),
        TransformField::Scale => value.scale.as_deref(),
        TransformField::Base => value.base.as_deref(),
    }
}

fn transform_rules(rtype: ResultType) -> Option<[(TransformField, Literal); 3]> {
    if rtype.is_integer() {
        Some([
            (TransformField::Offset, Literal::Float),
            (TransformField::Scale, Literal::Float),
            (TransformField::Base, Literal::Integer),
        ])
    } else if rtype.is_float() {
        Some([
            (TransformField::Offset, Literal::Float),
            (TransformField::Scale, Literal::Float),
            (TransformField::Base, Literal::Float),
        ])
    } else {
        // TODO: require blank coefficients for Bool/String/Binary once the
        // metadata service stops populating defaults for them.
        None
    }
}

fn check_resource(resource: &DeviceResource) -> Result<(), ProfileError> {
    let value = &resource.properties.value;
    let Some(rtype) = ResultType::classify(&value.value_type) else {
        tracing::error!(
            resource = %resource.name,
            value_type = %value.value_type,
            "deviceResource has unknown value type"
        );
        return Err(ProfileError::UnknownValueType {
            resource: resource.name.clone(),
            value_type: value.value_type.clone(),
        });
    };

    let Some(rules) = transform_rules(rtype) else {
        return Ok(());
    };

    for (field, literal) in rules {
        let raw = match coefficient(value, field) {
            Some(raw) if !raw.is_empty() => raw,
            _ => continue,
        };
        if let Err(source) = literal.scan(raw) {
            tracing::error!(
                resource = %resource.name,
                %field,
                value = raw,
                expected = ?literal,
                "invalid transform in deviceResource: {source}"
            );
            return Err(ProfileError::InvalidTransform {
                resource: resource.name.clone(),
                field,
                value: raw.to_string(),
                source,
            });
        }
    }
    Ok(())
}

/// Check every device resource of `profile` in declaration order, returning
/// the first failure.
pub fn check_profile(profile: &DeviceProfile) -> Result<(), ProfileError> {
    profile.device_resources.iter().try_for_each(check_resource)
}

/// `true` when [`check_profile`] accepts the profile.
pub fn validate_profile(profile: &DeviceProfile) -> bool {
    check_profile(profile).is_ok()
}
