//! # Error Types
//!
//! Structured errors for value-type classification, numeric scanning and
//! profile validation, built with `thiserror`. Each variant carries the
//! offending input so operators can locate the bad resource definition
//! without re-reading the whole profile.

use thiserror::Error;

/// The transform coefficient a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformField {
    /// Additive offset applied after scaling.
    Offset,
    /// Multiplicative scale factor.
    Scale,
    /// Exponent base for power transforms.
    Base,
}

impl TransformField {
    /// The lowercase field name as it appears in profile JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::Scale => "scale",
            Self::Base => "base",
        }
    }
}

impl std::fmt::Display for TransformField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to scan a numeric literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// The scanner consumed no characters.
    #[error("no numeric literal found")]
    NoDigits,

    /// A literal was recognized but characters remain after it.
    #[error("unexpected trailing characters {rest:?}")]
    Trailing {
        /// The unconsumed remainder of the input.
        rest: String,
    },

    /// The literal overflows or underflows the target representation.
    #[error("value out of range")]
    OutOfRange,
}

/// A value-type name that does not belong to the platform vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value type {0:?}")]
pub struct ParseResultTypeError(pub String);

/// Reasons a device profile is rejected by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A device resource declares a value type outside the vocabulary.
    #[error("deviceResource {resource} has unknown value type {value_type:?}")]
    UnknownValueType {
        /// Name of the offending device resource.
        resource: String,
        /// The unrecognized type string.
        value_type: String,
    },

    /// A transform coefficient does not scan under its class's rule.
    #[error("invalid transform in deviceResource {resource}: {field} {value:?}: {source}")]
    InvalidTransform {
        /// Name of the offending device resource.
        resource: String,
        /// Which coefficient failed.
        field: TransformField,
        /// The raw coefficient string.
        value: String,
        /// Why the scanner rejected it.
        source: NumericError,
    },
}

impl ProfileError {
    /// Name of the device resource that failed validation.
    pub fn resource(&self) -> &str {
        match self {
            Self::UnknownValueType { resource, .. } | Self::InvalidTransform { resource, .. } => {
                resource
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_type_display_names_resource_and_type() {
        let err = ProfileError::UnknownValueType {
            resource: "temperature".to_string(),
            value_type: "Decimal128".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("temperature"));
        assert!(msg.contains("Decimal128"));
        assert_eq!(err.resource(), "temperature");
    }

    #[test]
    fn invalid_transform_display_names_field() {
        let err = ProfileError::InvalidTransform {
            resource: "humidity".to_string(),
            field: TransformField::Base,
            value: "1.5".to_string(),
            source: NumericError::Trailing {
                rest: ".5".to_string(),
            },
        };
        let msg = format!("{err}");
        assert!(msg.contains("humidity"));
        assert!(msg.contains("base"));
        assert!(msg.contains("\".5\""));
    }

    #[test]
    fn parse_result_type_error_quotes_input() {
        let err = ParseResultTypeError("Nope".to_string());
        assert_eq!(format!("{err}"), "unknown value type \"Nope\"");
    }
}
