//! # Result Types — Device Resource Value Vocabulary
//!
//! Defines the closed set of scalar types a device resource may produce.
//! Profiles name the type as a string (`"Int16"`, `"Float32"`, ...);
//! [`ResultType::classify`] maps that string onto the enum and reports
//! anything outside the vocabulary by returning `None`.

use std::str::FromStr;

use crate::error::ParseResultTypeError;

/// Scalar type of a device resource reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    /// Boolean.
    Bool,
    /// UTF-8 text.
    String,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// IEEE-754 single precision.
    Float32,
    /// IEEE-754 double precision.
    Float64,
    /// Opaque byte blob.
    Binary,
}

impl ResultType {
    /// Every member of the vocabulary, in declaration order.
    pub fn all() -> &'static [ResultType] {
        &[
            Self::Bool,
            Self::String,
            Self::Uint8,
            Self::Uint16,
            Self::Uint32,
            Self::Uint64,
            Self::Int8,
            Self::Int16,
            Self::Int32,
            Self::Int64,
            Self::Float32,
            Self::Float64,
            Self::Binary,
        ]
    }

    /// Canonical spelling used in profile definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::String => "String",
            Self::Uint8 => "Uint8",
            Self::Uint16 => "Uint16",
            Self::Uint32 => "Uint32",
            Self::Uint64 => "Uint64",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Binary => "Binary",
        }
    }

    /// Map a type name onto the vocabulary.
    ///
    /// Matching ignores ASCII case. Empty and unrecognized names yield `None`.
    pub fn classify(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    /// Signed or unsigned integer of any width.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
        )
    }

    /// Single or double precision float.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = ParseResultTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s).ok_or_else(|| ParseResultTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_every_canonical_name() {
        for t in ResultType::all() {
            assert_eq!(ResultType::classify(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn classify_ignores_ascii_case() {
        assert_eq!(ResultType::classify("FLOAT32"), Some(ResultType::Float32));
        assert_eq!(ResultType::classify("int16"), Some(ResultType::Int16));
        assert_eq!(ResultType::classify("bOoL"), Some(ResultType::Bool));
    }

    #[test]
    fn classify_rejects_unknown_and_empty() {
        assert_eq!(ResultType::classify(""), None);
        assert_eq!(ResultType::classify("Int128"), None);
        assert_eq!(ResultType::classify(" Int8"), None);
        assert_eq!(ResultType::classify("Float"), None);
    }

    #[test]
    fn integer_and_float_classes_are_disjoint() {
        for t in ResultType::all() {
            assert!(!(t.is_integer() && t.is_float()), "{t} in both classes");
        }
        let integers = ResultType::all().iter().filter(|t| t.is_integer()).count();
        let floats = ResultType::all().iter().filter(|t| t.is_float()).count();
        assert_eq!(integers, 8);
        assert_eq!(floats, 2);
    }

    #[test]
    fn untransformed_types() {
        for t in [ResultType::Bool, ResultType::String, ResultType::Binary] {
            assert!(!t.is_integer());
            assert!(!t.is_float());
        }
    }

    #[test]
    fn from_str_error_carries_input() {
        let err = "Complex".parse::<ResultType>().unwrap_err();
        assert_eq!(err.0, "Complex");
        assert_eq!("uint64".parse::<ResultType>().unwrap(), ResultType::Uint64);
    }

    #[test]
    fn display_matches_canonical_spelling() {
        assert_eq!(ResultType::Float64.to_string(), "Float64");
        assert_eq!(ResultType::Uint8.to_string(), "Uint8");
    }
}
