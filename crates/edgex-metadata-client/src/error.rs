//! Metadata client error types and the `(code, reason)` error signal.
//!
//! Every operation returns `Result<T, MetadataError>`. Callers that need the
//! flat status pair used across EdgeX services call [`MetadataError::signal`]
//! (or [`signal_of`] on a whole result); code 0 always means success.

use std::path::PathBuf;

use edgex_core::ProfileError;

/// Errors from metadata service calls.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// HTTP transport error (connection refused, timeout, broken body).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Metadata service returned a non-2xx status.
    #[error("metadata {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body could not be decoded into the expected entity.
    #[error("failed to decode response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Request entity could not be encoded.
    #[error("failed to encode request for {endpoint}: {source}")]
    Serialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Fetched profile was rejected by the validator.
    #[error("error while parsing device profile {name}: {source}")]
    ProfileParse { name: String, source: ProfileError },
    /// Local file could not be read for upload.
    #[error("unable to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

/// Coarse classification of a [`MetadataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-2xx status or network failure.
    Transport,
    /// Profile fetched but rejected by the validator.
    ProfileParse,
    /// JSON could not be encoded or decoded.
    Codec,
    /// Local argument or configuration problem; nothing was sent.
    Request,
}

/// Flat `(code, reason)` outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSignal {
    /// 0 on success, the HTTP status for non-2xx responses, otherwise one of
    /// the associated constants.
    pub code: u32,
    /// Human-readable cause; the response body for non-2xx responses.
    pub reason: String,
}

impl ErrorSignal {
    /// Success.
    pub const OK: u32 = 0;
    /// Response or request JSON could not be processed.
    pub const CODEC_ERROR: u32 = 2;
    /// The service could not be reached at all.
    pub const REMOTE_SERVER_DOWN: u32 = 10;
    /// A local argument (file, configuration) was unusable.
    pub const INVALID_ARGUMENT: u32 = 12;
    /// A fetched profile failed validation.
    pub const PROFILE_PARSE_ERROR: u32 = 13;

    /// The success signal.
    pub fn ok() -> Self {
        Self {
            code: Self::OK,
            reason: "Success".into(),
        }
    }

    /// Whether the code is [`Self::OK`].
    pub fn is_ok(&self) -> bool {
        self.code == Self::OK
    }
}

impl MetadataError {
    /// Coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::Status { .. } => ErrorKind::Transport,
            Self::ProfileParse { .. } => ErrorKind::ProfileParse,
            Self::Deserialization { .. } | Self::Serialization { .. } => ErrorKind::Codec,
            Self::File { .. } | Self::Config(_) => ErrorKind::Request,
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `(code, reason)` pair for this error.
    ///
    /// Non-2xx responses carry the HTTP status as the code and the response
    /// body as the reason; other errors use fixed codes.
    pub fn signal(&self) -> ErrorSignal {
        let code = match self {
            Self::Status { status, .. } => u32::from(*status),
            Self::Http { .. } => ErrorSignal::REMOTE_SERVER_DOWN,
            Self::Deserialization { .. } | Self::Serialization { .. } => ErrorSignal::CODEC_ERROR,
            Self::ProfileParse { .. } => ErrorSignal::PROFILE_PARSE_ERROR,
            Self::File { .. } | Self::Config(_) => ErrorSignal::INVALID_ARGUMENT,
        };
        let reason = match self {
            Self::Status { body, .. } if !body.is_empty() => body.clone(),
            Self::ProfileParse { .. } => "Error while parsing device profile".into(),
            other => other.to_string(),
        };
        ErrorSignal { code, reason }
    }
}

/// Signal for a whole operation result: [`ErrorSignal::ok`] on success.
pub fn signal_of<T>(result: &Result<T, MetadataError>) -> ErrorSignal {
    match result {
        Ok(_) => ErrorSignal::ok(),
        Err(e) => e.signal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_signal_uses_http_code_and_body() {
        let err = MetadataError::Status {
            endpoint: "GET /device/name/{name}".into(),
            status: 404,
            body: "Device not found".into(),
        };
        let signal = err.signal();
        assert_eq!(signal.code, 404);
        assert_eq!(signal.reason, "Device not found");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn status_signal_with_empty_body_falls_back_to_display() {
        let err = MetadataError::Status {
            endpoint: "DELETE /device/id/{id}".into(),
            status: 500,
            body: String::new(),
        };
        assert!(err.signal().reason.contains("DELETE /device/id/{id}"));
    }

    #[test]
    fn profile_parse_signal() {
        let err = MetadataError::ProfileParse {
            name: "thermostat".into(),
            source: ProfileError::UnknownValueType {
                resource: "t".into(),
                value_type: "x".into(),
            },
        };
        let signal = err.signal();
        assert_eq!(signal.code, ErrorSignal::PROFILE_PARSE_ERROR);
        assert!(!signal.is_ok());
        assert_eq!(err.kind(), ErrorKind::ProfileParse);
    }

    #[test]
    fn file_error_is_request_kind() {
        let err = MetadataError::File {
            path: PathBuf::from("/nonexistent/profile.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.kind(), ErrorKind::Request);
        assert_eq!(err.signal().code, ErrorSignal::INVALID_ARGUMENT);
        assert!(format!("{err}").contains("/nonexistent/profile.yaml"));
    }

    #[test]
    fn signal_of_ok_result_is_zero() {
        let result: Result<(), MetadataError> = Ok(());
        assert_eq!(signal_of(&result), ErrorSignal::ok());
        assert!(signal_of(&result).is_ok());
    }
}
