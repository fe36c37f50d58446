use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use url::ParseError;

/// Errors produced while resolving, persisting or tearing down a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Malformed SSO token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Incomplete SSO token: missing '{field}' {location}")]
    IncompleteToken {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("SSO token expired at {exp} (now {now}) {location}")]
    ExpiredToken {
        exp: i64,
        now: i64,
        location: ErrorLocation,
    },

    #[error("Stored session under '{key}' is corrupt: {message} {location}")]
    StorageCorrupt {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read stored session under '{key}': {message} {location}")]
    StorageRead {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write stored session under '{key}': {message} {location}")]
    StorageWrite {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid page URL '{url}': {source} {location}")]
    InvalidUrl {
        url: String,
        #[source]
        source: ParseError,
        location: ErrorLocation,
    },

    #[error("Failed to serialize identity record: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Stable code used in diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::IncompleteToken { .. } => "INCOMPLETE_TOKEN",
            Self::ExpiredToken { .. } => "EXPIRED_TOKEN",
            Self::StorageCorrupt { .. } => "STORAGE_CORRUPT",
            Self::StorageRead { .. } => "STORAGE_READ",
            Self::StorageWrite { .. } => "STORAGE_WRITE",
            Self::InvalidUrl { .. } => "INVALID_URL",
            Self::Serialization { .. } => "SERIALIZATION",
        }
    }

    /// Whether resolution degrades to the next source instead of failing.
    ///
    /// Write, URL and serialization failures are the kinds that escape the gate.
    pub fn is_fallthrough(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken { .. }
                | Self::IncompleteToken { .. }
                | Self::ExpiredToken { .. }
                | Self::StorageCorrupt { .. }
                | Self::StorageRead { .. }
        )
    }

    #[track_caller]
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::MalformedToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn incomplete_token(field: &'static str) -> Self {
        Self::IncompleteToken {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn expired_token(exp: i64, now: i64) -> Self {
        Self::ExpiredToken {
            exp,
            now,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage_corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageCorrupt {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage_read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageRead {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, source: ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage_write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageWrite {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
