use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Please fill in all fields: '{field}' is missing {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Field '{field}' expects {expected}, got '{value}' {location}")]
    InvalidNumber {
        field: &'static str,
        expected: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Field '{field}' must be one of [{}], got '{value}' {location}", .allowed.join(", "))]
    UnknownOption {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
        location: ErrorLocation,
    },
}

impl SimulationError {
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_number(field: &'static str, expected: &'static str, value: &str) -> Self {
        Self::InvalidNumber {
            field,
            expected,
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_option(
        field: &'static str,
        value: &str,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::UnknownOption {
            field,
            value: value.to_string(),
            allowed,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Key of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::UnknownOption { field, .. } => field,
        }
    }
}

pub type Result<T> = StdResult<T, SimulationError>;
