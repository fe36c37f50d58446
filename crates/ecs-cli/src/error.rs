use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ecs_config::ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] ecs_session::SessionError),

    #[error("{0}")]
    Simulation(#[from] ecs_modules::SimulationError),

    #[error("Unknown module '{module}' {location}")]
    UnknownModule {
        module: String,
        location: ErrorLocation,
    },

    #[error("Unknown simulator '{simulator}' in {module} {location}")]
    UnknownSimulator {
        module: String,
        simulator: String,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn unknown_module(module: impl Into<String>) -> Self {
        Self::UnknownModule {
            module: module.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_simulator(module: impl Into<String>, simulator: impl Into<String>) -> Self {
        Self::UnknownSimulator {
            module: module.into(),
            simulator: simulator.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
