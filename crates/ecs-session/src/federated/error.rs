use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors reported by the federated identity provider.
#[derive(Error, Debug)]
pub enum FederatedAuthError {
    #[error("Sign-in failed ({code}) {location}")]
    SignIn {
        code: String,
        location: ErrorLocation,
    },

    #[error("Sign-out failed: {message} {location}")]
    SignOut {
        message: String,
        location: ErrorLocation,
    },
}

impl FederatedAuthError {
    /// Sign-in failure carrying the provider's error code, e.g. `auth/wrong-password`.
    #[track_caller]
    pub fn sign_in(code: impl Into<String>) -> Self {
        Self::SignIn {
            code: code.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sign_out(message: impl Into<String>) -> Self {
        Self::SignOut {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider code, if this is a sign-in failure.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::SignIn { code, .. } => Some(code),
            Self::SignOut { .. } => None,
        }
    }

    /// Message suitable for showing on the login view.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::SignIn { code, .. } => match code.as_str() {
                "auth/user-not-found" => "No account found with this email address.",
                "auth/wrong-password" => "Incorrect password. Please try again.",
                "auth/invalid-email" => "Invalid email address. Please check your email.",
                "auth/user-disabled" => "This account has been disabled.",
                "auth/too-many-requests" => "Too many failed attempts. Please try again later.",
                "auth/network-request-failed" => "Network error. Please check your connection.",
                "auth/popup-closed-by-user" => "Sign-in popup was closed. Please try again.",
                "auth/cancelled-popup-request" => "Sign-in was cancelled. Please try again.",
                "auth/popup-blocked" => {
                    "Popup was blocked by your browser. Please allow popups and try again."
                }
                _ => "An error occurred during sign-in. Please try again.",
            },
            Self::SignOut { .. } => "Failed to sign out. Please try again.",
        }
    }
}

pub type Result<T> = std::result::Result<T, FederatedAuthError>;
