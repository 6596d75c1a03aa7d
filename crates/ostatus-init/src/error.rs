//! Error types for the remote subscribe service

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ostatus_discovery::DiscoveryError;
use ostatus_resolver::{DirectoryError, MissingTarget, ResolutionError};
use tracing::{error, warn};

use crate::views::render_error;

/// Errors that stop the service from starting
#[derive(Debug)]
pub enum InitError {
    Config(String),
    Io(Box<std::io::Error>),
    Database(Box<sqlx::Error>),
    Directory(DirectoryError),
    Discovery(DiscoveryError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Config(msg) => write!(f, "Configuration error: {}", msg),
            InitError::Io(err) => write!(f, "IO error: {}", err),
            InitError::Database(err) => write!(f, "Database error: {}", err),
            InitError::Directory(err) => write!(f, "Directory error: {}", err),
            InitError::Discovery(err) => write!(f, "Discovery setup error: {}", err),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Io(err) => Some(err.as_ref()),
            InitError::Database(err) => Some(err.as_ref()),
            InitError::Directory(err) => Some(err),
            InitError::Discovery(err) => Some(err),
            InitError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for InitError {
    fn from(err: std::io::Error) -> Self {
        InitError::Io(Box::new(err))
    }
}

impl From<sqlx::Error> for InitError {
    fn from(err: sqlx::Error) -> Self {
        InitError::Database(Box::new(err))
    }
}

impl From<DirectoryError> for InitError {
    fn from(err: DirectoryError) -> Self {
        InitError::Directory(err)
    }
}

impl From<DiscoveryError> for InitError {
    fn from(err: DiscoveryError) -> Self {
        InitError::Discovery(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for InitError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        InitError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InitError>;

/// Request error rendered as an error page
#[derive(Debug)]
pub enum AppError {
    Resolution(ResolutionError),
}

impl AppError {
    /// Status code and visitor-facing message for this error
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Resolution(err) => match err {
                ResolutionError::NoLocalTargetProvided => (
                    StatusCode::BAD_REQUEST,
                    "No local user or group nickname provided.",
                ),
                ResolutionError::NoSuchLocalTarget(MissingTarget::User) => {
                    (StatusCode::NOT_FOUND, "No such user.")
                }
                ResolutionError::NoSuchLocalTarget(MissingTarget::Group) => {
                    (StatusCode::NOT_FOUND, "No such group.")
                }
                ResolutionError::NoSuchLocalTarget(MissingTarget::List) => {
                    (StatusCode::NOT_FOUND, "No such list.")
                }
                ResolutionError::UnrecognizedIdentifierFormat => {
                    (StatusCode::BAD_REQUEST, "Must provide a remote profile.")
                }
                ResolutionError::SubscribeLinkNotFound => (
                    StatusCode::BAD_REQUEST,
                    "Could not confirm remote profile address.",
                ),
                ResolutionError::DiscoveryFailed(_) => (
                    StatusCode::BAD_GATEWAY,
                    "Could not confirm remote profile address.",
                ),
                ResolutionError::Directory(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            },
        }
    }
}

impl From<ResolutionError> for AppError {
    fn from(err: ResolutionError) -> Self {
        AppError::Resolution(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::Resolution(ResolutionError::Directory(err)) => {
                error!(error = %err, "Directory lookup failed");
            }
            AppError::Resolution(err) => warn!(error = %err, "Remote subscribe failed"),
        }

        render_error(status, message)
    }
}
