//! Error types for webfinger discovery

use std::fmt;

#[derive(Debug)]
pub enum DiscoveryError {
    /// The account string is not of the form `user@host`
    InvalidAccount(String),
    Http(Box<reqwest::Error>),
    /// The request did not complete within the client timeout
    Timeout,
    /// The remote site answered with a non-success status
    Status(u16),
    Json(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::InvalidAccount(acct) => write!(f, "Invalid account: {}", acct),
            DiscoveryError::Http(err) => write!(f, "HTTP error: {}", err),
            DiscoveryError::Timeout => write!(f, "Discovery request timed out"),
            DiscoveryError::Status(status) => {
                write!(f, "Webfinger endpoint returned status {}", status)
            }
            DiscoveryError::Json(msg) => write!(f, "Malformed discovery document: {}", msg),
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiscoveryError::Http(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DiscoveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DiscoveryError::Timeout
        } else if err.is_decode() {
            DiscoveryError::Json(err.to_string())
        } else {
            DiscoveryError::Http(Box::new(err))
        }
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        DiscoveryError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
