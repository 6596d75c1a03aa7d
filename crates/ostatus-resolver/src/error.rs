//! Error types for remote subscription resolution

use std::fmt;

use ostatus_discovery::DiscoveryError;

use crate::directory::DirectoryError;

/// Which local entity could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTarget {
    /// The user, or the tagger owning a list
    User,
    Group,
    List,
}

#[derive(Debug)]
pub enum ResolutionError {
    /// None of user, group or list was supplied
    NoLocalTargetProvided,
    NoSuchLocalTarget(MissingTarget),
    UnrecognizedIdentifierFormat,
    /// Discovery succeeded but advertised no usable subscribe link
    SubscribeLinkNotFound,
    DiscoveryFailed(DiscoveryError),
    Directory(DirectoryError),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::NoLocalTargetProvided => {
                write!(f, "No local user or group nickname provided")
            }
            ResolutionError::NoSuchLocalTarget(MissingTarget::User) => write!(f, "No such user"),
            ResolutionError::NoSuchLocalTarget(MissingTarget::Group) => write!(f, "No such group"),
            ResolutionError::NoSuchLocalTarget(MissingTarget::List) => write!(f, "No such list"),
            ResolutionError::UnrecognizedIdentifierFormat => {
                write!(f, "Remote identifier is neither a profile URL nor an account")
            }
            ResolutionError::SubscribeLinkNotFound => {
                write!(f, "Remote site advertises no subscribe link")
            }
            ResolutionError::DiscoveryFailed(err) => write!(f, "Discovery failed: {}", err),
            ResolutionError::Directory(err) => write!(f, "Directory error: {}", err),
        }
    }
}

impl std::error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolutionError::DiscoveryFailed(err) => Some(err),
            ResolutionError::Directory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DiscoveryError> for ResolutionError {
    fn from(err: DiscoveryError) -> Self {
        ResolutionError::DiscoveryFailed(err)
    }
}

impl From<DirectoryError> for ResolutionError {
    fn from(err: DirectoryError) -> Self {
        ResolutionError::Directory(err)
    }
}

pub type Result<T> = std::result::Result<T, ResolutionError>;
