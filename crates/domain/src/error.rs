//! Common error types used across the workspace.
//!
//! Each failure kind has a typed error with one canonical message. Layers
//! above the domain wrap [`DeviceHubError`] but never change its kind.

use std::fmt;

/// Base error for every device operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

impl DeviceHubError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
        }
    }
}

/// Coarse classification of a [`DeviceHubError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request or a value breaking a domain invariant.
    InvalidInput,
    /// The operation targets a serial number that is not stored.
    NotFound,
    /// A create targets a serial number that is already stored.
    Conflict,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "invalid input",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
        })
    }
}

/// A value violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("serial number must not be empty")]
    EmptySerialNum,

    #[error("invalid IPv4 address {ip:?}")]
    InvalidIpv4 { ip: String },

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// No device is stored under the requested serial number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device {serial_num:?} not found")]
pub struct NotFoundError {
    pub serial_num: String,
}

/// A device with the same serial number is already stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device {serial_num:?} already exists")]
pub struct ConflictError {
    pub serial_num: String,
}
