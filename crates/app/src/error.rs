//! Service-level error carrying the failed operation.

use std::fmt;

use devicehub_domain::error::{DeviceHubError, ErrorKind};

/// The use-case that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Update,
    Delete,
    List,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        })
    }
}

/// A [`DeviceHubError`] annotated with the operation that produced it.
///
/// The kind of the underlying error is never altered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} device: {source}")]
pub struct ServiceError {
    pub operation: Operation,
    pub source: DeviceHubError,
}

impl ServiceError {
    /// Attach `operation` to `source`.
    #[must_use]
    pub fn new(operation: Operation, source: DeviceHubError) -> Self {
        Self { operation, source }
    }

    /// Kind of the underlying domain error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}
