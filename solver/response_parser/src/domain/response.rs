use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{message::RawMessage, solver_error::SolverError, status::SolverStatus};
use crate::error::SolverResponseParserError;

/// A solver reply classified into exactly one of its two shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverResponse {
    Status(SolverStatus),
    Error(SolverError),
}

impl SolverResponse {
    /// Classifies a reply. Total: every message yields one of the two
    /// variants. A reply is a failure iff one of its top-level values equals
    /// the `"Error"` marker; the scan is value-based, so the marker is
    /// recognized under any key.
    pub fn classify(message: RawMessage) -> Self {
        if message.reports_error() {
            Self::Error(SolverError::new(message))
        } else {
            Self::Status(SolverStatus::new(message))
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    pub fn status(&self) -> Option<&SolverStatus> {
        match self {
            Self::Status(status) => Some(status),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SolverError> {
        match self {
            Self::Status(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<SolverStatus, SolverError> {
        match self {
            Self::Status(status) => Ok(status),
            Self::Error(error) => Err(error),
        }
    }

    /// Looks up a field on whichever payload is held.
    pub fn field(&self, name: &str) -> Result<&Value, SolverResponseParserError> {
        match self {
            Self::Status(status) => status.field(name),
            Self::Error(error) => error.field(name),
        }
    }

    pub fn typed_field<T>(&self, name: &str) -> Result<T, SolverResponseParserError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Status(status) => status.typed_field(name),
            Self::Error(error) => error.typed_field(name),
        }
    }
}
