use serde::de::DeserializeOwned;
use serde_json::Value;

use super::message::RawMessage;
use crate::error::SolverResponseParserError;

/// Solver-reported failure reply, reduced to the fields callers act on.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverError {
    reply: RawMessage,
}

impl SolverError {
    pub(crate) fn new(reply: RawMessage) -> Self {
        Self { reply }
    }

    pub fn field(&self, name: &str) -> Result<&Value, SolverResponseParserError> {
        self.reply.field(name)
    }

    pub fn typed_field<T>(&self, name: &str) -> Result<T, SolverResponseParserError>
    where
        T: DeserializeOwned,
    {
        self.reply.typed_field(name)
    }

    pub fn code(&self) -> Result<u64, SolverResponseParserError> {
        self.typed_field("code")
    }

    pub fn message(&self) -> Result<String, SolverResponseParserError> {
        self.typed_field("message")
    }
}
