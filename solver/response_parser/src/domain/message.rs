use std::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SolverResponseParserError;

/// Value a failure reply carries in its discriminating field.
pub const ERROR_MARKER: &str = "Error";

/// Untyped solver reply, a string-keyed JSON object as received off the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMessage(Map<String, Value>);

impl RawMessage {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn field(&self, name: &str) -> Result<&Value, SolverResponseParserError> {
        self.0
            .get(name)
            .ok_or_else(|| SolverResponseParserError::FieldNotFound(name.to_string()))
    }

    pub fn typed_field<T>(&self, name: &str) -> Result<T, SolverResponseParserError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(self.field(name)?.clone()).map_err(Into::into)
    }

    /// Whether any top-level value equals [`ERROR_MARKER`]. Equality only;
    /// substrings and values nested inside objects or arrays do not count.
    pub(crate) fn reports_error(&self) -> bool {
        self.0.values().any(|value| value == ERROR_MARKER)
    }
}

impl Display for RawMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(e) => write!(f, "Error serializing RawMessage: {}", e),
        }
    }
}
