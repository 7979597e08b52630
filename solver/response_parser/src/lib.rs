mod domain;
pub mod error;

use log::{debug, trace};

pub use crate::domain::{
    message::{RawMessage, ERROR_MARKER},
    response::SolverResponse,
    solver_error::SolverError,
    status::{ExitStatus, SolverStatus},
};
use crate::error::SolverResponseParserError;

/// Decodes reply text received from the solver over the socket.
#[derive(Clone, Copy, Debug)]
pub struct ResponseParser;

impl ResponseParser {
    /// Deserializes the wire text and classifies the reply. Deserialization
    /// is the only fallible step; classification itself always succeeds.
    pub fn parse_response(
        &self,
        response: &str,
    ) -> Result<SolverResponse, SolverResponseParserError> {
        trace!("parse_response >>> response: {}", response);
        let message: RawMessage = serde_json::from_str(response)?;
        let response = SolverResponse::classify(message);
        debug!("Classified solver reply, is_ok: {}", response.is_ok());
        Ok(response)
    }
}
