use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::message::RawMessage;
use crate::error::SolverResponseParserError;

/// Termination outcome the solver reports for a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitStatus {
    Converged,
    NotConvergedIterations,
    NotConvergedOutOfTime,
}

/// Successful solver reply.
///
/// Holds the full reply and types its fields at access time, so a partial
/// reply still constructs and only the missing lookups fail.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverStatus {
    reply: RawMessage,
}

impl SolverStatus {
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

    pub fn exit_status(&self) -> Result<ExitStatus, SolverResponseParserError> {
        self.typed_field("exit_status")
    }

    pub fn num_outer_iterations(&self) -> Result<u64, SolverResponseParserError> {
        self.typed_field("num_outer_iterations")
    }

    pub fn num_inner_iterations(&self) -> Result<u64, SolverResponseParserError> {
        self.typed_field("num_inner_iterations")
    }

    pub fn last_problem_norm_fpr(&self) -> Result<f64, SolverResponseParserError> {
        self.typed_field("last_problem_norm_fpr")
    }

    pub fn delta_y_norm_over_c(&self) -> Result<f64, SolverResponseParserError> {
        self.typed_field("delta_y_norm_over_c")
    }

    pub fn f2_norm(&self) -> Result<f64, SolverResponseParserError> {
        self.typed_field("f2_norm")
    }

    pub fn penalty(&self) -> Result<f64, SolverResponseParserError> {
        self.typed_field("penalty")
    }

    pub fn solve_time_ms(&self) -> Result<f64, SolverResponseParserError> {
        self.typed_field("solve_time_ms")
    }

    pub fn cost(&self) -> Result<f64, SolverResponseParserError> {
        self.typed_field("cost")
    }

    pub fn solution(&self) -> Result<Vec<f64>, SolverResponseParserError> {
        self.typed_field("solution")
    }

    pub fn lagrange_multipliers(&self) -> Result<Vec<f64>, SolverResponseParserError> {
        self.typed_field("lagrange_multipliers")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn full_status_reply() -> SolverStatus {
        let reply = serde_json::from_value(json!({
            "exit_status": "Converged",
            "num_outer_iterations": 3,
            "num_inner_iterations": 64,
            "last_problem_norm_fpr": 8.881e-7,
            "delta_y_norm_over_c": 1.77e-5,
            "f2_norm": 0.0,
            "penalty": 1000.0,
            "lagrange_multipliers": [12.467, -0.014],
            "solve_time_ms": 4.292,
            "solution": [1.0627, 0.2524, 0.1695],
            "cost": 0.3162
        }))
        .unwrap();
        SolverStatus::new(reply)
    }

    #[test]
    fn typed_accessors_read_full_reply() {
        let status = full_status_reply();
        assert_eq!(status.exit_status().unwrap(), ExitStatus::Converged);
        assert_eq!(status.num_outer_iterations().unwrap(), 3);
        assert_eq!(status.num_inner_iterations().unwrap(), 64);
        assert_eq!(status.last_problem_norm_fpr().unwrap(), 8.881e-7);
        assert_eq!(status.delta_y_norm_over_c().unwrap(), 1.77e-5);
        assert_eq!(status.f2_norm().unwrap(), 0.0);
        assert_eq!(status.penalty().unwrap(), 1000.0);
        assert_eq!(status.solve_time_ms().unwrap(), 4.292);
        assert_eq!(status.cost().unwrap(), 0.3162);
        assert_eq!(status.solution().unwrap(), vec![1.0627, 0.2524, 0.1695]);
        assert_eq!(
            status.lagrange_multipliers().unwrap(),
            vec![12.467, -0.014]
        );
    }

    #[test]
    fn exit_status_covers_non_convergence() {
        let reply = serde_json::from_value(json!({
            "exit_status": "NotConvergedOutOfTime"
        }))
        .unwrap();
        let status = SolverStatus::new(reply);
        assert_eq!(
            status.exit_status().unwrap(),
            ExitStatus::NotConvergedOutOfTime
        );
    }

    #[test]
    fn accessor_fails_on_partial_reply() {
        let reply = serde_json::from_value(json!({"exit_status": "Converged"})).unwrap();
        let status = SolverStatus::new(reply);
        assert!(matches!(
            status.solution().unwrap_err(),
            SolverResponseParserError::FieldNotFound(name) if name == "solution"
        ));
    }

    #[test]
    fn generic_field_matches_typed_accessor() {
        let status = full_status_reply();
        assert_eq!(status.field("cost").unwrap(), &json!(0.3162));
        assert_eq!(
            status.typed_field::<f64>("cost").unwrap(),
            status.cost().unwrap()
        );
    }
}
