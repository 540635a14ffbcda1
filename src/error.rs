//! Solver error types.

use crate::validation::ValidationError;

/// Errors that can abort a timetabling run.
///
/// Every error is raised before or instead of producing a result; the
/// engine never returns a partial schedule.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Problem construction rejected the input data.
    #[error("invalid problem input: {}", join_messages(.0))]
    InvalidProblem(Vec<ValidationError>),

    /// The GA configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Crossover was attempted between candidates of different lengths.
    #[error("mismatched parents: left has {left} placements, right has {right}")]
    MismatchedParents {
        /// Placement count of the left parent.
        left: usize,
        /// Placement count of the right parent.
        right: usize,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
