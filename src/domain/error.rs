use crate::domain::form::FieldErrors;
use thiserror::Error;

/// The two error kinds a submission attempt can produce. Validation is
/// recovered locally as inline field messages; an operation failure surfaces
/// as a single generic alert. Neither is fatal.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Operation failed: {0}")]
    Operation(String),
}
