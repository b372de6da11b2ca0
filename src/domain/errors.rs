//! Domain validation failures

use thiserror::Error;

/// A rejected field value, raised before any entity state is mutated.
///
/// The field name travels with the error so the transport layer can report
/// which input was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Reject empty or whitespace-only strings.
pub fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must be a non-empty string"));
    }
    Ok(())
}
