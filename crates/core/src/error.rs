/// Domain-level error taxonomy.
///
/// `Validation` and `InvalidId` are client errors (the API layer maps both
/// to 400); `Internal` wraps unanticipated store faults and maps to 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid milestone id: {0}")]
    InvalidId(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
