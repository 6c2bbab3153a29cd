use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracking core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Progress value cannot be negative, got {0}")]
    NegativeValue(f64),

    #[error("Target value must be positive, got {0}")]
    NonPositiveTarget(f64),
}

#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Goal '{0}' not found")]
    Goal(String),

    #[error("Achievement '{0}' not found")]
    Achievement(String),
}

/// Reserved for concurrent-write detection. The in-memory stores only
/// report it when a lock was poisoned by a writer that panicked mid-update;
/// a transactional backend maps its serialization failures here.
#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Concurrent write detected on {0}")]
    ConcurrentWrite(String),
}

impl Error {
    pub(crate) fn poisoned(what: &str) -> Self {
        Error::Conflict(ConflictError::ConcurrentWrite(what.to_string()))
    }
}
