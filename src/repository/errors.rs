use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be acquired.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The underlying query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// Stored data violated a domain constraint.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
