/// Domain errors surfaced by context resolution.
///
/// Malformed reference tokens, unknown activity types and stale targets are
/// never errors; they are absorbed where they occur. Only infrastructure
/// failures and caller mistakes reach this type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The search index or a lookup collaborator could not be reached.
    #[error("Search unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
