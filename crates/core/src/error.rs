use thiserror::Error;

/// Failures surfaced by the data-access collaborator.
///
/// These never reach the user as raw faults; the router answers with a
/// fixed fallback utterance instead.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query execution failed: {0}")]
    Execution(String),

    #[error("data backend unavailable: {0}")]
    Unavailable(String),
}
