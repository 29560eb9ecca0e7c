//! Shared error types for the engine crate.

use thiserror::Error;

use quiz_core::model::{CatalogError, SummaryError};

/// Errors emitted by `QuizEngine`.
///
/// After a successful configuration the quiz operations are total; the only
/// runtime variants guard against calling into an engine whose session was
/// never started.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz session has been started")]
    NotStarted,

    #[error("quiz session already completed")]
    Completed,

    #[error(transparent)]
    Config(#[from] CatalogError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}
