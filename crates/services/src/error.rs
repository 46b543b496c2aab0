//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by the session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("every word in the deck has been learned")]
    DeckExhausted,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
