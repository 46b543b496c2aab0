use thiserror::Error;

use crate::model::{LabelsError, WordPairError};

/// Validation failures for deck entries and header labels.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    WordPair(#[from] WordPairError),
    #[error(transparent)]
    Labels(#[from] LabelsError),
}
