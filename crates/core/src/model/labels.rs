use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LabelsError {
    #[error("source language label cannot be empty")]
    EmptySource,

    #[error("target language label cannot be empty")]
    EmptyTarget,
}

/// Names of the two languages, taken from the deck file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLabels {
    source: String,
    target: String,
}

impl LanguageLabels {
    /// # Errors
    ///
    /// Returns `LabelsError` if either label is blank.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Result<Self, LabelsError> {
        let source = source.into();
        let target = target.into();
        if source.trim().is_empty() {
            return Err(LabelsError::EmptySource);
        }
        if target.trim().is_empty() {
            return Err(LabelsError::EmptyTarget);
        }
        Ok(Self { source, target })
    }

    /// Language of the card front.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Language of the card back.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}
