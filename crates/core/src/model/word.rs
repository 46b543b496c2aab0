use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordPairError {
    #[error("word cannot be empty")]
    EmptyFront,

    #[error("translation cannot be empty")]
    EmptyBack,
}

/// A source-language word and its translation.
///
/// `front` is the key shown first; `back` is revealed when the card flips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    front: String,
    back: String,
}

impl WordPair {
    /// Creates a pair, rejecting blank sides.
    ///
    /// Text is kept verbatim; only the emptiness check ignores whitespace.
    ///
    /// # Errors
    ///
    /// Returns `WordPairError::EmptyFront` or `WordPairError::EmptyBack` for blank input.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Result<Self, WordPairError> {
        let front = front.into();
        let back = back.into();
        if front.trim().is_empty() {
            return Err(WordPairError::EmptyFront);
        }
        if back.trim().is_empty() {
            return Err(WordPairError::EmptyBack);
        }
        Ok(Self { front, back })
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_sides() {
        assert_eq!(WordPair::new("  ", "dog"), Err(WordPairError::EmptyFront));
        assert_eq!(WordPair::new("Hund", ""), Err(WordPairError::EmptyBack));
    }

    #[test]
    fn keeps_text_verbatim() {
        let pair = WordPair::new(" der Hund", "the dog ").unwrap();
        assert_eq!(pair.front(), " der Hund");
        assert_eq!(pair.back(), "the dog ");
    }
}
