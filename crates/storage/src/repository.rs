use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use wordflip_core::model::{Deck, LanguageLabels};

use crate::csv_files::CsvDeckFiles;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error(
        "no deck file found (looked for {} and {})",
        .full_deck.display(),
        .resume.display()
    )]
    NotFound { full_deck: PathBuf, resume: PathBuf },

    #[error("malformed deck file {} (line {line}): {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which file a deck was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOrigin {
    /// The complete word list.
    FullDeck,
    /// Leftovers persisted by an earlier session.
    Resume,
}

/// A deck plus the header it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDeck {
    pub deck: Deck,
    pub labels: LanguageLabels,
    pub origin: DeckOrigin,
}

/// Storage contract for the word deck.
///
/// `load` prefers the resume snapshot; `save` always replaces the resume
/// snapshot and never touches the full deck.
pub trait DeckStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no deck exists, or parse/io errors.
    fn load(&self) -> Result<LoadedDeck, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Io` if the resume snapshot cannot be written.
    fn save(&self, deck: &Deck, labels: &LanguageLabels) -> Result<(), StorageError>;

    /// Human-readable location of the resume snapshot, for error reporting.
    fn resume_location(&self) -> String;
}

/// Aggregates the storage adapter behind a trait object.
#[derive(Clone)]
pub struct Storage {
    pub decks: Arc<dyn DeckStore>,
}

impl Storage {
    #[must_use]
    pub fn csv(files: CsvDeckFiles) -> Self {
        Self {
            decks: Arc::new(files),
        }
    }
}

//
// ─── IN-MEMORY STORE ───────────────────────────────────────────────────────────
//

#[derive(Debug, Default)]
struct MemoryState {
    full: Option<(Deck, LanguageLabels)>,
    resume: Option<(Deck, LanguageLabels)>,
    saves: usize,
    fail_saves: bool,
}

/// In-memory `DeckStore` for tests and prototyping.
///
/// Clones share state, so a test can keep one handle and inspect what the
/// code under test saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a full deck and no resume snapshot.
    #[must_use]
    pub fn with_full_deck(deck: Deck, labels: LanguageLabels) -> Self {
        let store = Self::new();
        store.lock().full = Some((deck, labels));
        store
    }

    pub fn set_resume(&self, deck: Deck, labels: LanguageLabels) {
        self.lock().resume = Some((deck, labels));
    }

    /// Make every following `save` fail with an io error.
    pub fn fail_saves(&self) {
        self.lock().fail_saves = true;
    }

    #[must_use]
    pub fn resume(&self) -> Option<(Deck, LanguageLabels)> {
        self.lock().resume.clone()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // Every update is a single assignment, so poisoned state is still consistent.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl DeckStore for InMemoryStore {
    fn load(&self) -> Result<LoadedDeck, StorageError> {
        let guard = self.lock();
        if let Some((deck, labels)) = guard.resume.clone() {
            return Ok(LoadedDeck {
                deck,
                labels,
                origin: DeckOrigin::Resume,
            });
        }
        guard
            .full
            .clone()
            .map(|(deck, labels)| LoadedDeck {
                deck,
                labels,
                origin: DeckOrigin::FullDeck,
            })
            .ok_or_else(|| StorageError::NotFound {
                full_deck: PathBuf::from("memory:full"),
                resume: PathBuf::from("memory:resume"),
            })
    }

    fn save(&self, deck: &Deck, labels: &LanguageLabels) -> Result<(), StorageError> {
        let mut guard = self.lock();
        if guard.fail_saves {
            return Err(StorageError::Io {
                path: PathBuf::from("memory:resume"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        guard.resume = Some((deck.clone(), labels.clone()));
        guard.saves += 1;
        Ok(())
    }

    fn resume_location(&self) -> String {
        "memory:resume".to_string()
    }
}
