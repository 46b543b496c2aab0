//! Two-column CSV deck files.
//!
//! The full deck is read-only. The resume file holds the leftovers of the last
//! session and is preferred on load whenever it exists and is non-empty.

use std::fs;
use std::path::{Path, PathBuf};

use wordflip_core::model::{Deck, LanguageLabels, WordPair};

use crate::repository::{DeckOrigin, DeckStore, LoadedDeck, StorageError};

/// Default location of the complete word list.
pub const DEFAULT_FULL_DECK: &str = "data/german_words.csv";
/// Default location of the leftovers file.
pub const DEFAULT_RESUME: &str = "data/words_to_learn.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDeckFiles {
    full_deck: PathBuf,
    resume: PathBuf,
}

impl Default for CsvDeckFiles {
    fn default() -> Self {
        Self::new(DEFAULT_FULL_DECK, DEFAULT_RESUME)
    }
}

impl CsvDeckFiles {
    #[must_use]
    pub fn new(full_deck: impl Into<PathBuf>, resume: impl Into<PathBuf>) -> Self {
        Self {
            full_deck: full_deck.into(),
            resume: resume.into(),
        }
    }

    #[must_use]
    pub fn full_deck(&self) -> &Path {
        &self.full_deck
    }

    #[must_use]
    pub fn resume(&self) -> &Path {
        &self.resume
    }

    /// Picks the file a session should start from.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the resume file is absent or empty
    /// and the full deck does not exist.
    pub fn select_source(&self) -> Result<(&Path, DeckOrigin), StorageError> {
        let resume_usable = fs::metadata(&self.resume)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false);
        if resume_usable {
            return Ok((&self.resume, DeckOrigin::Resume));
        }
        if self.full_deck.is_file() {
            return Ok((&self.full_deck, DeckOrigin::FullDeck));
        }
        Err(StorageError::NotFound {
            full_deck: self.full_deck.clone(),
            resume: self.resume.clone(),
        })
    }
}

impl DeckStore for CsvDeckFiles {
    fn load(&self) -> Result<LoadedDeck, StorageError> {
        let (path, origin) = self.select_source()?;
        let (deck, labels) = read_deck(path)?;
        log::info!(
            "loaded {} word(s) from {} ({origin:?})",
            deck.len(),
            path.display()
        );
        Ok(LoadedDeck {
            deck,
            labels,
            origin,
        })
    }

    fn save(&self, deck: &Deck, labels: &LanguageLabels) -> Result<(), StorageError> {
        write_deck(&self.resume, deck, labels)?;
        log::info!(
            "saved {} remaining word(s) to {}",
            deck.len(),
            self.resume.display()
        );
        Ok(())
    }

    fn resume_location(&self) -> String {
        self.resume.display().to_string()
    }
}

/// Reads a deck with a two-name header row.
///
/// # Errors
///
/// Returns `StorageError::Parse` for a missing header, a wrong column count,
/// invalid UTF-8 or a blank cell, and `StorageError::Io` if the file cannot be
/// read.
pub fn read_deck(path: &Path) -> Result<(Deck, LanguageLabels), StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;

    let headers = reader.headers().map_err(|err| csv_error(path, err))?.clone();
    if headers.len() != 2 {
        return Err(StorageError::Parse {
            path: path.to_path_buf(),
            line: 1,
            reason: if headers.is_empty() {
                "missing header row".to_string()
            } else {
                format!("expected 2 columns in header, found {}", headers.len())
            },
        });
    }
    let labels =
        LanguageLabels::new(&headers[0], &headers[1]).map_err(|err| blank_cell(path, 1, err))?;

    let mut deck = Deck::new();
    for result in reader.records() {
        let record = result.map_err(|err| csv_error(path, err))?;
        let line = record.position().map_or(0, csv::Position::line);
        let (front, back): (String, String) =
            record.deserialize(None).map_err(|err| csv_error(path, err))?;
        let pair = WordPair::new(front, back).map_err(|err| blank_cell(path, line, err))?;
        if let Some(previous) = deck.insert(pair) {
            log::warn!(
                "{} line {line}: duplicate word {:?} replaces earlier translation",
                path.display(),
                previous.front()
            );
        }
    }

    Ok((deck, labels))
}

/// Replaces `path` with the header and every pair of `deck`.
///
/// The header is written even for an empty deck. Missing parent directories
/// are created.
///
/// # Errors
///
/// Returns `StorageError::Io` on any write failure.
pub fn write_deck(path: &Path, deck: &Deck, labels: &LanguageLabels) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;
    writer
        .write_record([labels.source(), labels.target()])
        .map_err(|err| csv_error(path, err))?;
    for pair in deck {
        writer.serialize(pair).map_err(|err| csv_error(path, err))?;
    }
    writer.flush().map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn blank_cell(path: &Path, line: u64, err: impl Into<wordflip_core::Error>) -> StorageError {
    StorageError::Parse {
        path: path.to_path_buf(),
        line,
        reason: err.into().to_string(),
    }
}

fn csv_error(path: &Path, err: csv::Error) -> StorageError {
    let line = err.position().map_or(0, csv::Position::line);
    let path = path.to_path_buf();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StorageError::Io { path, source },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => StorageError::Parse {
            path,
            line,
            reason: format!("expected {expected_len} columns, found {len}"),
        },
        csv::ErrorKind::Utf8 { err, .. } => StorageError::Parse {
            path,
            line,
            reason: format!("invalid UTF-8: {err}"),
        },
        other => StorageError::Parse {
            path,
            line,
            reason: format!("{other:?}"),
        },
    }
}
