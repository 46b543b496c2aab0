use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use storage::{DeckOrigin, DeckStore, LoadedDeck};
use wordflip_core::model::{Deck, LanguageLabels, WordPair};

use crate::error::SessionError;

/// Counters for the running session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Cards drawn so far.
    pub drawn: u32,
    /// Cards marked learned (removed from the deck).
    pub learned: u32,
    /// Cards marked not learned (kept in the deck).
    pub missed: u32,
}

/// Owns the deck for one session and mediates every change to it.
///
/// The only mutation of the deck is `mark_learned`; `persist` writes whatever
/// is left through the store.
pub struct SessionController {
    store: Arc<dyn DeckStore>,
    deck: Deck,
    labels: LanguageLabels,
    origin: DeckOrigin,
    current: Option<WordPair>,
    stats: SessionStats,
    rng: StdRng,
}

impl SessionController {
    /// Load the deck through `store` and start a session on it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the deck cannot be found or parsed.
    pub fn load(store: Arc<dyn DeckStore>) -> Result<Self, SessionError> {
        let loaded = store.load()?;
        Ok(Self::new(store, loaded))
    }

    #[must_use]
    pub fn new(store: Arc<dyn DeckStore>, loaded: LoadedDeck) -> Self {
        Self {
            store,
            deck: loaded.deck,
            labels: loaded.labels,
            origin: loaded.origin,
            current: None,
            stats: SessionStats::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a seeded generator so card selection is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn labels(&self) -> &LanguageLabels {
        &self.labels
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn origin(&self) -> DeckOrigin {
        self.origin
    }

    /// Number of words not learned yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// The card on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&WordPair> {
        self.current.as_ref()
    }

    /// Where `persist` writes, for error messages.
    #[must_use]
    pub fn resume_location(&self) -> String {
        self.store.resume_location()
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Pick a card uniformly at random and make it current.
    ///
    /// The deck itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DeckExhausted` when no words are left; the
    /// current card is cleared in that case.
    pub fn draw_card(&mut self) -> Result<&WordPair, SessionError> {
        let len = self.deck.len();
        if len == 0 {
            self.current = None;
            return Err(SessionError::DeckExhausted);
        }
        let index = self.rng.random_range(0..len);
        let pair = self
            .deck
            .get_index(index)
            .cloned()
            .ok_or(SessionError::DeckExhausted)?;
        self.stats.drawn += 1;
        log::debug!("drew {:?} ({len} remaining)", pair.front());
        Ok(&*self.current.insert(pair))
    }

    /// Remove the current card from the deck.
    ///
    /// Returns the removed pair, or `None` when no card is current. The
    /// current card is cleared, so calling this twice removes at most one word.
    pub fn mark_learned(&mut self) -> Option<WordPair> {
        let current = self.current.take()?;
        let removed = self.deck.remove(current.front());
        if removed.is_some() {
            self.stats.learned += 1;
            log::debug!("learned {:?}, {} left", current.front(), self.deck.len());
        }
        removed
    }

    /// Keep the current card in the deck so it can come up again.
    ///
    /// Returns whether a card was current.
    pub fn mark_unlearned(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.stats.missed += 1;
        true
    }

    /// Write the remaining words and the language header to the resume file.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the write fails.
    pub fn persist(&self) -> Result<(), SessionError> {
        self.store.save(&self.deck, &self.labels)?;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
