//! Presentation state machine for one flip card.
//!
//! `Idle` shows the start prompt. Either answer draws a card and enters
//! `Front`; a single scheduled flip moves it to `Back`. Every answer cancels the
//! pending flip before scheduling the next one, so at most one flip is in
//! flight and it always belongs to the card on screen. `Exhausted` and
//! `Closed` are terminal and ignore input.

use std::time::Duration;

use crate::error::SessionError;
use crate::session::SessionController;
use crate::timer::{DEFAULT_FLIP_DELAY, FlipTicket, FlipTimer};

/// The user's verdict on the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Known: remove from the deck.
    Correct,
    /// Not known yet: keep in the deck.
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    Front,
    Back,
    Exhausted,
    Closed,
}

/// What the card area should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace<'a> {
    Prompt,
    Front { language: &'a str, word: &'a str },
    Back { language: &'a str, word: &'a str },
    Exhausted,
    Closed,
}

pub struct CardFlow<H> {
    session: SessionController,
    phase: FlowPhase,
    pending: Option<H>,
    generation: u64,
    flip_delay: Duration,
}

impl<H> CardFlow<H> {
    #[must_use]
    pub fn new(session: SessionController) -> Self {
        Self {
            session,
            phase: FlowPhase::Idle,
            pending: None,
            generation: 0,
            flip_delay: DEFAULT_FLIP_DELAY,
        }
    }

    #[must_use]
    pub fn with_flip_delay(mut self, flip_delay: Duration) -> Self {
        self.flip_delay = flip_delay;
        self
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    #[must_use]
    pub fn flip_delay(&self) -> Duration {
        self.flip_delay
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase == FlowPhase::Closed
    }

    #[must_use]
    pub fn has_pending_flip(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn face(&self) -> CardFace<'_> {
        let labels = self.session.labels();
        match (self.phase, self.session.current()) {
            (FlowPhase::Front, Some(card)) => CardFace::Front {
                language: labels.source(),
                word: card.front(),
            },
            (FlowPhase::Back, Some(card)) => CardFace::Back {
                language: labels.target(),
                word: card.back(),
            },
            (FlowPhase::Exhausted, _) => CardFace::Exhausted,
            (FlowPhase::Closed, _) => CardFace::Closed,
            _ => CardFace::Prompt,
        }
    }

    /// Apply `answer` to the current card and show the next one.
    ///
    /// From `Idle` there is no current card, so the answer only starts the
    /// session. Input is ignored once the deck is exhausted or the flow is
    /// closed.
    pub fn respond<T>(&mut self, answer: Answer, timer: &mut T) -> FlowPhase
    where
        T: FlipTimer<Handle = H>,
    {
        if matches!(self.phase, FlowPhase::Exhausted | FlowPhase::Closed) {
            return self.phase;
        }

        self.cancel_pending(timer);
        match answer {
            Answer::Correct => {
                self.session.mark_learned();
            }
            Answer::Incorrect => {
                self.session.mark_unlearned();
            }
        }

        self.generation += 1;
        if self.session.draw_card().is_ok() {
            self.phase = FlowPhase::Front;
            let ticket = FlipTicket::new(self.generation);
            self.pending = Some(timer.schedule(self.flip_delay, ticket));
        } else {
            log::info!(
                "deck exhausted after {} learned word(s)",
                self.session.stats().learned
            );
            self.phase = FlowPhase::Exhausted;
        }
        self.phase
    }

    /// Reveal the back of the card the ticket was issued for.
    ///
    /// Returns `false` and leaves the display alone for stale tickets.
    pub fn flip(&mut self, ticket: FlipTicket) -> bool {
        if ticket.generation() != self.generation {
            log::warn!(
                "ignoring stale flip for card #{} (showing #{})",
                ticket.generation(),
                self.generation
            );
            return false;
        }
        if self.phase != FlowPhase::Front {
            return false;
        }
        self.pending = None;
        self.phase = FlowPhase::Back;
        log::debug!("flipped card #{}", self.generation);
        true
    }

    /// End the session: cancel the pending flip and persist the deck.
    ///
    /// Only the first call writes; later calls return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the first persist fails.
    pub fn close<T>(&mut self, timer: &mut T) -> Result<(), SessionError>
    where
        T: FlipTimer<Handle = H>,
    {
        if self.phase == FlowPhase::Closed {
            return Ok(());
        }
        self.phase = FlowPhase::Closed;
        self.cancel_pending(timer);
        self.session.persist()
    }

    fn cancel_pending<T>(&mut self, timer: &mut T)
    where
        T: FlipTimer<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            timer.cancel(handle);
        }
    }
}
