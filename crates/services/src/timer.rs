use std::time::Duration;

/// Delay between showing a card's front and revealing its back.
pub const DEFAULT_FLIP_DELAY: Duration = Duration::from_secs(3);

/// Identifies the card a scheduled flip belongs to.
///
/// Each draw bumps the generation, so a ticket from an earlier card never
/// matches the card on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipTicket(u64);

impl FlipTicket {
    #[must_use]
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Fire-once, cancelable timer provided by the host event loop.
///
/// `schedule` arranges for the host to call `CardFlow::flip(ticket)` after
/// `delay`. After `cancel(handle)` that call must not happen.
pub trait FlipTimer {
    type Handle;

    fn schedule(&mut self, delay: Duration, ticket: FlipTicket) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}
