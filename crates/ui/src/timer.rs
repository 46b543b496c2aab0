use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use services::{FlipTicket, FlipTimer};

/// Flip timer backed by a Dioxus task.
///
/// The task sleeps on the tokio timer and then invokes `on_fire`. Canceling the
/// task drops the sleep, so a canceled flip never reaches the callback.
#[derive(Clone, Copy)]
pub struct TaskFlipTimer {
    on_fire: Callback<FlipTicket>,
}

impl TaskFlipTimer {
    #[must_use]
    pub fn new(on_fire: Callback<FlipTicket>) -> Self {
        Self { on_fire }
    }
}

impl FlipTimer for TaskFlipTimer {
    type Handle = Task;

    fn schedule(&mut self, delay: Duration, ticket: FlipTicket) -> Task {
        let on_fire = self.on_fire;
        spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire.call(ticket);
        })
    }

    fn cancel(&mut self, handle: Task) {
        handle.cancel();
    }
}
