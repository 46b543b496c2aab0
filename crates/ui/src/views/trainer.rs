use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::core::Task;
use dioxus::prelude::*;

use services::{Answer, CardFlow, FlipTicket, SessionError};

use crate::context::AppContext;
use crate::timer::TaskFlipTimer;
use crate::vm::{CardSide, CardVm, StatusVm};

/// Shared handles to the running flow.
///
/// `flow` is `None` only if the session could not be taken from the context.
#[derive(Clone, Copy)]
pub struct TrainerState {
    pub flow: Signal<Option<CardFlow<Task>>>,
    pub on_answer: Callback<Answer>,
    on_flip: Callback<FlipTicket>,
}

impl TrainerState {
    /// Cancel any pending flip and persist the deck. Only the first call writes.
    pub fn close(self) -> Option<Result<(), SessionError>> {
        let mut flow = self.flow;
        let mut timer = TaskFlipTimer::new(self.on_flip);
        let mut guard = flow.write();
        guard.as_mut().map(|flow| flow.close(&mut timer))
    }
}

/// Move the session out of `AppContext` into a signal and provide a
/// `TrainerState` to descendants.
pub fn use_provide_trainer() -> TrainerState {
    let ctx = use_context::<AppContext>();
    let flow = use_signal(move || {
        let flip_delay = ctx.flip_delay();
        ctx.take_session()
            .map(|session| CardFlow::new(session).with_flip_delay(flip_delay))
    });

    let on_flip = use_callback(move |ticket: FlipTicket| {
        let mut flow = flow;
        if let Some(flow) = flow.write().as_mut() {
            flow.flip(ticket);
        }
    });

    let on_answer = use_callback(move |answer: Answer| {
        let mut flow = flow;
        let mut timer = TaskFlipTimer::new(on_flip);
        if let Some(flow) = flow.write().as_mut() {
            flow.respond(answer, &mut timer);
        }
    });

    use_context_provider(|| TrainerState {
        flow,
        on_answer,
        on_flip,
    })
}

#[component]
pub fn TrainerView() -> Element {
    let state = use_context::<TrainerState>();
    let on_answer = state.on_answer;

    let on_key = use_callback(move |evt: KeyboardEvent| match evt.data.key() {
        Key::ArrowRight => {
            evt.prevent_default();
            on_answer.call(Answer::Correct);
        }
        Key::ArrowLeft => {
            evt.prevent_default();
            on_answer.call(Answer::Incorrect);
        }
        Key::Character(value) => match value.as_str() {
            "y" | "Y" => on_answer.call(Answer::Correct),
            "n" | "N" => on_answer.call(Answer::Incorrect),
            _ => {}
        },
        _ => {}
    });

    let flow_guard = state.flow.read();
    let Some(flow) = flow_guard.as_ref() else {
        return rsx! {
            div { class: "page trainer-page",
                p { class: "trainer-error", "No word deck is loaded." }
            }
        };
    };
    let card = CardVm::from_flow(flow);
    let status = StatusVm::from_flow(flow);
    let done = card.side == CardSide::Done;
    let card_class = card.class();
    let remaining_label = status.remaining_label();
    let progress_label = status.progress_label();
    let source_label = status.source_label();

    rsx! {
        div { class: "page trainer-page", id: "trainer-root", tabindex: "0", onkeydown: on_key,
            div { class: "{card_class}", id: "trainer-card",
                if !card.language.is_empty() {
                    p { class: "card__language", "{card.language}" }
                }
                p { class: "card__word", "{card.word}" }
                if done {
                    p { class: "card__summary", "{progress_label}" }
                }
            }
            div { class: "trainer-controls",
                button {
                    class: "trainer-btn trainer-btn--wrong",
                    id: "trainer-wrong",
                    r#type: "button",
                    title: "Not yet (←)",
                    disabled: done,
                    onclick: move |_| on_answer.call(Answer::Incorrect),
                    "✗"
                }
                button {
                    class: "trainer-btn trainer-btn--right",
                    id: "trainer-right",
                    r#type: "button",
                    title: "Learned (→)",
                    disabled: done,
                    onclick: move |_| on_answer.call(Answer::Correct),
                    "✓"
                }
            }
            footer { class: "trainer-footer",
                span { class: "trainer-footer__item", "{remaining_label}" }
                span { class: "trainer-footer__item", "{progress_label}" }
                span { class: "trainer-footer__item", "{source_label}" }
            }
        }
    }
}

/// Persists the deck when the window is closed.
///
/// Rendered only in the desktop shell; it relies on the desktop event loop.
#[component]
pub fn CloseGuard() -> Element {
    let state = use_context::<TrainerState>();

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } = event
        {
            persist_and_report(state);
        }
    });
    use_drop(move || persist_and_report(state));

    rsx! {}
}

fn persist_and_report(state: TrainerState) {
    match state.close() {
        Some(Ok(())) | None => {}
        Some(Err(err)) => {
            let location = state
                .flow
                .peek()
                .as_ref()
                .map(|flow| flow.session().resume_location())
                .unwrap_or_default();
            log::error!("failed to save progress to {location}: {err}");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Could not save progress")
                .set_description(format!(
                    "Your remaining words could not be written to {location}.\n\n{err}"
                ))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
}
