use std::time::Duration;

use dioxus::prelude::*;
use services::{Answer, FlowPhase};
use storage::InMemoryStore;
use wordflip_core::model::Deck;

use super::test_harness::{deck_of, labels, setup_trainer_harness};
use crate::vm::START_PROMPT;

const SLOW_FLIP: Duration = Duration::from_secs(60);

#[tokio::test(flavor = "current_thread")]
async fn trainer_smoke_renders_start_prompt() {
    let store = InMemoryStore::with_full_deck(deck_of(&[("Hund", "dog")]), labels());
    let mut harness = setup_trainer_harness(store, SLOW_FLIP);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains(START_PROMPT), "missing prompt in {html}");
    assert!(html.contains("1 word left"), "missing counter in {html}");
    assert!(html.contains("Full word list"), "missing source in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn trainer_smoke_shows_front_after_answer() {
    let store = InMemoryStore::with_full_deck(deck_of(&[("Hund", "dog")]), labels());
    let mut harness = setup_trainer_harness(store, SLOW_FLIP);
    harness.rebuild();

    harness.answer(Answer::Correct);

    let html = harness.render();
    assert!(!html.contains(START_PROMPT), "prompt still shown in {html}");
    assert!(html.contains("German"), "missing source label in {html}");
    assert!(html.contains("Hund"), "missing word in {html}");
    assert!(!html.contains("dog"), "back revealed too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn trainer_smoke_flips_to_back_after_delay() {
    let store = InMemoryStore::with_full_deck(deck_of(&[("Hund", "dog")]), labels());
    let mut harness = setup_trainer_harness(store, Duration::from_millis(5));
    harness.rebuild();

    harness.answer(Answer::Incorrect);
    for _ in 0..20 {
        harness.drive_async().await;
        let flow = harness.handles.state().flow;
        let flipped = harness.dom.in_runtime(|| {
            flow.peek()
                .as_ref()
                .is_some_and(|flow| flow.phase() == FlowPhase::Back)
        });
        if flipped {
            break;
        }
    }

    let html = harness.render();
    assert!(html.contains("English"), "missing target label in {html}");
    assert!(html.contains("dog"), "missing translation in {html}");
    assert!(html.contains("card--back"), "missing back styling in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn trainer_smoke_rapid_answers_flip_only_the_newest_card() {
    let store = InMemoryStore::with_full_deck(
        deck_of(&[("Hund", "dog"), ("Katze", "cat"), ("Maus", "mouse")]),
        labels(),
    );
    let mut harness = setup_trainer_harness(store, Duration::from_millis(20));
    harness.rebuild();

    harness.answer(Answer::Incorrect);
    harness.answer(Answer::Incorrect);

    let flow = harness.handles.state().flow;
    let newest = harness.dom.in_runtime(|| {
        flow.peek()
            .as_ref()
            .and_then(|flow| flow.session().current().cloned())
    });
    let newest = newest.expect("a card is showing");

    for _ in 0..20 {
        harness.drive_async().await;
        let flipped = harness.dom.in_runtime(|| {
            flow.peek()
                .as_ref()
                .is_some_and(|flow| flow.phase() == FlowPhase::Back)
        });
        if flipped {
            break;
        }
    }

    let (phase, pending) = harness.dom.in_runtime(|| {
        flow.peek()
            .as_ref()
            .map(|flow| (flow.phase(), flow.has_pending_flip()))
            .expect("flow present")
    });
    assert_eq!(phase, FlowPhase::Back);
    assert!(!pending);

    let html = harness.render();
    assert_eq!(html.matches("card--back").count(), 1, "unexpected card in {html}");
    assert!(html.contains(newest.back()), "newest translation missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn trainer_smoke_shows_completion_when_deck_is_empty() {
    let store = InMemoryStore::new();
    store.set_resume(Deck::new(), labels());
    let mut harness = setup_trainer_harness(store, SLOW_FLIP);
    harness.rebuild();

    harness.answer(Answer::Correct);

    let html = harness.render();
    assert!(html.contains("All words learned!"), "missing completion in {html}");
    assert!(html.contains("Resumed from last session"), "missing source in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn trainer_close_persists_remaining_words() {
    let store = InMemoryStore::with_full_deck(
        deck_of(&[("Hund", "dog"), ("Katze", "cat")]),
        labels(),
    );
    let mut harness = setup_trainer_harness(store, SLOW_FLIP);
    harness.rebuild();

    harness.answer(Answer::Correct);
    harness.answer(Answer::Correct);

    let state = harness.handles.state();
    let result = harness.dom.in_runtime(|| state.close());
    assert!(matches!(result, Some(Ok(()))));
    let again = harness.dom.in_runtime(|| state.close());
    assert!(matches!(again, Some(Ok(()))));

    assert_eq!(harness.store.save_count(), 1);
    let (deck, _) = harness.store.resume().expect("resume saved");
    assert_eq!(deck.len(), 1);
}
