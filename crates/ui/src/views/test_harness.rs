use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Answer, SessionController};
use storage::{DeckStore, InMemoryStore};
use wordflip_core::model::{Deck, LanguageLabels, WordPair};

use crate::context::{UiApp, build_app_context};
use crate::views::{TrainerState, TrainerView, use_provide_trainer};

struct TestApp {
    session: Mutex<Option<SessionController>>,
    flip_delay: Duration,
}

impl UiApp for TestApp {
    fn take_session(&self) -> Option<SessionController> {
        self.session.lock().ok().and_then(|mut guard| guard.take())
    }

    fn flip_delay(&self) -> Duration {
        self.flip_delay
    }
}

#[derive(Clone, Default)]
pub struct TrainerTestHandles {
    state: Rc<RefCell<Option<TrainerState>>>,
}

impl TrainerTestHandles {
    pub fn state(&self) -> TrainerState {
        (*self.state.borrow()).expect("trainer state registered")
    }
}

#[derive(Props, Clone)]
struct TrainerHarnessProps {
    app: Arc<TestApp>,
    handles: TrainerTestHandles,
}

impl PartialEq for TrainerHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TrainerHarnessRoot(props: TrainerHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let state = use_provide_trainer();
    *props.handles.state.borrow_mut() = Some(state);
    rsx! { TrainerView {} }
}

pub struct TrainerHarness {
    pub dom: VirtualDom,
    pub store: InMemoryStore,
    pub handles: TrainerTestHandles,
}

impl TrainerHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn answer(&mut self, answer: Answer) {
        let on_answer = self.handles.state().on_answer;
        self.dom.in_runtime(|| on_answer.call(answer));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn labels() -> LanguageLabels {
    LanguageLabels::new("German", "English").expect("labels")
}

pub fn deck_of(words: &[(&str, &str)]) -> Deck {
    words
        .iter()
        .map(|(front, back)| WordPair::new(*front, *back).expect("pair"))
        .collect()
}

pub fn setup_trainer_harness(store: InMemoryStore, flip_delay: Duration) -> TrainerHarness {
    let dyn_store: Arc<dyn DeckStore> = Arc::new(store.clone());
    let session = SessionController::load(dyn_store)
        .expect("load session")
        .with_seed(3);
    let app = Arc::new(TestApp {
        session: Mutex::new(Some(session)),
        flip_delay,
    });
    let handles = TrainerTestHandles::default();

    let dom = VirtualDom::new_with_props(
        TrainerHarnessRoot,
        TrainerHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    TrainerHarness {
        dom,
        store,
        handles,
    }
}
