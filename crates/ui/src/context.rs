use std::sync::Arc;
use std::time::Duration;

use services::SessionController;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    /// Hand over the loaded session. Returns `None` once it has been taken.
    fn take_session(&self) -> Option<SessionController>;

    fn flip_delay(&self) -> Duration;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    flip_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            flip_delay: app.flip_delay(),
        }
    }

    /// One-shot: the session moves into the trainer state on first render.
    #[must_use]
    pub fn take_session(&self) -> Option<SessionController> {
        self.app.take_session()
    }

    #[must_use]
    pub fn flip_delay(&self) -> Duration {
        self.flip_delay
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
