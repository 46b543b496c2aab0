use dioxus::prelude::*;

use crate::views::{CloseGuard, TrainerView, use_provide_trainer};

#[component]
pub fn App() -> Element {
    use_provide_trainer();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Flash Cards" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                TrainerView {}
            }
        }
        CloseGuard {}
    }
}
