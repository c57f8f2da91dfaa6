use dioxus::prelude::*;

use crate::views::QuizView;

const AI_NOTICE: &str = "Questions are generated by an AI model and may contain mistakes.";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Quizify" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! { QuizCrash { details: format!("{errors:?}") } },
            main { class: "app-main",
                QuizView {}
                footer { class: "quiz-footer", "{AI_NOTICE}" }
            }
        }
    }
}

/// Shown when a component fails to render; the session cannot be recovered in place.
#[component]
fn QuizCrash(details: String) -> Element {
    rsx! {
        section { class: "quiz-card quiz-crash", role: "alert",
            h1 { "Quizify stopped unexpectedly" }
            p { "Restart the app to begin a new quiz." }
            pre { "{details}" }
        }
    }
}
