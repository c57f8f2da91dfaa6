use dioxus::prelude::*;

use crate::vm::{ErrorBannerVm, QuestionVm, ResultsVm, SetupFormErrors};

const SELECT_ANSWER_WARNING: &str = "Please select an answer to continue.";

#[component]
pub fn SetupForm(
    field: String,
    topic: String,
    errors: SetupFormErrors,
    loading: bool,
    on_field_input: EventHandler<String>,
    on_topic_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let submit_label = if loading {
        "Generating Quiz..."
    } else {
        "Start Quiz"
    };

    rsx! {
        section { class: "quiz-card quiz-setup",
            h1 { "Quizify" }
            p { class: "quiz-subtitle", "Enter a field and topic to generate your quiz!" }
            div { class: "quiz-field",
                label { r#for: "quiz-field-input", "Field" }
                input {
                    id: "quiz-field-input",
                    r#type: "text",
                    placeholder: "e.g. History",
                    value: "{field}",
                    disabled: loading,
                    oninput: move |evt| on_field_input.call(evt.value()),
                }
                if let Some(message) = errors.field.as_ref() {
                    p { class: "quiz-field-error", "{message}" }
                }
            }
            div { class: "quiz-field",
                label { r#for: "quiz-topic-input", "Topic" }
                input {
                    id: "quiz-topic-input",
                    r#type: "text",
                    placeholder: "e.g. World War II",
                    value: "{topic}",
                    disabled: loading,
                    oninput: move |evt| on_topic_input.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && !loading {
                            evt.prevent_default();
                            on_submit.call(());
                        }
                    },
                }
                if let Some(message) = errors.topic.as_ref() {
                    p { class: "quiz-field-error", "{message}" }
                }
            }
            button {
                r#type: "button",
                class: "quiz-primary",
                id: "quiz-start",
                disabled: loading,
                onclick: move |_| on_submit.call(()),
                "{submit_label}"
            }
        }
    }
}

/// One question with its options. Key it by question index so the selection resets.
#[component]
pub fn QuestionCard(question: QuestionVm, on_answer: EventHandler<String>) -> Element {
    let mut selected = use_signal(|| None::<usize>);
    let mut missing = use_signal(|| false);
    let options = question.options.clone();

    rsx! {
        section { class: "quiz-card quiz-question",
            div { class: "quiz-question-header",
                h2 { "{question.heading}" }
                span { class: "quiz-progress", "{question.progress_label}" }
            }
            p { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-options", role: "radiogroup",
                for (idx, option) in question.options.iter().enumerate() {
                    label {
                        key: "{idx}",
                        class: if selected() == Some(idx) { "quiz-option quiz-option--selected" } else { "quiz-option" },
                        input {
                            r#type: "radio",
                            name: "quiz-option",
                            checked: selected() == Some(idx),
                            onchange: move |_| {
                                selected.set(Some(idx));
                                missing.set(false);
                            },
                        }
                        span { "{option}" }
                    }
                }
            }
            if missing() {
                p { class: "quiz-warning", "{SELECT_ANSWER_WARNING}" }
            }
            button {
                r#type: "button",
                class: "quiz-primary",
                id: "quiz-submit",
                onclick: move |_| {
                    match selected().and_then(|idx| options.get(idx).cloned()) {
                        Some(answer) => on_answer.call(answer),
                        None => missing.set(true),
                    }
                },
                "{question.submit_label}"
            }
        }
    }
}

#[component]
pub fn ResultsCard(results: ResultsVm, on_play_again: EventHandler<()>) -> Element {
    rsx! {
        section { class: "quiz-card quiz-results",
            h2 { "Quiz Completed!" }
            p { class: "quiz-score",
                "{results.score_label} "
                span { class: "quiz-percentage", "{results.percentage_label}" }
            }
            p { class: "quiz-message", "{results.message}" }
            p { class: "quiz-elapsed", "{results.elapsed_label}" }
            button {
                r#type: "button",
                class: "quiz-primary",
                id: "quiz-play-again",
                onclick: move |_| on_play_again.call(()),
                "Play Again"
            }
        }
    }
}

#[component]
pub fn ErrorBanner(banner: ErrorBannerVm) -> Element {
    let class = if banner.service_issue {
        "quiz-banner quiz-banner--service"
    } else {
        "quiz-banner"
    };
    rsx! {
        div { class: "{class}", role: "alert",
            h3 { "{banner.title}" }
            p { "{banner.message}" }
        }
    }
}
