use dioxus::prelude::*;
use services::{QuizSession, SessionError};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::vm::{QuizPageVm, QuizScreenVm, SetupFormErrors, map_quiz_page, validate_setup_form};

use super::components::{ErrorBanner, QuestionCard, ResultsCard, SetupForm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start { field: String, topic: String },
    Answer(String),
    PlayAgain,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let generator = ctx.quiz_generator();

    let session = use_signal(move || QuizSession::new(clock));
    let mut field_text = use_signal(String::new);
    let mut topic_text = use_signal(String::new);
    let form_errors = use_signal(SetupFormErrors::default);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let mut form_errors = form_errors;

        match intent {
            QuizIntent::Start { field, topic } => {
                if let Err(errors) = validate_setup_form(&field, &topic) {
                    form_errors.set(errors);
                    return;
                }
                form_errors.set(SetupFormErrors::default());

                let pending = match session.write().begin_start(&field, &topic) {
                    Ok(pending) => pending,
                    Err(err) => {
                        warn!(error = %err, "quiz start rejected");
                        return;
                    }
                };

                let generator = generator.clone();
                spawn(async move {
                    let result = generator.generate(pending.request()).await;
                    match session.write().finish_start(&pending, result) {
                        Ok(_) => {}
                        // The user left Loading before this request finished.
                        Err(SessionError::StaleResult | SessionError::InvalidPhase { .. }) => {
                            debug!("discarded generation result for an abandoned request");
                        }
                        Err(err) => warn!(error = %err, "quiz generation result dropped"),
                    }
                });
            }
            QuizIntent::Answer(selected) => {
                if let Err(err) = session.write().answer(&selected) {
                    warn!(error = %err, "answer rejected");
                }
            }
            QuizIntent::PlayAgain => {
                session.write().play_again();
                field_text.set(String::new());
                topic_text.set(String::new());
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let QuizPageVm { banner, screen } = map_quiz_page(session.read().state());

    rsx! {
        if let Some(banner) = banner {
            ErrorBanner { banner }
        }
        match screen {
            QuizScreenVm::Setup { loading } => rsx! {
                SetupForm {
                    field: field_text(),
                    topic: topic_text(),
                    errors: form_errors(),
                    loading,
                    on_field_input: move |value| field_text.set(value),
                    on_topic_input: move |value| topic_text.set(value),
                    on_submit: move |()| {
                        dispatch_intent.call(QuizIntent::Start {
                            field: field_text(),
                            topic: topic_text(),
                        });
                    },
                }
            },
            QuizScreenVm::Question(question) => rsx! {
                QuestionCard {
                    key: "{question.index}",
                    question,
                    on_answer: move |answer| dispatch_intent.call(QuizIntent::Answer(answer)),
                }
            },
            QuizScreenVm::Results(results) => rsx! {
                ResultsCard {
                    results,
                    on_play_again: move |()| dispatch_intent.call(QuizIntent::PlayAgain),
                }
            },
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, session: Signal<QuizSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
