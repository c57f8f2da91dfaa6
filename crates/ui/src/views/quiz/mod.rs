mod components;
mod view;

pub use components::{ErrorBanner, QuestionCard, ResultsCard, SetupForm};
pub use view::{QuizIntent, QuizView};

#[cfg(test)]
pub(crate) use view::QuizTestHandles;
