mod quiz;

pub use quiz::{ErrorBanner, QuestionCard, QuizIntent, QuizView, ResultsCard, SetupForm};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
