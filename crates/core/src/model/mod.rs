mod outcome;
mod question;
mod quiz;
mod request;

pub use outcome::{OutcomeTier, QuizOutcome, QuizOutcomeError};
pub use question::{MIN_OPTIONS, QuizQuestion, QuizQuestionDraft, QuizQuestionError};
pub use quiz::{QUIZ_LENGTH, Quiz, QuizError};
pub use request::{MIN_INPUT_CHARS, QuizRequest, QuizRequestError};
