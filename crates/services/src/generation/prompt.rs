use quizify_core::model::{QUIZ_LENGTH, QuizRequest};

const SYSTEM_PROMPT: &str = "You are a quiz generator. You reply with a single JSON object and nothing else.";

/// Prompt text sent to the model for one quiz request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    system: &'static str,
    user: String,
}

impl QuizPrompt {
    /// Build the prompt for a request. Field and topic are embedded verbatim.
    #[must_use]
    pub fn for_request(request: &QuizRequest) -> Self {
        let user = format!(
            "Generate a quiz with {QUIZ_LENGTH} diverse and relevant questions based on the given field and topic.\n\
             \n\
             Field: {field}\n\
             Topic: {topic}\n\
             \n\
             Each question must have multiple choice options with exactly one correct answer, \
             and the questions should cover different aspects of the topic.\n\
             \n\
             Respond with a JSON object with a \"questions\" field, which is an array of exactly \
             {QUIZ_LENGTH} quiz questions. Each quiz question has the following fields:\n\
             - question: the quiz question.\n\
             - options: an array of multiple choice options.\n\
             - answer: the correct answer, copied exactly from one of the options.\n",
            field = request.field(),
            topic = request.topic(),
        );
        Self {
            system: SYSTEM_PROMPT,
            user,
        }
    }

    #[must_use]
    pub fn system(&self) -> &str {
        self.system
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}
