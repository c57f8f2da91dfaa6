use serde_json::Value;

use quizify_core::model::{QUIZ_LENGTH, Quiz, QuizError, QuizQuestion, QuizQuestionDraft};

use crate::error::{GenerationError, SchemaViolation};

/// Validate raw model output text against the quiz schema.
///
/// Tolerates a surrounding Markdown code fence, which some models emit even in JSON mode.
///
/// # Errors
///
/// Returns `GenerationError::EmptyResult` when `questions` is an empty array and
/// `GenerationError::MalformedOutput` for every other schema violation.
pub fn validate_quiz_output(raw: &str) -> Result<Quiz, GenerationError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(SchemaViolation::EmptyContent.into());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|err| SchemaViolation::InvalidJson(err.to_string()))?;
    validate_quiz_value(value)
}

/// Validate an already-parsed JSON value against the quiz schema.
///
/// # Errors
///
/// See [`validate_quiz_output`].
pub fn validate_quiz_value(value: Value) -> Result<Quiz, GenerationError> {
    let Value::Object(mut object) = value else {
        return Err(SchemaViolation::NotAnObject.into());
    };
    let questions = object
        .remove("questions")
        .ok_or(SchemaViolation::MissingQuestions)?;
    let Value::Array(items) = questions else {
        return Err(SchemaViolation::QuestionsNotArray.into());
    };

    // Checked ahead of the arity rule so callers can tell "nothing" from "wrong amount".
    if items.is_empty() {
        return Err(GenerationError::EmptyResult);
    }
    if items.len() != QUIZ_LENGTH {
        return Err(SchemaViolation::WrongCount {
            expected: QUIZ_LENGTH,
            actual: items.len(),
        }
        .into());
    }

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_question(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Quiz::new(questions).map_err(|err| match err {
        QuizError::Empty => GenerationError::EmptyResult,
        QuizError::WrongLength { len } => SchemaViolation::WrongCount {
            expected: QUIZ_LENGTH,
            actual: len,
        }
        .into(),
        _ => GenerationError::Unknown {
            message: err.to_string(),
        },
    })
}

fn parse_question(index: usize, item: Value) -> Result<QuizQuestion, SchemaViolation> {
    let draft: QuizQuestionDraft =
        serde_json::from_value(item).map_err(|err| SchemaViolation::QuestionShape {
            index,
            reason: err.to_string(),
        })?;
    draft
        .validate()
        .map_err(|source| SchemaViolation::InvalidQuestion { index, source })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}
