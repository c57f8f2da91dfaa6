use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizOutcomeError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Performance band shown alongside the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeTier {
    Master,
    Strong,
    Fair,
    Practice,
}

impl OutcomeTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Master,
            60..=79 => Self::Strong,
            40..=59 => Self::Fair,
            _ => Self::Practice,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Master => "Excellent work! You're a Quiz Master!",
            Self::Strong => "Great job! You know your stuff!",
            Self::Fair => "Good effort! Keep learning and try again!",
            Self::Practice => "Keep practicing! You'll get there!",
        }
    }
}

/// Final result of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    score: u32,
    total: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizOutcome {
    /// # Errors
    ///
    /// Returns `QuizOutcomeError::ScoreExceedsTotal` if `score > total` and
    /// `QuizOutcomeError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizOutcomeError> {
        if completed_at < started_at {
            return Err(QuizOutcomeError::InvalidTimeRange);
        }
        if score > total {
            return Err(QuizOutcomeError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Score as a whole percentage, rounded half away from zero. Zero when `total` is zero.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // (score * 200 + total) / (2 * total) rounds half up for non-negative integers.
        (self.score * 200 + self.total) / (2 * self.total)
    }

    #[must_use]
    pub fn tier(&self) -> OutcomeTier {
        OutcomeTier::from_percentage(self.percentage())
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier().message()
    }
}
