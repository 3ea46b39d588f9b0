//! Answer source port for clarifying questions.
//!
//! The use case asks each clarifying question through an [`AnswerSource`].
//! A failure for one question is not fatal: the question is skipped.
//!
//! # Built-in Implementations
//!
//! - [`NoAnswers`] - Fails every question, so the run refines without answers
//! - [`ScriptedAnswers`] - Replays a fixed list of replies
//!
//! For interactive use, see `InteractiveAnswerSource` in the presentation layer.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokinfo_domain::ClarifyingQuestion;

/// Error type for answer collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The input channel is closed (e.g. EOF on stdin).
    Closed,
    /// Input/output error while reading.
    IoError(String),
}

impl std::fmt::Display for AnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerError::Closed => write!(f, "Input closed"),
            AnswerError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AnswerError {}

/// Port for collecting one answer per clarifying question.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Ask question `index` (zero-based) of `total` and return the raw reply.
    ///
    /// Blocks until a reply is available. Trimming is left to the caller.
    async fn answer(
        &self,
        index: usize,
        total: usize,
        question: &ClarifyingQuestion,
    ) -> Result<String, AnswerError>;
}

/// Answer source that never has an answer.
pub struct NoAnswers;

#[async_trait]
impl AnswerSource for NoAnswers {
    async fn answer(
        &self,
        _index: usize,
        _total: usize,
        _question: &ClarifyingQuestion,
    ) -> Result<String, AnswerError> {
        Err(AnswerError::Closed)
    }
}

/// Answer source that returns pre-set replies in order.
///
/// Once the script runs out, every further question gets
/// [`AnswerError::Closed`].
pub struct ScriptedAnswers {
    replies: Mutex<VecDeque<Result<String, AnswerError>>>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_results(replies.into_iter().map(|r| Ok(r.into())))
    }

    /// Script that may include failures at chosen positions
    pub fn from_results(replies: impl IntoIterator<Item = Result<String, AnswerError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn answer(
        &self,
        _index: usize,
        _total: usize,
        _question: &ClarifyingQuestion,
    ) -> Result<String, AnswerError> {
        let mut replies = self
            .replies
            .lock()
            .map_err(|e| AnswerError::IoError(e.to_string()))?;
        replies.pop_front().unwrap_or(Err(AnswerError::Closed))
    }
}
