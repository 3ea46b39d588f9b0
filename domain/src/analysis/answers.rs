//! Operator answers to clarifying questions

use serde::Serialize;

/// One collected answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Zero-based position of the question in the analysis outcome
    pub index: usize,
    /// Question text as the model phrased it
    pub question: String,
    pub answer: String,
}

/// Answers keyed by question position (Value Object)
///
/// Keying by position keeps two identically worded questions distinct.
/// Entries are kept sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer at the same index.
    pub fn insert(
        &mut self,
        index: usize,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) {
        let entry = Answer {
            index,
            question: question.into(),
            answer: answer.into(),
        };
        match self.answers.binary_search_by_key(&index, |a| a.index) {
            Ok(pos) => self.answers[pos] = entry,
            Err(pos) => self.answers.insert(pos, entry),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.answers
            .binary_search_by_key(&index, |a| a.index)
            .ok()
            .map(|pos| &self.answers[pos])
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }
}
