//! Stage 1 output and the answers collected for it.
//!
//! - [`entities::AnalysisOutcome`]: chosen technique plus clarifying questions
//! - [`answers::AnswerSet`]: operator answers keyed by question position

pub mod answers;
pub mod entities;
