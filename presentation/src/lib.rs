//! Presentation layer for tokinfo
//!
//! This crate contains the CLI definition, the interactive answer
//! source and the progress reporter.

pub mod answers;
pub mod cli;
pub mod progress;

// Re-export commonly used types
pub use answers::InteractiveAnswerSource;
pub use cli::commands::Cli;
pub use progress::reporter::ProgressReporter;
