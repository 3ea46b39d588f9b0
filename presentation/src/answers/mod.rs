//! Operator answer sources

pub mod interactive;

pub use interactive::InteractiveAnswerSource;
