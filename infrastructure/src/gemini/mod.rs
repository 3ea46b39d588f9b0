//! Gemini adapter
//!
//! Implements LlmGateway over the Gemini `generateContent` REST endpoint.

pub mod auth;
pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
