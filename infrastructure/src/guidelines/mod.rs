//! JSON-backed guideline catalog
//!
//! The guideline file is a single JSON object:
//!
//! ```text
//! {
//!   "introduction": "<string>",
//!   "techniques": [
//!     { "name": "<string>", "summarized": "<string>", "complete": "<string>" }
//!   ]
//! }
//! ```

mod store;

pub use store::JsonGuidelineStore;
