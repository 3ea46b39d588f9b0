//! Classification of the raw prompt argument.

pub mod source;
