//! Core error handling for the structured-sequence pipeline.

pub mod errors;

pub use errors::{KieError, KieResult};
