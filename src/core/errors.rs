//! Error types for the structured-sequence pipeline.
//!
//! Decoding model output never fails (malformed output degrades to partial
//! structures), so errors here cover the remaining seams: values outside
//! the structured-value domain, bad configuration, and failures from the
//! tokenizer collaborator.

use thiserror::Error;

/// Errors produced by codec, evaluation, and dataset-preparation operations.
#[derive(Error, Debug)]
pub enum KieError {
    /// Input is outside the structured-value domain (e.g. JSON containing
    /// arrays, or an `entities` field that is not valid JSON). This is a
    /// caller bug, not a runtime condition to recover from.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the tokenizer collaborator.
    #[error("tokenizer: {context}")]
    Tokenizer {
        /// What the tokenizer was asked to do when it failed.
        context: String,
        /// The underlying error reported by the tokenizer.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl KieError {
    /// Creates an `InvalidInput` error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        KieError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a `ConfigError` with the given message.
    pub fn config_error(message: impl Into<String>) -> Self {
        KieError::ConfigError {
            message: message.into(),
        }
    }

    /// Prefixes an `InvalidInput` message with caller context; other
    /// variants pass through unchanged.
    pub fn with_input_context(self, context: impl AsRef<str>) -> Self {
        match self {
            KieError::InvalidInput { message } => KieError::InvalidInput {
                message: format!("{}: {}", context.as_ref(), message),
            },
            other => other,
        }
    }

    /// Wraps a tokenizer collaborator failure with context.
    pub fn tokenizer(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        KieError::Tokenizer {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Convenient result alias for structured-sequence operations.
pub type KieResult<T> = Result<T, KieError>;
