//! Error types for content generation

use talentgen_extract::ExtractError;
use thiserror::Error;

/// Errors that can occur during content generation
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Completion provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Prompt exceeds maximum length
    #[error("Prompt too long: {0} chars (max: {1})")]
    PromptTooLong(usize, usize),

    /// Generation timeout
    #[error("Generation timeout")]
    Timeout,

    /// The completion could not be coerced into structured content
    ///
    /// Callers surface this as an "AI generation unavailable" condition,
    /// never as a raw parse error.
    #[error("Malformed output from completion")]
    MalformedOutput {
        /// The unmodified completion text, for diagnostic logging
        raw_text: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ExtractError> for GenerationError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::MalformedOutput { raw_text } => {
                GenerationError::MalformedOutput { raw_text }
            }
        }
    }
}

impl GenerationError {
    /// Whether the failure came from unusable model output rather than
    /// infrastructure, i.e. retrying the same request may help but the
    /// request itself was fine
    pub fn is_malformed_output(&self) -> bool {
        matches!(self, GenerationError::MalformedOutput { .. })
    }
}
