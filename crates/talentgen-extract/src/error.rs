//! Error types for extraction

use thiserror::Error;

/// Errors that can occur during extraction
///
/// There is exactly one domain failure: the completion could not be coerced
/// into valid JSON after every repair heuristic. Anything else (network,
/// auth, DTO validation) belongs to other layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// JSON could not be recovered after all repair attempts
    #[error("Malformed output: completion could not be coerced into JSON")]
    MalformedOutput {
        /// The unmodified completion text, for diagnostic logging by the caller
        raw_text: String,
    },
}

impl ExtractError {
    /// The original completion text this failure was raised for
    pub fn raw_text(&self) -> &str {
        match self {
            ExtractError::MalformedOutput { raw_text } => raw_text,
        }
    }
}
