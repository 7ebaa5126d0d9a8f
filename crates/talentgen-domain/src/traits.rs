//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for LLM completion operations
///
/// Implemented by the infrastructure layer (talentgen-llm). Callers receive
/// the provider as an injected capability rather than reaching for a
/// process-global client, so every consumer stays testable with a stub.
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Produce a text completion for a prompt
    fn complete(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Produce a completion that is expected to be structured (if supported)
    ///
    /// The schema is advisory; providers that have no native structured mode
    /// fall back to `complete`.
    fn complete_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}
