//! Talentgen AI
//!
//! Drafts recruitment content with an LLM and recovers it as structured data.
//!
//! # Overview
//!
//! This crate is the caller side of the extraction pipeline: company
//! dashboards request job-posting drafts and skill suggestions, candidate
//! portals request form-field completions. Each operation builds a prompt,
//! calls the injected completion provider under a timeout, and funnels the
//! completion through `talentgen-extract`, substituting defaults for fields
//! the model omitted.
//!
//! # Architecture
//!
//! ```text
//! Request → PromptBuilder → CompletionProvider → Extractor → typed content
//! ```
//!
//! # Key Features
//!
//! - **Structured Drafting**: job descriptions, requirements, benefits, skills
//! - **Graceful Degradation**: malformed completions become a typed error,
//!   never a panic, so callers can surface "AI generation unavailable"
//! - **Default Substitution**: absent fields get kind-appropriate defaults
//! - **Field Normalization**: experience ranges are canonicalized
//!
//! # Example Usage
//!
//! ```no_run
//! use talentgen_ai::{ContentGenerator, GeneratorConfig, JobContentRequest};
//! use talentgen_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"description":"...","requirements":[],
//!     "benefits":[],"skills":[],"experience_range":"2-4 years"}"#);
//! let config = GeneratorConfig::default();
//!
//! let generator = ContentGenerator::new(provider, config);
//!
//! let request = JobContentRequest::for_title("Backend Engineer");
//! let outcome = generator.generate_job_content(request).await?;
//!
//! println!("Description: {}", outcome.content.description);
//! println!("Defaulted fields: {}", outcome.metadata.defaulted_fields.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod prompt;
mod types;


pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generator::ContentGenerator;
pub use prompt::PromptBuilder;
pub use types::{
    FieldCompletionRequest, GeneratedJobContent, GenerationMetadata, GenerationOutcome,
    JobContentRequest, SkillSuggestionRequest,
};
