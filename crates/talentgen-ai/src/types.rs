//! Request and response types for content generation

use serde::{Deserialize, Serialize};
use talentgen_domain::ExperienceLevel;

/// Request for a full job-posting draft
#[derive(Debug, Clone)]
pub struct JobContentRequest {
    /// Job title to draft for
    pub job_title: String,

    /// Hiring company name, if known
    pub company_name: Option<String>,

    /// Industry context
    pub industry: Option<String>,

    /// Posting location
    pub location: Option<String>,

    /// Target seniority level
    pub level: Option<ExperienceLevel>,
}

impl JobContentRequest {
    /// A request with only a job title, the minimum the platform requires
    pub fn for_title(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            company_name: None,
            industry: None,
            location: None,
            level: None,
        }
    }
}

/// Structured job-posting content recovered from a completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedJobContent {
    /// Role description paragraph(s)
    pub description: String,

    /// Requirement bullet points
    pub requirements: Vec<String>,

    /// Benefit bullet points
    pub benefits: Vec<String>,

    /// Suggested skills
    pub skills: Vec<String>,

    /// Canonical `N-M years` experience range
    pub experience_range: String,
}

/// Request for skill suggestions for a job title
#[derive(Debug, Clone)]
pub struct SkillSuggestionRequest {
    /// Job title to suggest skills for
    pub job_title: String,

    /// Industry context
    pub industry: Option<String>,
}

/// Request to complete a single free-text form field
#[derive(Debug, Clone)]
pub struct FieldCompletionRequest {
    /// Name of the field being completed (e.g. "summary", "headline")
    pub field_name: String,

    /// Text the user has typed so far
    pub partial_text: String,

    /// Surrounding form content, used as context
    pub context: Option<String>,
}

/// Metadata about a generation operation
#[derive(Debug, Clone)]
pub struct GenerationMetadata {
    /// Name of the model used
    pub model_name: String,

    /// Timestamp when generation occurred
    pub timestamp: u64,

    /// Required fields absent from the completion that were defaulted
    pub defaulted_fields: Vec<String>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// A generated value together with its metadata
#[derive(Debug, Clone)]
pub struct GenerationOutcome<T> {
    /// The generated content
    pub content: T,

    /// Metadata about the operation
    pub metadata: GenerationMetadata,
}
