//! Core content generator implementation

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::prompt::{build_field_completion, PromptBuilder};
use crate::types::{
    FieldCompletionRequest, GeneratedJobContent, GenerationMetadata, GenerationOutcome,
    JobContentRequest, SkillSuggestionRequest,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use talentgen_domain::traits::CompletionProvider;
use talentgen_extract::{
    extract, normalize_experience_range, Extraction, FieldSpec, OutputSchema,
};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The ContentGenerator turns generation requests into structured content
///
/// Every operation follows the same pipeline: build a prompt, call the
/// injected provider under a timeout, recover a JSON object from the
/// completion, substitute defaults for absent fields, and normalize
/// field-specific formats.
pub struct ContentGenerator<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: GeneratorConfig,
}

impl<P> ContentGenerator<P>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new ContentGenerator
    pub fn new(provider: P, config: GeneratorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Draft full job-posting content for a title
    pub async fn generate_job_content(
        &self,
        request: JobContentRequest,
    ) -> Result<GenerationOutcome<GeneratedJobContent>, GenerationError> {
        let start_time = SystemTime::now();

        let builder = PromptBuilder::new(request.job_title.clone());
        let builder = match request.company_name {
            Some(company) => builder.with_company(company),
            None => builder,
        };
        let builder = match request.industry {
            Some(industry) => builder.with_industry(industry),
            None => builder,
        };
        let builder = match request.location {
            Some(location) => builder.with_location(location),
            None => builder,
        };
        let builder = match request.level {
            Some(level) => builder.with_level(level),
            None => builder,
        };

        let prompt = builder.build_job_content();
        self.check_prompt(&prompt)?;

        info!("Generating job content for '{}'", request.job_title);

        let completion = self.call_provider(&prompt).await?;

        debug!("Completion length: {} chars", completion.len());

        let schema = job_content_schema();
        let extraction = extract(&completion, &schema)?;

        if !extraction.missing.is_empty() {
            warn!(
                "Completion missing fields, substituting defaults: {}",
                extraction.missing.join(", ")
            );
        }

        let content = GeneratedJobContent {
            description: string_field(&extraction, &schema, "description"),
            requirements: list_field(&extraction, &schema, "requirements"),
            benefits: list_field(&extraction, &schema, "benefits"),
            skills: list_field(&extraction, &schema, "skills"),
            experience_range: normalize_experience_range(&string_field(
                &extraction,
                &schema,
                "experience_range",
            )),
        };

        let metadata = self.metadata(start_time, extraction.missing);

        info!(
            "Job content generated: {} requirements, {} benefits, {} skills",
            content.requirements.len(),
            content.benefits.len(),
            content.skills.len()
        );

        Ok(GenerationOutcome { content, metadata })
    }

    /// Suggest skills for a job title
    pub async fn suggest_skills(
        &self,
        request: SkillSuggestionRequest,
    ) -> Result<GenerationOutcome<Vec<String>>, GenerationError> {
        let start_time = SystemTime::now();

        let builder = PromptBuilder::new(request.job_title.clone());
        let builder = match request.industry {
            Some(industry) => builder.with_industry(industry),
            None => builder,
        };

        let prompt = builder.build_skill_suggestion();
        self.check_prompt(&prompt)?;

        info!("Suggesting skills for '{}'", request.job_title);

        let completion = self.call_provider(&prompt).await?;

        let schema = OutputSchema::new(vec![FieldSpec::text_list("skills")]);
        let extraction = extract(&completion, &schema)?;

        let skills = list_field(&extraction, &schema, "skills");
        let metadata = self.metadata(start_time, extraction.missing);

        info!("Suggested {} skills", skills.len());

        Ok(GenerationOutcome {
            content: skills,
            metadata,
        })
    }

    /// Complete a single free-text form field
    pub async fn autocomplete_field(
        &self,
        request: FieldCompletionRequest,
    ) -> Result<GenerationOutcome<String>, GenerationError> {
        let start_time = SystemTime::now();

        let prompt = build_field_completion(
            &request.field_name,
            &request.partial_text,
            request.context.as_deref(),
        );
        self.check_prompt(&prompt)?;

        info!("Completing field '{}'", request.field_name);

        let completion = self.call_provider(&prompt).await?;

        let schema = OutputSchema::new(vec![FieldSpec::text("completion")]);
        let extraction = extract(&completion, &schema)?;

        let text = string_field(&extraction, &schema, "completion");
        let metadata = self.metadata(start_time, extraction.missing);

        Ok(GenerationOutcome {
            content: text,
            metadata,
        })
    }

    /// Reject prompts the configured model would truncate
    fn check_prompt(&self, prompt: &str) -> Result<(), GenerationError> {
        if prompt.len() > self.config.max_prompt_length {
            return Err(GenerationError::PromptTooLong(
                prompt.len(),
                self.config.max_prompt_length,
            ));
        }
        debug!("Prompt length: {} chars", prompt.len());
        Ok(())
    }

    /// Call the completion provider with the configured timeout
    async fn call_provider(&self, prompt: &str) -> Result<String, GenerationError> {
        timeout(self.config.completion_timeout(), self.spawn_completion(prompt))
            .await
            .map_err(|_| GenerationError::Timeout)?
    }

    async fn spawn_completion(&self, prompt: &str) -> Result<String, GenerationError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // Call in a blocking context since CompletionProvider is not async
        tokio::task::spawn_blocking(move || {
            provider
                .complete(&prompt)
                .map_err(|e| GenerationError::Provider(e.to_string()))
        })
        .await
        .map_err(|e| GenerationError::Provider(format!("Task join error: {}", e)))?
    }

    fn metadata(&self, start_time: SystemTime, defaulted_fields: Vec<String>) -> GenerationMetadata {
        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        GenerationMetadata {
            model_name: self.config.model_name.clone(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs(),
            defaulted_fields,
            processing_time_ms,
        }
    }
}

/// Required fields of a full job-posting completion
fn job_content_schema() -> OutputSchema {
    OutputSchema::new(vec![
        FieldSpec::text("description"),
        FieldSpec::text_list("requirements"),
        FieldSpec::text_list("benefits"),
        FieldSpec::text_list("skills"),
        FieldSpec::text("experience_range"),
    ])
}

/// Read a text field, substituting the schema default when absent
fn string_field(extraction: &Extraction, schema: &OutputSchema, name: &str) -> String {
    match extraction.field_or_default(schema, name) {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Read a string-list field, substituting the schema default when absent
///
/// A bare string is tolerated as a one-item list; non-string items are
/// dropped.
fn list_field(extraction: &Extraction, schema: &OutputSchema, name: &str) -> Vec<String> {
    match extraction.field_or_default(schema, name) {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentgen_llm::MockProvider;

    fn create_test_generator(response: &str) -> ContentGenerator<MockProvider> {
        let provider = MockProvider::new(response);
        ContentGenerator::new(provider, GeneratorConfig::default())
    }

    #[tokio::test]
    async fn test_generate_job_content_from_clean_completion() {
        let generator = create_test_generator(
            r#"{
                "description": "You will build backend services.",
                "requirements": ["Rust", "SQL"],
                "benefits": ["Remote work"],
                "skills": ["Tokio", "Postgres"],
                "experience_range": "3-5 years"
            }"#,
        );

        let outcome = generator
            .generate_job_content(JobContentRequest::for_title("Backend Engineer"))
            .await
            .unwrap();

        assert_eq!(outcome.content.description, "You will build backend services.");
        assert_eq!(outcome.content.requirements, vec!["Rust", "SQL"]);
        assert_eq!(outcome.content.experience_range, "3-5 years");
        assert!(outcome.metadata.defaulted_fields.is_empty());
    }

    #[tokio::test]
    async fn test_generate_job_content_normalizes_experience() {
        let generator = create_test_generator(
            r#"{"description":"d","requirements":[],"benefits":[],"skills":[],"experience_range":"5 years"}"#,
        );

        let outcome = generator
            .generate_job_content(JobContentRequest::for_title("Backend Engineer"))
            .await
            .unwrap();

        assert_eq!(outcome.content.experience_range, "4-6 years");
    }

    #[tokio::test]
    async fn test_generate_job_content_defaults_missing_fields() {
        let generator = create_test_generator(r#"{"description":"Only this field"}"#);

        let outcome = generator
            .generate_job_content(JobContentRequest::for_title("Backend Engineer"))
            .await
            .unwrap();

        assert_eq!(outcome.content.description, "Only this field");
        assert!(outcome.content.requirements.is_empty());
        assert!(outcome.content.benefits.is_empty());
        // An absent experience_range defaults to "", which normalizes to the
        // fixed fallback
        assert_eq!(outcome.content.experience_range, "2-4 years");
        assert_eq!(
            outcome.metadata.defaulted_fields,
            vec!["requirements", "benefits", "skills", "experience_range"]
        );
    }

    #[tokio::test]
    async fn test_generate_job_content_malformed_completion() {
        let generator = create_test_generator("I'm sorry, I can't help with that.");

        let result = generator
            .generate_job_content(JobContentRequest::for_title("Backend Engineer"))
            .await;

        match result {
            Err(GenerationError::MalformedOutput { raw_text }) => {
                assert_eq!(raw_text, "I'm sorry, I can't help with that.");
            }
            other => panic!("Expected MalformedOutput, got {:?}", other.map(|o| o.content)),
        }
    }

    #[tokio::test]
    async fn test_suggest_skills() {
        let generator =
            create_test_generator(r#"```json
{"skills": ["Rust", "Kubernetes", "gRPC"]}
```"#);

        let outcome = generator
            .suggest_skills(SkillSuggestionRequest {
                job_title: "Platform Engineer".to_string(),
                industry: None,
            })
            .await
            .unwrap();

        assert_eq!(outcome.content, vec!["Rust", "Kubernetes", "gRPC"]);
    }

    #[tokio::test]
    async fn test_autocomplete_field() {
        let generator = create_test_generator(
            r#"{"completion": "Seasoned engineer with a decade of distributed-systems work."}"#,
        );

        let outcome = generator
            .autocomplete_field(FieldCompletionRequest {
                field_name: "summary".to_string(),
                partial_text: "Seasoned engineer".to_string(),
                context: None,
            })
            .await
            .unwrap();

        assert!(outcome.content.starts_with("Seasoned engineer"));
    }

    #[tokio::test]
    async fn test_prompt_too_long() {
        let provider = MockProvider::new("{}");
        let mut config = GeneratorConfig::default();
        config.max_prompt_length = 50;
        let generator = ContentGenerator::new(provider, config);

        let result = generator
            .generate_job_content(JobContentRequest::for_title("Backend Engineer"))
            .await;

        assert!(matches!(result, Err(GenerationError::PromptTooLong(_, _))));
    }

    #[test]
    fn test_list_field_tolerates_bare_string() {
        let schema = OutputSchema::new(vec![FieldSpec::text_list("skills")]);
        let extraction = extract(r#"{"skills": "Rust"}"#, &schema).unwrap();
        assert_eq!(list_field(&extraction, &schema, "skills"), vec!["Rust"]);
    }

    #[test]
    fn test_list_field_drops_non_string_items() {
        let schema = OutputSchema::new(vec![FieldSpec::text_list("skills")]);
        let extraction = extract(r#"{"skills": ["Rust", 3, null]}"#, &schema).unwrap();
        assert_eq!(list_field(&extraction, &schema, "skills"), vec!["Rust"]);
    }
}
