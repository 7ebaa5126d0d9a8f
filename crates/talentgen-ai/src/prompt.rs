//! LLM prompt engineering for recruitment content

use talentgen_domain::ExperienceLevel;

/// Builds prompts for job-posting content generation
pub struct PromptBuilder {
    job_title: String,
    company_name: Option<String>,
    industry: Option<String>,
    location: Option<String>,
    level: Option<ExperienceLevel>,
}

impl PromptBuilder {
    /// Create a new prompt builder for a job title
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            company_name: None,
            industry: None,
            location: None,
            level: None,
        }
    }

    /// Add the hiring company name
    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Add industry context
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Add the posting location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add the target seniority level
    pub fn with_level(mut self, level: ExperienceLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Build the full job-posting content prompt
    pub fn build_job_content(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and format specification
        prompt.push_str(JOB_CONTENT_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Posting context
        prompt.push_str(&self.context_lines());
        prompt.push('\n');

        // 3. Output format reminder
        prompt.push_str(OBJECT_ONLY_REMINDER);

        prompt
    }

    /// Build the skill-suggestion prompt
    pub fn build_skill_suggestion(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(SKILL_SUGGESTION_INSTRUCTIONS);
        prompt.push_str("\n\n");
        prompt.push_str(&self.context_lines());
        prompt.push('\n');
        prompt.push_str(OBJECT_ONLY_REMINDER);

        prompt
    }

    fn context_lines(&self) -> String {
        let mut lines = format!("Job title: {}\n", self.job_title);

        if let Some(company) = &self.company_name {
            lines.push_str(&format!("Company: {}\n", company));
        }
        if let Some(industry) = &self.industry {
            lines.push_str(&format!("Industry: {}\n", industry));
        }
        if let Some(location) = &self.location {
            lines.push_str(&format!("Location: {}\n", location));
        }
        if let Some(level) = self.level {
            let (lo, hi) = level.typical_years();
            lines.push_str(&format!(
                "Seniority: {} (typically {}-{} years)\n",
                level, lo, hi
            ));
        }

        lines
    }
}

/// Build the prompt for completing a single form field
pub fn build_field_completion(
    field_name: &str,
    partial_text: &str,
    context: Option<&str>,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(FIELD_COMPLETION_INSTRUCTIONS);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("Field: {}\n", field_name));

    if let Some(context) = context {
        prompt.push_str("Form content so far:\n---\n");
        prompt.push_str(context);
        prompt.push_str("\n---\n");
    }

    prompt.push_str("Text typed so far:\n---\n");
    prompt.push_str(partial_text);
    prompt.push_str("\n---\n\n");
    prompt.push_str(OBJECT_ONLY_REMINDER);

    prompt
}

const JOB_CONTENT_INSTRUCTIONS: &str = r#"Draft the content for a job posting.
Return a single JSON object with this shape:

{
  "description": "2-3 paragraph role description",
  "requirements": ["requirement", ...],
  "benefits": ["benefit", ...],
  "skills": ["skill", ...],
  "experience_range": "<n>-<m> years"
}

Rules:
- Write in a professional, inclusive tone
- 4-8 requirements, concrete and testable
- 3-6 benefits, conventional keywords only
- 5-10 skills, named technologies or competencies
- experience_range must be of the form "<n>-<m> years", e.g. "2-4 years"
- Do not invent company facts that are not in the context"#;

const SKILL_SUGGESTION_INSTRUCTIONS: &str = r#"Suggest skills for a job posting.
Return a single JSON object with this shape:

{
  "skills": ["skill", ...]
}

Rules:
- 5-10 skills, most relevant first
- Named technologies or competencies, no sentences
- Match the seniority level when one is given"#;

const FIELD_COMPLETION_INSTRUCTIONS: &str = r#"Complete a form field for a recruitment profile.
Return a single JSON object with this shape:

{
  "completion": "the completed field text"
}

Rules:
- Continue naturally from the text typed so far
- Keep the user's tone and language
- One field only, no headers or bullet points"#;

const OBJECT_ONLY_REMINDER: &str =
    r#"Remember: Return ONLY a single valid JSON object, no markdown code blocks, no explanations."#;
