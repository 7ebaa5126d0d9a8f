//! Experience level module - seniority vocabulary for job postings

/// Seniority level attached to a job posting or candidate profile
///
/// Levels are ordered from least to most senior and carry a representative
/// years-of-experience range used when a caller gives no explicit range:
/// - Junior: entry level
/// - Mid: independent contributor
/// - Senior: deep expertise, mentors others
/// - Lead: owns a team or an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    /// Entry level (0-2 years)
    Junior,

    /// Independent contributor (2-5 years)
    Mid,

    /// Deep expertise (5-8 years)
    Senior,

    /// Owns a team or area (8+ years)
    Lead,
}

impl ExperienceLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }

    /// Parse a level from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "junior" | "entry" => Some(ExperienceLevel::Junior),
            "mid" | "intermediate" => Some(ExperienceLevel::Mid),
            "senior" => Some(ExperienceLevel::Senior),
            "lead" | "principal" => Some(ExperienceLevel::Lead),
            _ => None,
        }
    }

    /// Representative years-of-experience range for the level
    pub fn typical_years(&self) -> (u8, u8) {
        match self {
            ExperienceLevel::Junior => (0, 2),
            ExperienceLevel::Mid => (2, 5),
            ExperienceLevel::Senior => (5, 8),
            ExperienceLevel::Lead => (8, 12),
        }
    }

    /// Get the next level up (for career-path suggestions)
    pub fn next(&self) -> Option<Self> {
        match self {
            ExperienceLevel::Junior => Some(ExperienceLevel::Mid),
            ExperienceLevel::Mid => Some(ExperienceLevel::Senior),
            ExperienceLevel::Senior => Some(ExperienceLevel::Lead),
            ExperienceLevel::Lead => None, // Already at top
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid experience level: {}", s))
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
