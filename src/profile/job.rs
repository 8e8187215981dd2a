//! Job profile record

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-•–—*]\s*").unwrap());

/// Structured job record. Built once per evaluation from normalized
/// recovery output; immutable afterwards. Matching consumes
/// `requirements.required_skills` and `responsibilities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobProfile {
    #[serde(default)]
    pub job_info: JobInfo,
    #[serde(default)]
    pub job_summary: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub technical_skills: TechnicalSkills,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub company_info: CompanyInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub remote_option: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience_years: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalSkills {
    #[serde(default)]
    pub programming_languages: Vec<String>,
    #[serde(default)]
    pub frameworks_libraries: Vec<String>,
    #[serde(default)]
    pub tools_technologies: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub cloud_platforms: Vec<String>,
    #[serde(default)]
    pub other_technical: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub about_company: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub industry: String,
}

impl JobProfile {
    /// Cleanup carried over from the upstream parser: strip leading bullet
    /// markers from responsibilities and drop entries left empty.
    pub fn post_process(&mut self) {
        self.responsibilities = self
            .responsibilities
            .iter()
            .map(|entry| BULLET_PREFIX.replace(entry.trim(), "").to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
    }
}
