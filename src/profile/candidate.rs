//! Candidate profile record and derived matching inputs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());
static TITLE_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\[\]()]").unwrap());

/// Structured candidate record. Built once per evaluation from normalized
/// recovery output; immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub skills: SkillCategories,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub honors_achievements: Vec<Honor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategories {
    #[serde(default)]
    pub programming_languages: Vec<String>,
    #[serde(default)]
    pub frameworks_libraries: Vec<String>,
    #[serde(default)]
    pub tools_technologies: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub other_technical_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub graduation_date: String,
    #[serde(default)]
    pub gpa: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub live_demo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Honor {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub issuer: String,
}

impl CandidateProfile {
    /// All skills flattened across categories, first occurrence wins.
    /// Category order is fixed so the result is reproducible for an
    /// identical record.
    pub fn all_skills(&self) -> Vec<String> {
        let categories = [
            &self.skills.programming_languages,
            &self.skills.frameworks_libraries,
            &self.skills.tools_technologies,
            &self.skills.databases,
            &self.skills.other_technical_skills,
        ];

        let mut seen = HashSet::new();
        let mut skills = Vec::new();
        for category in categories {
            for skill in category {
                if seen.insert(skill.clone()) {
                    skills.push(skill.clone());
                }
            }
        }
        skills
    }

    /// Work history as matchable text: one header line per role followed by
    /// its responsibilities.
    pub fn experience_text(&self) -> String {
        let mut lines = Vec::new();
        for role in &self.experience {
            lines.push(format!(
                "{} at {} ({} - {})",
                role.job_title, role.company, role.start_date, role.end_date
            ));
            lines.extend(role.responsibilities.iter().cloned());
        }
        lines.join("\n")
    }

    /// Projects as matchable text: one `name: technologies` line per project
    pub fn projects_text(&self) -> String {
        self.projects
            .iter()
            .map(|project| format!("{}: {}", project.name, project.technologies.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full candidate story: work history followed by projects
    pub fn narrative(&self) -> String {
        let experience = self.experience_text();
        let projects = self.projects_text();

        match (experience.is_empty(), projects.is_empty()) {
            (true, true) => String::new(),
            (false, true) => experience,
            (true, false) => projects,
            (false, false) => format!("{experience}\n{projects}"),
        }
    }

    /// Cleanup carried over from the upstream parser: reformat 10-digit
    /// phone numbers, expand bare linkedin/github handles, strip brackets
    /// from job titles.
    pub fn post_process(&mut self) {
        if !self.personal_info.phone.is_empty() {
            let digits = NON_DIGITS.replace_all(&self.personal_info.phone, "");
            if digits.len() == 10 {
                self.personal_info.phone =
                    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]);
            }
        }

        self.personal_info.linkedin =
            expand_handle(&self.personal_info.linkedin, "linkedin.com", "linkedin.com/in/");
        self.personal_info.github =
            expand_handle(&self.personal_info.github, "github.com", "github.com/");

        for role in &mut self.experience {
            if !role.job_title.is_empty() {
                role.job_title = TITLE_BRACKETS
                    .replace_all(&role.job_title, "")
                    .trim()
                    .to_string();
            }
        }
    }
}

fn expand_handle(value: &str, domain: &str, prefix: &str) -> String {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !trimmed.starts_with("http") && !trimmed.contains(domain) {
        format!("{prefix}{trimmed}")
    } else {
        trimmed.to_string()
    }
}
