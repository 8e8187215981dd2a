//! Canonical schema templates for normalized records
//!
//! Process-wide constants consumed by the normalizer. Changing a template is
//! a compatibility-breaking schema migration: bump [`SCHEMA_VERSION`] and
//! migrate any persisted snapshots.

use serde_json::{json, Value};
use std::sync::LazyLock;

pub const SCHEMA_VERSION: u32 = 1;

static CANDIDATE_TEMPLATE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "personal_info": {
            "name": "",
            "email": "",
            "phone": "",
            "location": "",
            "linkedin": "",
            "github": "",
            "portfolio": ""
        },
        "professional_summary": "",
        "skills": {
            "programming_languages": [],
            "frameworks_libraries": [],
            "tools_technologies": [],
            "databases": [],
            "other_technical_skills": []
        },
        "experience": [],
        "education": [],
        "projects": [],
        "certifications": [],
        "honors_achievements": []
    })
});

static JOB_TEMPLATE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "job_info": {
            "title": "",
            "company": "",
            "location": "",
            "employment_type": "",
            "experience_level": "",
            "salary_range": "",
            "remote_option": ""
        },
        "job_summary": "",
        "responsibilities": [],
        "requirements": {
            "required_skills": [],
            "preferred_skills": [],
            "education": [],
            "experience_years": "",
            "certifications": []
        },
        "technical_skills": {
            "programming_languages": [],
            "frameworks_libraries": [],
            "tools_technologies": [],
            "databases": [],
            "cloud_platforms": [],
            "other_technical": []
        },
        "soft_skills": [],
        "benefits": [],
        "company_info": {
            "about_company": "",
            "company_size": "",
            "industry": ""
        }
    })
});

/// Canonical shape of a normalized candidate record
pub fn candidate_template() -> &'static Value {
    &CANDIDATE_TEMPLATE
}

/// Canonical shape of a normalized job record
pub fn job_template() -> &'static Value {
    &JOB_TEMPLATE
}
