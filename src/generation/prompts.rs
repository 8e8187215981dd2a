//! Prompt templates for structured resume and job description parsing

/// Parsing prompt templates rendered by placeholder substitution
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub resume_parsing: String,
    pub job_parsing: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            resume_parsing: RESUME_PARSING_TEMPLATE.to_string(),
            job_parsing: JOB_PARSING_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_resume_parsing(&self, resume_text: &str) -> String {
        self.resume_parsing.replace("{resume}", resume_text)
    }

    pub fn render_job_parsing(&self, job_text: &str) -> String {
        self.job_parsing.replace("{job}", job_text)
    }
}

// The JSON shapes below must stay in sync with the canonical templates in
// crate::recovery::templates.

const RESUME_PARSING_TEMPLATE: &str = r#"You are an expert resume parser. Your job is to carefully read through this resume text and extract ALL information present. Read EVERY word carefully and don't miss anything.

RESUME TEXT TO ANALYZE:
{resume}

Extract information and return ONLY a valid JSON object in this exact format:

{
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
    "experience": [
        {
            "job_title": "",
            "company": "",
            "location": "",
            "start_date": "",
            "end_date": "",
            "responsibilities": [],
            "achievements": []
        }
    ],
    "education": [
        {
            "degree": "",
            "field": "",
            "institution": "",
            "location": "",
            "graduation_date": "",
            "gpa": ""
        }
    ],
    "projects": [
        {
            "name": "",
            "description": "",
            "technologies": [],
            "github_link": "",
            "live_demo": ""
        }
    ],
    "certifications": [
        {
            "name": "",
            "issuer": "",
            "date": ""
        }
    ],
    "honors_achievements": [
        {
            "title": "",
            "description": "",
            "date": "",
            "issuer": ""
        }
    ]
}

DETAILED EXTRACTION INSTRUCTIONS:

PERSONAL INFORMATION - Look for the full name (usually at the top), email address, phone number in any format, address or location, LinkedIn profile, GitHub profile, and portfolio or personal website.

SKILLS - Categorize carefully:
Programming Languages: Python, Java, JavaScript, C++, Go, Rust, etc.
Frameworks/Libraries: React, Django, Spring Boot, Node.js, TensorFlow, etc.
Tools/Technologies: Git, Docker, Kubernetes, AWS, Azure, JIRA, etc.
Databases: MySQL, PostgreSQL, MongoDB, Redis, SQLite, etc.
Other Technical Skills: Machine Learning, DevOps, Agile, Scrum, etc.

EXPERIENCE - For each job extract the title exactly as written, company, location, start and end dates ("Present" for a current job), every responsibility bullet point, and any achievements mentioned.

EDUCATION - For each degree extract the degree type, field of study, institution, location, graduation date, and GPA if mentioned.

PROJECTS - Extract project names, descriptions, technologies used, and GitHub or demo links, for both personal and professional projects.

CERTIFICATIONS - Extract certificate names, issuing organizations, and dates.

AWARDS/HONORS - Extract award titles, descriptions, dates, and issuers.

CRITICAL RULES:
1. READ EVERY SINGLE WORD in the resume text
2. Extract information EXACTLY as written - don't paraphrase
3. If you're unsure about categorization, include it rather than exclude it
4. Extract ALL responsibilities and achievements, not just the first few
5. Include ALL skills mentioned, even if they seem minor
6. Return ONLY the JSON object, no explanation or additional text

Be extremely thorough and don't miss any information!"#;

const JOB_PARSING_TEMPLATE: &str = r#"You are an expert job description parser. Analyze this job description text and extract ALL relevant information. Read carefully and categorize everything properly.

JOB DESCRIPTION TEXT:
{job}

Extract information and return ONLY a valid JSON object in this exact format:

{
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
    "responsibilities": [
        "responsibility 1",
        "responsibility 2"
    ],
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
}

EXTRACTION GUIDELINES:
1. Extract every responsibility as its own list entry, without bullet markers
2. Separate hard requirements from preferred qualifications
3. Categorize technical skills the same way as the schema above
4. List soft skills (communication, leadership, teamwork, ...) separately
5. Return ONLY the JSON object, no explanation or additional text

Be thorough and don't miss any requirement!"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_prompt_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_resume_parsing("Jane Doe, Software Engineer at Acme.");

        assert!(prompt.contains("Jane Doe, Software Engineer at Acme."));
        assert!(prompt.contains("expert resume parser"));
        assert!(prompt.contains("\"programming_languages\""));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_job_prompt_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_job_parsing("We are hiring a data engineer.");

        assert!(prompt.contains("We are hiring a data engineer."));
        assert!(prompt.contains("expert job description parser"));
        assert!(prompt.contains("\"required_skills\""));
        assert!(!prompt.contains("{job}"));
    }
}
