//! Pipeline from raw document text to typed profiles

use crate::error::{ResumeGraderError, Result};
use crate::generation::{PromptTemplates, TextGenerator};
use crate::profile::{CandidateProfile, JobProfile};
use crate::recovery::{self, normalizer, templates};
use log::{debug, info};

/// Inputs shorter than this are rejected before any remote call is made.
pub const MIN_INPUT_LENGTH: usize = 50;

/// Drives one document through generate → recover → normalize → typed
/// profile. Each stage is a pure transformation over the previous stage's
/// value, so abandoning the pipeline between stages needs no cleanup.
pub struct ProfileExtractor<G> {
    generator: G,
    prompts: PromptTemplates,
}

impl<G: TextGenerator> ProfileExtractor<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            prompts: PromptTemplates::default(),
        }
    }

    pub async fn extract_candidate(&self, resume_text: &str) -> Result<CandidateProfile> {
        check_input_length(resume_text)?;

        info!("Requesting structured resume parse from generation service");
        let raw = self
            .generator
            .generate(&self.prompts.render_resume_parsing(resume_text))
            .await?;
        debug!("Generation service returned {} bytes", raw.len());

        let recovered = recovery::recover_json(&raw)?;
        let normalized = normalizer::normalize(templates::candidate_template(), &recovered);
        let mut profile: CandidateProfile = serde_json::from_value(normalized)?;
        profile.post_process();
        Ok(profile)
    }

    pub async fn extract_job(&self, job_text: &str) -> Result<JobProfile> {
        check_input_length(job_text)?;

        info!("Requesting structured job parse from generation service");
        let raw = self
            .generator
            .generate(&self.prompts.render_job_parsing(job_text))
            .await?;
        debug!("Generation service returned {} bytes", raw.len());

        let recovered = recovery::recover_json(&raw)?;
        let normalized = normalizer::normalize(templates::job_template(), &recovered);
        let mut profile: JobProfile = serde_json::from_value(normalized)?;
        profile.post_process();
        Ok(profile)
    }
}

fn check_input_length(text: &str) -> Result<()> {
    let length = text.trim().chars().count();
    if length < MIN_INPUT_LENGTH {
        return Err(ResumeGraderError::ShortInputRejected {
            length,
            minimum: MIN_INPUT_LENGTH,
        });
    }
    Ok(())
}
