//! Blending of per-category match results into one explainable report

use crate::config::ScoringConfig;
use crate::profile::{CandidateProfile, JobProfile};
use crate::scoring::embeddings::EmbeddingProvider;
use crate::scoring::matcher::{round2, GreedyMatcher, MatchResult};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Final evaluation. Always carries both unblended component scores and both
/// matched/missing lists; a bare number is never returned alone. Produced
/// fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub final_score: f32,
    pub components: ComponentScores,
    pub skills: MatchResult,
    pub experience: MatchResult,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScores {
    pub skill_match_score: f32,
    pub experience_match_score: f32,
}

pub struct Evaluator<'a> {
    matcher: GreedyMatcher<'a>,
    skill_weight: f32,
    experience_weight: f32,
}

impl<'a> Evaluator<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider, scoring: &ScoringConfig) -> Self {
        Self {
            matcher: GreedyMatcher::new(provider, scoring.similarity_threshold),
            skill_weight: scoring.skill_weight,
            experience_weight: scoring.experience_weight,
        }
    }

    /// Score a candidate against a job. Total over well-formed profiles:
    /// empty collections yield zero coverage, never an error.
    ///
    /// Skills are matched greedily one-to-one against the job's required
    /// skills. Responsibilities are union-matched against two candidate
    /// texts: the full narrative (experience plus projects) and the
    /// experience-only text, best similarity of the two.
    pub fn evaluate(&self, candidate: &CandidateProfile, job: &JobProfile) -> EvaluationReport {
        let skills = self.matcher.match_collections(
            &job.requirements.required_skills,
            &candidate.all_skills(),
        );
        info!(
            "Skill coverage {:.2}%: {} matched, {} missing",
            skills.coverage,
            skills.matched.len(),
            skills.missing.len()
        );

        let alternatives: Vec<String> = [candidate.narrative(), candidate.experience_text()]
            .into_iter()
            .filter(|text| !text.is_empty())
            .collect();
        let experience = self
            .matcher
            .match_against_union(&job.responsibilities, &alternatives);
        info!(
            "Experience coverage {:.2}%: {} matched, {} missing",
            experience.coverage,
            experience.matched.len(),
            experience.missing.len()
        );

        let final_score = round2(
            self.skill_weight * skills.coverage + self.experience_weight * experience.coverage,
        );

        EvaluationReport {
            final_score,
            components: ComponentScores {
                skill_match_score: skills.coverage,
                experience_match_score: experience.coverage,
            },
            skills,
            experience,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::profile::candidate::{ExperienceEntry, SkillCategories};
    use crate::profile::job::Requirements;

    /// Token-bag test provider: each text embeds as counts of known tokens,
    /// so similarity reflects word overlap deterministically.
    struct TokenProvider {
        vocab: Vec<&'static str>,
    }

    impl TokenProvider {
        fn new() -> Self {
            Self {
                vocab: vec![
                    "python", "sql", "communication", "built", "data", "pipelines", "mentored",
                    "juniors",
                ],
            }
        }

        fn vector(&self, text: &str) -> Vec<f32> {
            let mut vector = vec![0.0; self.vocab.len()];
            for token in text.split_whitespace() {
                let token: String = token
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase();
                if let Some(axis) = self.vocab.iter().position(|word| *word == token) {
                    vector[axis] += 1.0;
                }
            }
            vector
        }
    }

    impl EmbeddingProvider for TokenProvider {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            Ok(self.vector(text))
        }

        fn embed_many(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|text| self.vector(text)).collect())
        }
    }

    fn scoring_config() -> ScoringConfig {
        ScoringConfig {
            similarity_threshold: 0.70,
            skill_weight: 0.5,
            experience_weight: 0.5,
        }
    }

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            skills: SkillCategories {
                programming_languages: vec!["Python".to_string()],
                databases: vec!["SQL".to_string()],
                ..SkillCategories::default()
            },
            experience: vec![ExperienceEntry {
                job_title: "Data Engineer".to_string(),
                company: "Acme".to_string(),
                start_date: "2019".to_string(),
                end_date: "2023".to_string(),
                responsibilities: vec!["Built data pipelines".to_string()],
                ..ExperienceEntry::default()
            }],
            ..CandidateProfile::default()
        }
    }

    fn job(required_skills: &[&str], responsibilities: &[&str]) -> JobProfile {
        JobProfile {
            requirements: Requirements {
                required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
                ..Requirements::default()
            },
            responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
            ..JobProfile::default()
        }
    }

    #[test]
    fn test_blended_final_score() {
        let provider = TokenProvider::new();
        let evaluator = Evaluator::new(&provider, &scoring_config());

        // "docker" is unknown to the provider and can never clear the
        // threshold, leaving 2 of 4 requirements matched.
        let job = job(
            &["python", "sql", "communication", "docker"],
            &["Built data pipelines"],
        );
        let report = evaluator.evaluate(&candidate(), &job);

        assert_eq!(report.components.skill_match_score, 50.0);
        assert_eq!(report.components.experience_match_score, 100.0);
        assert_eq!(report.final_score, 75.0);
        assert_eq!(report.skills.matched, vec!["python", "sql"]);
        assert_eq!(report.skills.missing, vec!["communication", "docker"]);
    }

    #[test]
    fn test_two_thirds_coverage_rounds_to_two_decimals() {
        let provider = TokenProvider::new();
        let evaluator = Evaluator::new(&provider, &scoring_config());

        let job = job(&["python", "sql", "communication"], &[]);
        let report = evaluator.evaluate(&candidate(), &job);

        assert!((report.components.skill_match_score - 66.67).abs() < 1e-3);
    }

    #[test]
    fn test_final_score_bounded_by_components() {
        let provider = TokenProvider::new();
        let evaluator = Evaluator::new(&provider, &scoring_config());

        let job = job(&["python", "communication"], &["Built data pipelines"]);
        let report = evaluator.evaluate(&candidate(), &job);

        let low = report
            .components
            .skill_match_score
            .min(report.components.experience_match_score);
        let high = report
            .components
            .skill_match_score
            .max(report.components.experience_match_score);
        assert!(report.final_score >= low - 0.01);
        assert!(report.final_score <= high + 0.01);
    }

    #[test]
    fn test_job_without_demands_scores_zero() {
        let provider = TokenProvider::new();
        let evaluator = Evaluator::new(&provider, &scoring_config());

        let report = evaluator.evaluate(&candidate(), &job(&[], &[]));

        assert_eq!(report.components.skill_match_score, 0.0);
        assert_eq!(report.components.experience_match_score, 0.0);
        assert_eq!(report.final_score, 0.0);
        assert!(report.skills.matched.is_empty());
        assert!(report.skills.missing.is_empty());
    }

    #[test]
    fn test_empty_candidate_misses_everything() {
        let provider = TokenProvider::new();
        let evaluator = Evaluator::new(&provider, &scoring_config());

        let job = job(&["python"], &["Built data pipelines"]);
        let report = evaluator.evaluate(&CandidateProfile::default(), &job);

        assert_eq!(report.final_score, 0.0);
        assert_eq!(report.skills.missing, vec!["python"]);
        assert_eq!(report.experience.missing, vec!["Built data pipelines"]);
    }

    #[test]
    fn test_responsibility_matches_via_experience_narrative() {
        let provider = TokenProvider::new();
        let evaluator = Evaluator::new(&provider, &scoring_config());

        // "Built data pipelines" overlaps the candidate's experience text
        // strongly, "communication" does not.
        let job = job(&[], &["Built data pipelines", "communication"]);
        let report = evaluator.evaluate(&candidate(), &job);

        assert_eq!(report.experience.matched, vec!["Built data pipelines"]);
        assert_eq!(report.experience.missing, vec!["communication"]);
        assert_eq!(report.experience.coverage, 50.0);
    }
}
