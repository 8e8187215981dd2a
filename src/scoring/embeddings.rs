//! Embedding provider built on Model2Vec static models

use crate::config::EmbeddingConfig;
use crate::error::{Result, ResumeGraderError};
use log::info;
use model2vec_rs::model::StaticModel;
use std::time::Instant;

/// Text-to-vector collaborator. Constructed once at startup and shared
/// read-only; implementations must be safe for concurrent read-only use.
pub trait EmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Order-preserving batch form of [`embed`](Self::embed)
    fn embed_many(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

pub struct StaticModelProvider {
    model: StaticModel,
    model_name: String,
}

impl StaticModelProvider {
    /// Load a Model2Vec static model from a local path or HuggingFace repo id
    pub fn load(config: &EmbeddingConfig) -> Result<Self> {
        let start = Instant::now();
        info!("Loading embedding model: {}", config.model);

        let model = StaticModel::from_pretrained(&config.model, None, None, None).map_err(|e| {
            ResumeGraderError::Embedding(format!("Failed to load model '{}': {}", config.model, e))
        })?;

        info!("Embedding model loaded in {:.2?}", start.elapsed());
        Ok(Self {
            model,
            model_name: config.model.clone(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl EmbeddingProvider for StaticModelProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }

    fn embed_many(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self.model.encode(texts))
    }
}

/// Cosine similarity in [-1, 1]. Total: empty, length-mismatched, or
/// zero-norm operands score 0.0 instead of erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
