//! Embedding-based matching and score aggregation

pub mod embeddings;
pub mod evaluator;
pub mod matcher;

pub use embeddings::{cosine_similarity, EmbeddingProvider, StaticModelProvider};
pub use evaluator::{EvaluationReport, Evaluator};
pub use matcher::{GreedyMatcher, MatchResult};
