//! Greedy matching of target items against source items
//!
//! Deliberately a greedy, deterministic O(M·N) assignment rather than a
//! maximum-matching search: collections are tens of items and the
//! first-acceptable pairing is easy to explain back to the user. Output
//! depends only on the input collections and their order, never on
//! incidental iteration order.

use crate::scoring::embeddings::{cosine_similarity, EmbeddingProvider};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of matching one target collection. `matched` and `missing`
/// partition the (deduplicated) target collection and keep target order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Percentage of targets matched, 0–100, rounded to 2 decimals.
    /// 0 when the target collection is empty, by convention.
    pub coverage: f32,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            matched: Vec::new(),
            missing: Vec::new(),
            coverage: 0.0,
        }
    }
}

pub struct GreedyMatcher<'a> {
    provider: &'a dyn EmbeddingProvider,
    threshold: f32,
}

impl<'a> GreedyMatcher<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider, threshold: f32) -> Self {
        Self {
            provider,
            threshold,
        }
    }

    /// Greedy one-to-one assignment of sources to targets.
    ///
    /// For each target in collection order, sources are scanned in collection
    /// order and the first unconsumed one whose similarity clears the
    /// threshold is consumed for that target. No source satisfies more than
    /// one target.
    pub fn match_collections(&self, targets: &[String], sources: &[String]) -> MatchResult {
        let targets = dedup_preserving_order(targets);
        if targets.is_empty() {
            return MatchResult::empty();
        }

        let target_embeddings = self.embed_all(&targets);
        let source_embeddings = self.embed_all(sources);

        let mut consumed = vec![false; sources.len()];
        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for (target, target_embedding) in targets.iter().zip(&target_embeddings) {
            let hit = target_embedding.as_ref().and_then(|target_embedding| {
                source_embeddings
                    .iter()
                    .enumerate()
                    .find(|(index, source_embedding)| {
                        !consumed[*index]
                            && source_embedding.as_ref().is_some_and(|source_embedding| {
                                cosine_similarity(target_embedding, source_embedding)
                                    >= self.threshold
                            })
                    })
                    .map(|(index, _)| index)
            });

            match hit {
                Some(index) => {
                    consumed[index] = true;
                    matched.push(target.clone());
                }
                None => missing.push(target.clone()),
            }
        }

        let coverage = round2(matched.len() as f32 / targets.len() as f32 * 100.0);
        MatchResult {
            matched,
            missing,
            coverage,
        }
    }

    /// Union matching: a target is matched when its best similarity against
    /// any of the alternative texts clears the threshold. Alternatives are
    /// reusable across targets; nothing is consumed.
    pub fn match_against_union(&self, targets: &[String], alternatives: &[String]) -> MatchResult {
        let targets = dedup_preserving_order(targets);
        if targets.is_empty() {
            return MatchResult::empty();
        }

        let target_embeddings = self.embed_all(&targets);
        let alternative_embeddings = self.embed_all(alternatives);

        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for (target, target_embedding) in targets.iter().zip(&target_embeddings) {
            let best = target_embedding.as_ref().map(|target_embedding| {
                alternative_embeddings
                    .iter()
                    .flatten()
                    .map(|alternative| cosine_similarity(target_embedding, alternative))
                    .fold(f32::NEG_INFINITY, f32::max)
            });

            if best.is_some_and(|best| best >= self.threshold) {
                matched.push(target.clone());
            } else {
                missing.push(target.clone());
            }
        }

        let coverage = round2(matched.len() as f32 / targets.len() as f32 * 100.0);
        MatchResult {
            matched,
            missing,
            coverage,
        }
    }

    /// Batch embedding with per-item failure isolation: if the batch call
    /// fails, every item is retried on its own and individual failures
    /// surface as `None` (an unembeddable item never matches, it does not
    /// abort the collection).
    fn embed_all(&self, texts: &[String]) -> Vec<Option<Vec<f32>>> {
        if texts.is_empty() {
            return Vec::new();
        }

        match self.provider.embed_many(texts) {
            Ok(embeddings) if embeddings.len() == texts.len() => {
                embeddings.into_iter().map(Some).collect()
            }
            _ => {
                debug!("Batch embedding failed, embedding {} items individually", texts.len());
                texts
                    .iter()
                    .map(|text| self.provider.embed(text).ok())
                    .collect()
            }
        }
    }
}

fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
