//! Nearest-neighbor consensus over the ranked candidate list.
//!
//! Each candidate is its own label, so a vote answers "which existing
//! candidate does this point sit closest to".

use std::cmp::Ordering;
use std::collections::HashMap;

use super::similarity::cosine_similarity;
use super::vectorizer::FeatureVector;
use super::RecommendError;

/// Distance used to find neighbors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// 1 - cosine similarity
    #[default]
    Cosine,
    Euclidean,
}

impl DistanceMetric {
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        match self {
            DistanceMetric::Cosine => 1.0 - cosine_similarity(a, b),
            DistanceMetric::Euclidean => {
                let diff = &a.view() - &b.view();
                diff.dot(&diff).sqrt()
            }
        }
    }
}

/// Fitted (vector, label) pairs for one invocation
#[derive(Debug, Clone, Default)]
pub struct NeighborModel<'a> {
    metric: DistanceMetric,
    points: &'a [FeatureVector],
    labels: Vec<usize>,
}

impl<'a> NeighborModel<'a> {
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            metric,
            points: &[],
            labels: Vec::new(),
        }
    }

    /// Stores the training points. kNN defers all work to prediction time.
    pub fn fit(
        &mut self,
        vectors: &'a [FeatureVector],
        labels: &[usize],
    ) -> Result<(), RecommendError> {
        if vectors.len() != labels.len() {
            return Err(RecommendError::DimensionMismatch {
                vectors: vectors.len(),
                labels: labels.len(),
            });
        }

        self.points = vectors;
        self.labels = labels.to_vec();
        Ok(())
    }

    /// Number of fitted points
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Majority label among the `k` fitted points closest to `query`.
    ///
    /// Uses every point when `k` exceeds the fitted count; a `k` of zero
    /// counts as one. Returns `None` only if nothing was fitted.
    pub fn predict(&self, query: &FeatureVector, k: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let mut distances: Vec<(f64, usize)> = self
            .points
            .iter()
            .zip(&self.labels)
            .map(|(point, &label)| (self.metric.distance(query, point), label))
            .collect();

        // Stable, so equidistant points keep insertion order
        distances.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let k = k.clamp(1, distances.len());
        let labels: Vec<usize> = distances[..k].iter().map(|(_, label)| *label).collect();
        majority_vote(&labels)
    }
}

/// Most frequent label; ties go to the label encountered first
fn majority_vote(labels: &[usize]) -> Option<usize> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    let mut order: Vec<usize> = Vec::new();

    for &label in labels {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            order.push(label);
        }
        *count += 1;
    }

    let mut best: Option<(usize, usize)> = None;
    for label in order {
        let count = counts[&label];
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }

    best.map(|(label, _)| label)
}
