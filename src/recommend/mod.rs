//! Content-based video recommendation engine.
//!
//! Turns video metadata into TF-IDF vectors over one shared vocabulary,
//! ranks candidates by cosine similarity and, for genre preferences,
//! smooths the ranking with a nearest-neighbor vote before deduplicating.
//!
//! The engine is pure computation: it receives an already-fetched corpus,
//! owns every intermediate structure for the duration of one call and
//! keeps nothing afterwards.

mod dedupe;
mod ranker;
mod refiner;
mod similarity;
mod vectorizer;

pub use dedupe::dedupe;
pub use ranker::{filter_by_genres, rank_by_reference, rank_by_scores, Scored};
pub use refiner::{DistanceMetric, NeighborModel};
pub use similarity::{cosine_similarity, similarity_row, SimilarityMatrix};
pub use vectorizer::{tokenize, vectorize, FeatureVector, Vocabulary};

use crate::models::VideoRecord;

/// Default number of recommendations returned for a reference title
pub const DEFAULT_TITLE_LIMIT: usize = 5;

/// Default neighbor count for the refinement vote
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Errors reported by the recommendation engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("No videos to recommend from")]
    EmptyCorpus,

    #[error("Video with title '{0}' not found")]
    NotFound(String),

    #[error("At least one favorite genre is required")]
    EmptyPreferences,

    #[error("Cannot fit {vectors} vectors with {labels} labels")]
    DimensionMismatch { vectors: usize, labels: usize },

    #[error("Invalid video record: {0}")]
    InvalidRecord(String),
}

/// Tuning knobs for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Maximum results in title mode
    pub title_limit: usize,
    /// `k` for the nearest-neighbor vote in genre mode
    pub neighbors: usize,
    pub metric: DistanceMetric,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            title_limit: DEFAULT_TITLE_LIMIT,
            neighbors: DEFAULT_NEIGHBORS,
            metric: DistanceMetric::Cosine,
        }
    }
}

/// Stateless engine parameterized by [`RecommendOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender {
    options: RecommendOptions,
}

impl Recommender {
    pub fn new(options: RecommendOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RecommendOptions {
        &self.options
    }

    /// Videos most similar to the one titled `reference_title`.
    ///
    /// Every document is `title description genres`. No video titled
    /// `reference_title` is ever part of the result, including later copies
    /// of the reference. A corpus holding only the reference yields an
    /// empty list.
    pub fn by_title(
        &self,
        reference_title: &str,
        corpus: &[VideoRecord],
    ) -> Result<Vec<VideoRecord>, RecommendError> {
        if corpus.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }
        validate_corpus(corpus)?;

        let reference = corpus
            .iter()
            .position(|video| video.title == reference_title)
            .ok_or_else(|| RecommendError::NotFound(reference_title.to_string()))?;

        if corpus.len() == 1 {
            tracing::debug!(title = %reference_title, "Reference is the only video");
            return Ok(Vec::new());
        }

        let documents: Vec<String> = corpus.iter().map(VideoRecord::document).collect();
        let (_, vectors) = vectorize(&documents);
        let matrix = SimilarityMatrix::build(&vectors);

        let ranked = rank_by_reference(&matrix, reference, self.options.title_limit, |index| {
            corpus[index].title == reference_title
        });

        tracing::debug!(
            title = %reference_title,
            candidates = corpus.len(),
            returned = ranked.len(),
            "Ranked videos by title similarity"
        );

        Ok(ranked
            .into_iter()
            .map(|scored| corpus[scored.index].clone())
            .collect())
    }

    /// Videos matching `favorite_genres`, ranked by similarity to a
    /// synthetic document made of those genres and refined by a
    /// nearest-neighbor vote.
    ///
    /// An empty list means no video shares a genre with the preferences.
    pub fn by_genres(
        &self,
        favorite_genres: &[String],
        corpus: &[VideoRecord],
    ) -> Result<Vec<VideoRecord>, RecommendError> {
        if favorite_genres.iter().all(|genre| genre.trim().is_empty()) {
            return Err(RecommendError::EmptyPreferences);
        }
        validate_corpus(corpus)?;

        let pool = filter_by_genres(corpus, favorite_genres);
        if pool.is_empty() {
            tracing::debug!(genres = ?favorite_genres, "No video matches the favorite genres");
            return Ok(Vec::new());
        }

        // The query goes last so candidate i keeps vector i
        let mut documents: Vec<String> = pool.iter().map(|video| video.document()).collect();
        documents.push(favorite_genres.join(" "));

        let (_, mut vectors) = vectorize(&documents);
        let query = vectors.pop().ok_or(RecommendError::EmptyCorpus)?;

        let scores = similarity_row(&query, &vectors);
        let ranked = rank_by_scores(&scores);

        let labels: Vec<usize> = (0..vectors.len()).collect();
        let mut model = NeighborModel::new(self.options.metric);
        model.fit(&vectors, &labels)?;

        let refined: Vec<VideoRecord> = ranked
            .iter()
            .filter_map(|scored| model.predict(&vectors[scored.index], self.options.neighbors))
            .map(|label| pool[label].clone())
            .collect();

        let recommendations = dedupe(refined);

        tracing::debug!(
            candidates = corpus.len(),
            matched = pool.len(),
            returned = recommendations.len(),
            "Ranked videos by genre preference"
        );

        Ok(recommendations)
    }
}

/// Recommends up to five videos similar to `reference_title`
pub fn recommend_by_title(
    reference_title: &str,
    corpus: &[VideoRecord],
) -> Result<Vec<VideoRecord>, RecommendError> {
    Recommender::default().by_title(reference_title, corpus)
}

/// Recommends videos for a viewer's favorite genres
pub fn recommend_by_genres(
    favorite_genres: &[String],
    corpus: &[VideoRecord],
) -> Result<Vec<VideoRecord>, RecommendError> {
    Recommender::default().by_genres(favorite_genres, corpus)
}

fn validate_corpus(corpus: &[VideoRecord]) -> Result<(), RecommendError> {
    corpus.iter().try_for_each(VideoRecord::validate)
}
