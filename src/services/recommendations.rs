use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::VideoRecord,
    recommend::Recommender,
    services::catalog::VideoCatalog,
};

/// Generates watch recommendations from the video catalog
///
/// Fetches the catalog once per request, normalizes it into engine records
/// and runs the CPU-bound engine on the blocking thread pool.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn VideoCatalog>,
    recommender: Recommender,
    genre_delimiter: char,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn VideoCatalog>,
        recommender: Recommender,
        genre_delimiter: char,
    ) -> Self {
        Self {
            catalog,
            recommender,
            genre_delimiter,
        }
    }

    /// Fetches and normalizes the current catalog snapshot
    async fn load_corpus(&self) -> AppResult<Vec<VideoRecord>> {
        let raw = self.catalog.fetch_all().await?;

        tracing::debug!(
            catalog = self.catalog.name(),
            count = raw.len(),
            "Catalog snapshot fetched"
        );

        Ok(raw
            .into_iter()
            .map(|video| video.normalize(self.genre_delimiter))
            .collect())
    }

    /// Recommends videos similar to the one named `title`
    pub async fn recommend_by_title(&self, title: &str) -> AppResult<Vec<VideoRecord>> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Video title is required".to_string()));
        }

        let start = Instant::now();
        let corpus = self.load_corpus().await?;
        if corpus.is_empty() {
            return Err(AppError::NotFound("No videos found in the catalog".to_string()));
        }

        let recommender = self.recommender;
        let candidates = corpus.len();
        let recommendations =
            tokio::task::spawn_blocking(move || recommender.by_title(&title, &corpus))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;

        tracing::info!(
            candidates,
            returned = recommendations.len(),
            processing_time_ms = start.elapsed().as_millis(),
            "Title recommendations computed"
        );

        Ok(recommendations)
    }

    /// Recommends videos for a viewer's favorite genres
    pub async fn recommend_by_genres(
        &self,
        favorite_genres: Vec<String>,
    ) -> AppResult<Vec<VideoRecord>> {
        let favorite_genres: Vec<String> = favorite_genres
            .into_iter()
            .map(|genre| genre.trim().to_string())
            .filter(|genre| !genre.is_empty())
            .collect();

        let start = Instant::now();
        let corpus = self.load_corpus().await?;

        let recommender = self.recommender;
        let candidates = corpus.len();
        let recommendations =
            tokio::task::spawn_blocking(move || recommender.by_genres(&favorite_genres, &corpus))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;

        if recommendations.is_empty() {
            tracing::info!(candidates, "No videos match the favorite genres");
        } else {
            tracing::info!(
                candidates,
                returned = recommendations.len(),
                processing_time_ms = start.elapsed().as_millis(),
                "Genre recommendations computed"
            );
        }

        Ok(recommendations)
    }

    /// Distinct genre labels present in the catalog, sorted
    pub async fn list_genres(&self) -> AppResult<Vec<String>> {
        let corpus = self.load_corpus().await?;
        let genres: BTreeSet<String> = corpus.into_iter().flat_map(|video| video.genres).collect();
        Ok(genres.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenreField, RawVideo};
    use crate::recommend::RecommendError;
    use crate::services::catalog::MockVideoCatalog;
    use tokio_test::{assert_err, assert_ok};

    fn raw(title: &str, description: &str, genres: &str) -> RawVideo {
        RawVideo {
            title: title.to_string(),
            description: Some(description.to_string()),
            genres: GenreField::Delimited(genres.to_string()),
        }
    }

    fn sample_catalog() -> Vec<RawVideo> {
        vec![
            raw("A", "slapstick", "Comedy"),
            raw("B", "courtroom tears", "Drama"),
            raw("C", "slapstick courtroom", "Comedy|Drama"),
        ]
    }

    fn service_with(videos: Vec<RawVideo>) -> RecommendationService {
        let mut catalog = MockVideoCatalog::new();
        catalog
            .expect_fetch_all()
            .returning(move || Ok(videos.clone()));
        catalog.expect_name().return_const("mock");

        RecommendationService::new(Arc::new(catalog), Recommender::default(), '|')
    }

    #[tokio::test]
    async fn test_recommend_by_title_normalizes_catalog() {
        let service = service_with(sample_catalog());

        let result = assert_ok!(service.recommend_by_title("  C ").await);
        let titles: Vec<&str> = result.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(result.len(), 2);
        assert!(!titles.contains(&"C"));
    }

    #[tokio::test]
    async fn test_recommend_by_title_requires_title() {
        let service = service_with(sample_catalog());

        let err = assert_err!(service.recommend_by_title("   ").await);
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_recommend_by_title_empty_catalog() {
        let service = service_with(vec![]);

        let err = assert_err!(service.recommend_by_title("A").await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_recommend_by_title_unknown() {
        let service = service_with(sample_catalog());

        let err = assert_err!(service.recommend_by_title("Z").await);
        assert!(matches!(
            err,
            AppError::Recommendation(RecommendError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_recommend_by_genres_filters_pool() {
        let service = service_with(sample_catalog());

        let result = assert_ok!(service.recommend_by_genres(vec!["Drama".to_string()]).await);
        let mut titles: Vec<&str> = result.iter().map(|v| v.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_recommend_by_genres_blank_preferences() {
        let service = service_with(sample_catalog());

        let err = assert_err!(service.recommend_by_genres(vec![" ".to_string()]).await);
        assert!(matches!(
            err,
            AppError::Recommendation(RecommendError::EmptyPreferences)
        ));
    }

    #[tokio::test]
    async fn test_recommend_by_genres_no_match() {
        let service = service_with(sample_catalog());

        let result = assert_ok!(service.recommend_by_genres(vec!["Horror".to_string()]).await);
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_propagates() {
        let mut catalog = MockVideoCatalog::new();
        catalog
            .expect_fetch_all()
            .returning(|| Err(AppError::Catalog("unreachable".to_string())));
        catalog.expect_name().return_const("mock");
        let service = RecommendationService::new(Arc::new(catalog), Recommender::default(), '|');

        let err = assert_err!(service.recommend_by_genres(vec!["Drama".to_string()]).await);
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_list_genres_sorted_and_unique() {
        let service = service_with(sample_catalog());

        let genres = assert_ok!(service.list_genres().await);
        assert_eq!(genres, vec!["Comedy", "Drama"]);
    }
}
