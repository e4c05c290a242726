use std::sync::Arc;

use crate::recommend::Recommender;
use crate::services::{RecommendationService, VideoCatalog};

/// Shared application state
///
/// Holds only immutable collaborators; every request builds its own engine
/// structures from a fresh catalog snapshot.
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
}

impl AppState {
    /// Creates application state around a catalog backend
    pub fn new(
        catalog: Arc<dyn VideoCatalog>,
        recommender: Recommender,
        genre_delimiter: char,
    ) -> Self {
        Self {
            recommendations: Arc::new(RecommendationService::new(
                catalog,
                recommender,
                genre_delimiter,
            )),
        }
    }
}
