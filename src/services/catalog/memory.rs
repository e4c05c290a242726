use std::path::Path;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::RawVideo,
};

use super::VideoCatalog;

/// Immutable catalog held in memory, seeded from a vector or a JSON file
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    videos: Arc<Vec<RawVideo>>,
}

impl InMemoryCatalog {
    pub fn new(videos: Vec<RawVideo>) -> Self {
        Self {
            videos: Arc::new(videos),
        }
    }

    /// Loads a JSON array of videos. Each entry's `genres` may be a list or
    /// a delimited string.
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            count = catalog.len(),
            "Loaded video catalog"
        );

        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let videos: Vec<RawVideo> = serde_json::from_str(json)
            .map_err(|e| AppError::Catalog(format!("Invalid catalog JSON: {}", e)))?;
        Ok(Self::new(videos))
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[async_trait::async_trait]
impl VideoCatalog for InMemoryCatalog {
    async fn fetch_all(&self) -> AppResult<Vec<RawVideo>> {
        Ok(self.videos.as_ref().clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
