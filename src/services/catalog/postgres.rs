use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{GenreField, RawVideo},
};

use super::VideoCatalog;

/// Row of the `videos` table
#[derive(Debug, sqlx::FromRow)]
struct VideoRow {
    title: String,
    description: Option<String>,
    genres: String,
}

impl From<VideoRow> for RawVideo {
    fn from(row: VideoRow) -> Self {
        RawVideo {
            title: row.title,
            description: row.description,
            genres: GenreField::Delimited(row.genres),
        }
    }
}

/// Catalog backed by the PostgreSQL `videos` table
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl VideoCatalog for PgCatalog {
    async fn fetch_all(&self) -> AppResult<Vec<RawVideo>> {
        let rows: Vec<VideoRow> = sqlx::query_as(
            r#"
            SELECT title, description, genres
            FROM videos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Fetched videos from PostgreSQL");

        Ok(rows.into_iter().map(RawVideo::from).collect())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
