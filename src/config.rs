use serde::Deserialize;

use crate::recommend::{RecommendOptions, DEFAULT_NEIGHBORS, DEFAULT_TITLE_LIMIT};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// PostgreSQL connection URL; the JSON catalog file is used when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Path to a JSON array of videos, used without a database
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Separator used by the catalog for genre strings ("Comedy|Drama")
    #[serde(default = "default_genre_delimiter")]
    pub genre_delimiter: char,

    /// Number of videos returned for a reference title
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,

    /// Neighbors consulted by the genre refinement vote
    #[serde(default = "default_neighbor_count")]
    pub neighbor_count: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "data/videos.json".to_string()
}

fn default_genre_delimiter() -> char {
    '|'
}

fn default_title_limit() -> usize {
    DEFAULT_TITLE_LIMIT
}

fn default_neighbor_count() -> usize {
    DEFAULT_NEIGHBORS
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Engine options derived from this configuration
    pub fn recommend_options(&self) -> RecommendOptions {
        RecommendOptions {
            title_limit: self.title_limit,
            neighbors: self.neighbor_count,
            ..RecommendOptions::default()
        }
    }
}
