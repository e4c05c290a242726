//! Short-form video recommendations.
//!
//! [`recommend`] is the pure engine (TF-IDF vectors, cosine ranking,
//! nearest-neighbor refinement). [`api`] exposes it over HTTP, fed by a
//! [`services::VideoCatalog`] backend.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod recommend;
pub mod services;

pub use recommend::{recommend_by_genres, recommend_by_title, RecommendError};
