pub mod catalog;
pub mod recommendations;

pub use catalog::{InMemoryCatalog, PgCatalog, VideoCatalog};
pub use recommendations::RecommendationService;
