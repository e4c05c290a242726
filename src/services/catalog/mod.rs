//! Video catalog abstraction
//!
//! The recommendation engine never performs I/O. A catalog supplies the
//! candidate set for one request, in whatever shape the backing store keeps
//! it; normalization into engine records happens in the service layer.

use crate::{error::AppResult, models::RawVideo};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCatalog;
pub use postgres::PgCatalog;

/// Trait for video catalog backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Fetch every video in the catalog, in a stable order
    async fn fetch_all(&self) -> AppResult<Vec<RawVideo>>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}
