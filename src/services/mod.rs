// Service exports
pub mod cache;
pub mod catalog;
pub mod postgres;
pub mod sweep;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use catalog::{CachedCatalog, CatalogClient, CatalogError};
pub use postgres::{PostgresClient, PostgresError};
pub use sweep::{AlertSweeper, SweepError, SweepReport};
