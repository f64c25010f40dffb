pub mod tmdb;

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait DiscoveryProvider: Send + Sync {
    /// Discover TV shows that first aired in `year`, most popular first.
    /// Returns the upstream JSON body unchanged.
    async fn discover_tv(&self, year: &str, page: &str) -> Result<serde_json::Value, AppError>;
}
