//! Source traits for the two card data providers

#[cfg(test)]
use mockall::automock;

use crate::card::types::{PackageStats, RepositoryMetadata};
use crate::fetch::error::FetchError;

/// Trait for fetching registry statistics for a published package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageStatsSource: Send + Sync {
    /// Fetches download statistics and the per-version histogram for a package
    ///
    /// # Arguments
    /// * `package_name` - The published package name (e.g., "react" or "@types/node")
    ///
    /// # Returns
    /// * `Ok(PackageStats)` - Registry statistics for the package
    /// * `Err(FetchError)` - If the fetch fails for any reason
    async fn fetch_stats(&self, package_name: &str) -> Result<PackageStats, FetchError>;
}

/// Trait for fetching metadata about a source repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetches repository metadata
    ///
    /// # Arguments
    /// * `repo` - The repository identifier (e.g., "facebook/react")
    ///
    /// # Returns
    /// * `Ok(RepositoryMetadata)` - Stars, license, description and timestamps
    /// * `Err(FetchError)` - If the fetch fails for any reason
    async fn fetch_metadata(&self, repo: &str) -> Result<RepositoryMetadata, FetchError>;
}
