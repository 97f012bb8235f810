//! Data model shared by the sources, the aggregator and the renderer

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Registry statistics for a published package.
///
/// `versions` maps a raw version string to its adoption count for the last
/// week. Keys keep the order the registry returned them in; counts are not
/// validated, so whatever the registry reports flows through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageStats {
    pub name: String,
    /// Canonical install page URL
    pub url: String,
    pub all_time_downloads: i64,
    /// Daily download counts for the most recent month, oldest first
    pub last_30_days: Vec<i64>,
    pub updated_at: DateTime<Utc>,
    pub versions: IndexMap<String, i64>,
}

/// Metadata about the package's source repository.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryMetadata {
    pub url: String,
    pub stars: u64,
    /// Free-text license name; only the first whitespace-delimited token is
    /// shown on the card
    pub license: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Combined success payload of the aggregator: both source values untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub stats: PackageStats,
    pub metadata: RepositoryMetadata,
}
