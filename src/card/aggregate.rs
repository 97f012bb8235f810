//! Dual-source aggregation for the card
//!
//! Both fetches are started together and both run to completion before the
//! combined result is reported (join semantics, no cancellation). The caller
//! sees either both values untouched or one opaque failure; there is no
//! partial-success state.

use tracing::error;

use crate::card::types::CardData;
use crate::fetch::error::FetchError;
use crate::fetch::source::{PackageStatsSource, RepositorySource};

/// Resolves the package statistics and repository metadata concurrently.
///
/// If either source fails, the whole operation fails with the triggering
/// error and the other result is discarded. When both fail, the package
/// statistics error is the one reported.
pub async fn aggregate<S, R>(
    stats_source: &S,
    repo_source: &R,
    package_name: &str,
    repo: &str,
) -> Result<CardData, FetchError>
where
    S: PackageStatsSource + ?Sized,
    R: RepositorySource + ?Sized,
{
    let (stats, metadata) = tokio::join!(
        stats_source.fetch_stats(package_name),
        repo_source.fetch_metadata(repo),
    );

    match (stats, metadata) {
        (Ok(stats), Ok(metadata)) => Ok(CardData { stats, metadata }),
        (Err(e), _) => {
            error!("Failed to resolve package {}: {}", package_name, e);
            Err(e)
        }
        (_, Err(e)) => {
            error!("Failed to resolve repository {}: {}", repo, e);
            Err(e)
        }
    }
}
