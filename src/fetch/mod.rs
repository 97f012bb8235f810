//! Data source layer for the two card inputs
//!
//! # Modules
//!
//! - [`source`]: Traits the aggregator consumes (`PackageStatsSource`, `RepositorySource`)
//! - [`npm`]: npm registry and download-stats API client
//! - [`github`]: GitHub repository metadata client
//! - [`error`]: Error type shared by both sources

pub mod error;
pub mod github;
pub mod npm;
pub mod source;
