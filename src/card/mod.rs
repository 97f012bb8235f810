//! Card assembly layer
//!
//! This module owns the only nontrivial logic in the crate: joining the two
//! data sources into one all-or-nothing payload and ranking the version
//! rollout for display.
//!
//! # Modules
//!
//! - [`aggregate`]: Concurrent dual-source fetch with single-failure collapse
//! - [`rollout`]: Version ranking, truncation and percentage math
//! - [`types`]: `PackageStats`, `RepositoryMetadata` and the combined `CardData`

pub mod aggregate;
pub mod rollout;
pub mod types;
