//! pkgcard renders a compact terminal card for a published npm package:
//! registry download statistics and version rollout on one side, GitHub
//! repository metadata on the other.
//!
//! The two data sources are fetched concurrently and collapse into a single
//! all-or-nothing payload ([`card::aggregate`]); the version histogram is
//! ranked and annotated for display by [`card::rollout`]. Everything is
//! recomputed per invocation: no cache, no retries, no persistent state.

pub mod card;
pub mod fetch;
pub mod render;
