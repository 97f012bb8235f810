//! Presentation layer: card composition and display helpers
//!
//! # Modules
//!
//! - [`card`]: Terminal layout of the summary card and the error placeholder
//! - [`format`]: Abbreviated number formatting ("12.3k")
//! - [`sparkline`]: Block-character curve for the daily download series

pub mod card;
pub mod format;
pub mod sparkline;
