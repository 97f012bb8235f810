//! Version rollout ranking
//!
//! Turns the raw version-to-adoption-count histogram into an ordered,
//! truncated, percentage-annotated list ready for rendering. Ranking never
//! fails: degenerate inputs (empty histogram, zero limit, zero total,
//! unparseable version strings) all produce a well-defined result.

use indexmap::IndexMap;
use semver::Version;

/// Ordering rule applied to the histogram before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RankStrategy {
    /// Descending adoption count; ties keep encounter order
    #[default]
    Count,
    /// Descending semantic-version precedence, build-metadata aware
    Semver,
}

impl RankStrategy {
    /// Resolve a strategy tag, falling back to [`RankStrategy::Count`] for
    /// anything unrecognized
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "semver" => Self::Semver,
            _ => Self::Count,
        }
    }
}

/// One ranked row of the version rollout
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVersionEntry {
    pub version: String,
    pub count: i64,
    /// Share of the entire histogram's total, in percent. The denominator is
    /// always the untruncated total, so a truncated view does not sum to 100%.
    pub percentage: f64,
    /// True when the version string exactly equals the caller's current
    /// version marker (no semantic normalization)
    pub is_current: bool,
}

impl RankedVersionEntry {
    /// Width of the proportional bar within `track` columns.
    ///
    /// A quarter of the track is reserved for the trailing count/percentage
    /// label, so even a 100% entry never fills the full track.
    pub fn bar_width(&self, track: usize) -> usize {
        let usable = track - track / 4;
        let width = self.percentage / 100.0 * usable as f64;
        width.clamp(0.0, usable as f64).round() as usize
    }
}

/// Ranks the version histogram and truncates it to `limit` entries.
///
/// Percentages are computed against the sum over the whole histogram, not
/// just the retained entries. Counts are taken as-is; a zero (or negative)
/// total disables the division and yields 0% everywhere.
pub fn rank(
    histogram: &IndexMap<String, i64>,
    limit: usize,
    strategy: RankStrategy,
    current: Option<&str>,
) -> Vec<RankedVersionEntry> {
    let total: i64 = histogram.values().sum();

    // Parse once so the comparator never re-parses; IndexMap iteration order
    // is the encounter order the stable sort preserves on ties.
    let mut entries: Vec<(&str, i64, Option<Version>)> = histogram
        .iter()
        .map(|(version, &count)| (version.as_str(), count, Version::parse(version).ok()))
        .collect();

    match strategy {
        RankStrategy::Count => entries.sort_by(|(_, a, _), (_, b, _)| b.cmp(a)),
        RankStrategy::Semver => entries.sort_by(|(_, _, a), (_, _, b)| match (a, b) {
            // Full Ord on Version includes build metadata in the comparison
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
    }

    entries
        .into_iter()
        .take(limit)
        .map(|(version, count, _)| RankedVersionEntry {
            version: version.to_string(),
            count,
            percentage: if total == 0 {
                0.0
            } else {
                100.0 * count as f64 / total as f64
            },
            is_current: current == Some(version),
        })
        .collect()
}
