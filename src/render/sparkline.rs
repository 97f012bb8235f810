//! Block-character sparkline for the daily download series

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders a numeric series as a one-line sparkline, oldest value first.
///
/// Levels are scaled against the series maximum. Non-positive values draw at
/// the lowest level; an empty series renders as an empty string.
pub fn sparkline(series: &[i64]) -> String {
    let Some(max) = series.iter().copied().max().filter(|&m| m > 0) else {
        return BARS[0].to_string().repeat(series.len());
    };

    series
        .iter()
        .map(|&v| {
            let level = (v.max(0) * (BARS.len() as i64 - 1)) / max;
            BARS[level as usize]
        })
        .collect()
}
