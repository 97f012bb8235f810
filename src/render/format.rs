//! Compact number formatting for card labels

/// Formats a count in the abbreviated style used across the card
/// ("987", "12.3k", "4.5M", "1.2B").
///
/// One decimal place, trimmed when it would be ".0". Display only; the
/// ranking math never goes through here.
pub fn abbreviate(n: i64) -> String {
    let (value, suffix) = match n.abs() {
        0..=999 => return n.to_string(),
        1_000..=999_999 => (n as f64 / 1_000.0, "k"),
        1_000_000..=999_999_999 => (n as f64 / 1_000_000.0, "M"),
        _ => (n as f64 / 1_000_000_000.0, "B"),
    };

    let formatted = format!("{:.1}", value);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", trimmed, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1k")]
    #[case(12_345, "12.3k")]
    #[case(999_949, "999.9k")]
    #[case(4_500_000, "4.5M")]
    #[case(230_000, "230k")]
    #[case(1_200_000_000, "1.2B")]
    #[case(-12_345, "-12.3k")]
    fn abbreviates_counts(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(abbreviate(n), expected);
    }
}
