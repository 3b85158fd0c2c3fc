//! Duration parsing for estimate and worked-time columns
//!
//! Exports render durations either as raw seconds (`12600`) or as text
//! (`3 hours, 30 minutes`). Anything unparseable counts as zero.

use std::sync::LazyLock;

use regex::Regex;

static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*hours?").expect("hours pattern is valid"));

static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*minutes?").expect("minutes pattern is valid"));

/// Parse a duration field into whole seconds
///
/// # Examples
///
/// ```
/// use sprint_health::core::services::parse_duration;
///
/// assert_eq!(parse_duration("12600"), 12600);
/// assert_eq!(parse_duration("3 hours, 30 minutes"), 12600);
/// assert_eq!(parse_duration("45 minutes"), 2700);
/// assert_eq!(parse_duration("soon"), 0);
/// ```
#[must_use]
pub fn parse_duration(raw: &str) -> u64 {
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" {
        return 0;
    }

    let lower = raw.to_lowercase();
    if lower.contains("hour") || lower.contains("minute") {
        let hours = leading_amount(&HOURS, raw);
        let minutes = leading_amount(&MINUTES, raw);
        return hours.saturating_mul(3600).saturating_add(minutes.saturating_mul(60));
    }

    // Negative seconds are clamped rather than rejected
    raw.parse::<i64>().map_or(0, |seconds| u64::try_from(seconds).unwrap_or(0))
}

fn leading_amount(pattern: &Regex, raw: &str) -> u64 {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
