//! Period descriptors (`"2 HOURS"`, `"Every started 15 min"`, ...) to seconds.
//!
//! Rules are evaluated in table order and the first match wins. Matching is
//! case-insensitive because providers disagree on casing (`"30 MINUTES"` vs
//! `"30 min"`). An unresolvable descriptor is not an error: the caller drops
//! that single price entry.

use crate::types::{DurationSeconds, SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// How a matching rule turns the descriptor into a duration.
enum Extract {
    /// Multiply the `count` capture by a unit.
    Count(u32),
    /// A fixed duration for a literal descriptor.
    Fixed(DurationSeconds),
    /// Known descriptor we deliberately do not support.
    Deferred,
}

struct PeriodRule {
    name: &'static str,
    matcher: Regex,
    extract: Extract,
}

fn rule(name: &'static str, pattern: &str, extract: Extract) -> PeriodRule {
    PeriodRule {
        name,
        matcher: RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("period rule regex to compile"),
        extract,
    }
}

lazy_static! {
    static ref PERIOD_RULES: Vec<PeriodRule> = vec![
        rule(
            "every_started_minutes",
            r"every (?:started )?(?P<count>\d+) min(?:ute)?s?",
            Extract::Count(SECONDS_IN_MINUTE),
        ),
        rule("minutes", r"(?P<count>\d+) min(?:ute)?s?", Extract::Count(SECONDS_IN_MINUTE)),
        rule("hours", r"(?P<count>\d+) hours?", Extract::Count(SECONDS_IN_HOUR)),
        rule("days", r"(?P<count>\d+) days?", Extract::Count(SECONDS_IN_DAY)),
        rule("bare_hour", r"^hour$", Extract::Fixed(SECONDS_IN_HOUR)),
        // Monthly and yearly passes have no duration bucket in the app yet.
        rule("month_or_year", r"^1 (?:month|year)$", Extract::Deferred),
    ];
}

/// Resolve a free-text period descriptor to seconds.
///
/// Returns `None` for unsupported descriptors. Unknown ones are reported with
/// a warning; the deliberately deferred `"1 month"` / `"1 year"` are not.
pub fn parse_duration(period: &str) -> Option<DurationSeconds> {
    let period = period.trim();

    for rule in PERIOD_RULES.iter() {
        let Some(captures) = rule.matcher.captures(period) else {
            continue;
        };

        return match rule.extract {
            Extract::Count(unit) => {
                let seconds = captures["count"]
                    .parse::<u32>()
                    .ok()
                    .and_then(|count| count.checked_mul(unit));
                if seconds.is_none() {
                    tracing::warn!(period, rule = rule.name, "period count out of range");
                }
                seconds
            }
            Extract::Fixed(seconds) => Some(seconds),
            Extract::Deferred => {
                tracing::debug!(period, "period deliberately unsupported");
                None
            }
        };
    }

    tracing::warn!(period, "unknown period format");
    None
}
