//! `H:MM:SS` clock text → seconds since midnight.

use crate::types::ClockSeconds;
use chrono::{NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLOCK: Regex = Regex::new(r"(?P<h>\d{1,2}):(?P<m>\d{2}):(?P<s>\d{2})")
        .expect("CLOCK regex to compile");
}

/// Parse restriction clock text such as `"08:30:00"`.
///
/// Returns `None` when the text does not look like a clock or names a time
/// that does not exist (`"25:00:00"`).
pub fn parse_timestamp(text: &str) -> Option<ClockSeconds> {
    let captures = CLOCK.captures(text)?;
    let field = |name: &str| captures[name].parse::<u32>().ok();

    let time = NaiveTime::from_hms_opt(field("h")?, field("m")?, field("s")?);
    if time.is_none() {
        tracing::warn!(text, "clock value out of range");
    }
    time.map(|t| t.num_seconds_from_midnight())
}

/// Seconds since midnight for an `hour:minute` pair, if it is a valid clock.
pub(crate) fn clock_seconds(hour: u32, minute: u32) -> Option<ClockSeconds> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(|t| t.num_seconds_from_midnight())
}
