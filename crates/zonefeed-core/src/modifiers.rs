//! Zone modifiers from a provider's free-text "important message".
//!
//! Rules are tried in order, first match wins:
//!
//! 1. "call the number on the barrier" prefix → the zone is ignored
//! 2. exact literal messages → override time window
//! 3. "first hour free with parking clock" phrase → one free hour
//! 4. free-period phrasings → the captured phrase goes through
//!    [`parse_duration`]
//!
//! A message none of the rules understand is logged and yields no modifiers.

use crate::duration::parse_duration;
use crate::types::{TimeWindow, ZoneModifiers, SECONDS_IN_HOUR};
use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

const BARRIER_CALL_PREFIX: &str = "Barriers only open when calling the number on the barrier:";

const FIRST_HOUR_WITH_CLOCK: &str = "First hour of free parking if using parking clock";

/// Messages that restrict paid parking to a fixed window. Both the raw
/// HTML-entity form and the decoded en dash are accepted.
static WINDOW_MESSAGES: phf::Map<&'static str, TimeWindow> = phf_map! {
    "Paid parking 23:00 &#8211; 07:00" => TimeWindow::hours(23, 7),
    "Paid parking 23:00 – 07:00" => TimeWindow::hours(23, 7),
    "Parking is paid 22:00 &#8211; 8:00." => TimeWindow::hours(22, 8),
    "Parking is paid 22:00 – 8:00." => TimeWindow::hours(22, 8),
};

/// Capture group names in priority order. When several could apply, the
/// earliest name in this list decides which phrase is used.
const FREE_PERIOD_GROUPS: [&str; 8] = [
    "period1", "period2", "period3", "period4", "period5", "period6", "period7", "period8",
];

lazy_static! {
    static ref FREE_PERIOD: Regex = Regex::new(concat!(
        r"(Free parking (first )?(?P<period1>.*?) when)",
        r"|((?P<period2>.*?) (of )?free parking)",
        r"|(First (?P<period3>.*?) of parking free)",
        r"|(for the first (?P<period4>.*?) free of charge)",
        r"|(fixed start time parking is free for (?P<period5>.*?)\.)",
        r"|(Free parking during first (?P<period6>.*?) with parking clock)",
        r"|(First (?P<period7>.*?) of parking free if using parking clock)",
        r"|(is free for (?P<period8>[^.]+))",
    ))
    .expect("FREE_PERIOD regex to compile");
}

/// Derive zone modifiers from an optional message.
///
/// `None` means "no modifiers", which is not an error whether the message was
/// absent or simply not understood.
pub fn parse_modifiers(message: Option<&str>) -> Option<ZoneModifiers> {
    let message = message?;

    if message.starts_with(BARRIER_CALL_PREFIX) {
        return Some(ZoneModifiers::ignored());
    }

    if let Some(window) = WINDOW_MESSAGES.get(message) {
        return Some(ZoneModifiers {
            override_window: Some(*window),
            ..ZoneModifiers::default()
        });
    }

    if message.contains(FIRST_HOUR_WITH_CLOCK) {
        return Some(free_for(SECONDS_IN_HOUR));
    }

    if let Some(seconds) = free_period_phrase(message).and_then(parse_duration) {
        return Some(free_for(seconds));
    }

    if !message.trim().is_empty() {
        tracing::warn!(message, "unrecognized modifier message");
    }
    None
}

fn free_for(seconds: u32) -> ZoneModifiers {
    ZoneModifiers {
        free_initial_period: Some(seconds),
        ..ZoneModifiers::default()
    }
}

/// The free-period phrase of the first non-empty group, in declaration order.
fn free_period_phrase(message: &str) -> Option<&str> {
    let captures = FREE_PERIOD.captures(message)?;
    FREE_PERIOD_GROUPS
        .iter()
        .filter_map(|name| captures.name(name))
        .map(|m| m.as_str())
        .find(|phrase| !phrase.is_empty())
}
