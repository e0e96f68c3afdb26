//! Opening-hours text to `(weekdays, window)` schedule entries.
//!
//! Parsing is attempted in order:
//!
//! 1. seasonal-only strings → no entries
//! 2. always-open strings → one all-week entry (window = caller override)
//! 3. exact full-sentence literals → their fixed entries
//! 4. comma-separated clauses, each either a clause literal or
//!    `<day>[-<day>] <HH:MM>-<HH:MM>`
//!
//! Literals take precedence over the clause grammar because they do not
//! conform to it. Day tokens outside the fixed table are fatal: a new
//! abbreviation needs a new table row, not a guess. So is a clause whose
//! hours part is anything other than a single time range, since the extra
//! text usually carries more days.

use crate::error::{NormalizeError, Result};
use crate::timestamp::clock_seconds;
use crate::types::{TimeWindow, WeekdaySet};
use lazy_static::lazy_static;
use phf::{phf_map, phf_set};
use regex::Regex;

/// One parsed schedule entry. `window: None` means the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub days: WeekdaySet,
    pub window: Option<TimeWindow>,
}

impl ScheduleEntry {
    pub const fn new(days: WeekdaySet, window: Option<TimeWindow>) -> Self {
        Self { days, window }
    }

    const fn hours(days: WeekdaySet, start: u32, end: u32) -> Self {
        Self::new(days, Some(TimeWindow::hours(start, end)))
    }
}

// ---------------------------------------------------------------------------
// Literal tables
// ---------------------------------------------------------------------------

/// Zones that are only paid during a season; they get no year-round entry.
static SEASONAL: phf::Set<&'static str> = phf_set! {
    "15. mai - 15. september 10:00-22:00",
    "1. juuni - 31. august iga päev 10:00-18:00",
};

static ALWAYS_OPEN: phf::Set<&'static str> = phf_set! {
    "",
    "24/7",
    "24h",
    "24 h",
    "7/24",
    "E/P 24h",
    "E-P 24",
    "E-P 24h",
};

static SENTENCE_LITERALS: phf::Map<&'static str, &'static [ScheduleEntry]> = phf_map! {
    "Open 24/7. Parking is paid from 8AM to6 PM." => &[ScheduleEntry::hours(WeekdaySet::ALL, 8, 18)],
    "Parking is paid 8AM to 6 PM" => &[ScheduleEntry::hours(WeekdaySet::ALL, 8, 18)],
    "Parking is paid on business days from 7 AM to 6 PM." => &[ScheduleEntry::hours(WeekdaySet::WORKDAYS, 7, 18)],
    "24/7, parking is paid 22:00 - 08:00." => &[ScheduleEntry::hours(WeekdaySet::ALL, 22, 8)],
    "Parking is paid 22 PM to 8 AM" => &[ScheduleEntry::hours(WeekdaySet::ALL, 22, 8)],
    "Parking is paid 7AM to 10PM" => &[ScheduleEntry::hours(WeekdaySet::ALL, 7, 22)],
    "Parking is paid 7AM to 7PM" => &[ScheduleEntry::hours(WeekdaySet::ALL, 7, 19)],
    "From 7 AM to 9 PM" => &[ScheduleEntry::hours(WeekdaySet::ALL, 7, 21)],
    "5:00-22:00" => &[ScheduleEntry::hours(WeekdaySet::ALL, 5, 22)],
};

/// Clauses with two day ranges concatenated, which the grammar cannot express.
static CLAUSE_LITERALS: phf::Map<&'static str, &'static [ScheduleEntry]> = phf_map! {
    "Mon-Fri 08:00-19:00 Sat 11:00-17:00" => &[
        ScheduleEntry::hours(WeekdaySet::WORKDAYS, 8, 19),
        ScheduleEntry::hours(WeekdaySet::single(6), 11, 17),
    ],
};

/// Estonian single letters and English three-letter abbreviations.
static DAY_TOKENS: phf::Map<&'static str, u8> = phf_map! {
    "E" => 1, "Mon" => 1,
    "T" => 2, "Tue" => 2,
    "K" => 3, "Wed" => 3,
    "N" => 4, "Thu" => 4,
    "R" => 5, "Fri" => 5,
    "L" => 6, "Sat" => 6,
    "P" => 7, "Sun" => 7,
};

lazy_static! {
    /// Whitespace, including HTML-escaped non-breaking spaces.
    static ref SEPARATOR: Regex = Regex::new(r"(?:\s|&nbsp;)+").expect("SEPARATOR regex to compile");
    static ref TIME_RANGE: Regex =
        Regex::new(r"^(?P<sh>\d{1,2}):(?P<sm>\d{2})\s*[-–]\s*(?P<eh>\d{1,2}):(?P<em>\d{2})$")
            .expect("TIME_RANGE regex to compile");
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse an opening-hours string.
///
/// `override_window` replaces the (absent) window of always-open schedules,
/// e.g. when a zone note says parking is only paid overnight.
pub fn parse_schedule(
    text: &str,
    override_window: Option<TimeWindow>,
) -> Result<Vec<ScheduleEntry>> {
    let text = text.trim();

    if SEASONAL.contains(text) {
        tracing::debug!(schedule = text, "seasonal schedule, no year-round entry");
        return Ok(Vec::new());
    }

    if ALWAYS_OPEN.contains(text) {
        return Ok(vec![ScheduleEntry::new(WeekdaySet::ALL, override_window)]);
    }

    if let Some(entries) = SENTENCE_LITERALS.get(text) {
        return Ok(entries.to_vec());
    }

    let mut entries = Vec::new();
    for clause in text.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        match CLAUSE_LITERALS.get(clause) {
            Some(literal) => entries.extend_from_slice(literal),
            None => entries.push(parse_clause(clause, text)?),
        }
    }
    Ok(entries)
}

/// `<day>[-<day>] [<HH:MM>-<HH:MM>]`
fn parse_clause(clause: &str, schedule: &str) -> Result<ScheduleEntry> {
    let mut parts = SEPARATOR.splitn(clause, 2);
    let day_part = parts.next().unwrap_or_default();
    let hours_part = parts.next();

    let (start_token, end_token) = match day_part.split_once('-') {
        Some((start, end)) => (start, end),
        None => (day_part, day_part),
    };
    let start = day_number(start_token, schedule)?;
    let end = day_number(end_token, schedule)?;
    if start > end {
        return Err(NormalizeError::ReversedDayRange {
            clause: clause.to_string(),
            schedule: schedule.to_string(),
        });
    }

    let window = match hours_part.map(str::trim) {
        None | Some("") => None,
        Some(hours) => {
            let captures = TIME_RANGE.captures(hours).ok_or_else(|| NormalizeError::UnparsableClause {
                clause: clause.to_string(),
                schedule: schedule.to_string(),
            })?;
            let window = time_window(&captures);
            if window.is_none() {
                tracing::warn!(clause, "time range outside the clock, treating clause as whole-day");
            }
            window
        }
    };

    Ok(ScheduleEntry::new(WeekdaySet::range(start, end), window))
}

fn day_number(token: &str, schedule: &str) -> Result<u8> {
    DAY_TOKENS
        .get(token)
        .copied()
        .ok_or_else(|| NormalizeError::UnknownDayToken {
            token: token.to_string(),
            schedule: schedule.to_string(),
        })
}

fn time_window(captures: &regex::Captures<'_>) -> Option<TimeWindow> {
    let number = |name: &str| captures[name].parse::<u32>().ok();

    let start = clock_seconds(number("sh")?, number("sm")?)?;
    let end = clock_seconds(number("eh")?, number("em")?)?;
    Some(TimeWindow::new(start, end))
}
