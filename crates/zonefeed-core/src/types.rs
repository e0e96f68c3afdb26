//! Core types for zonefeed-core.
//!
//! This module defines the canonical data model shared by every normalization
//! stage: the per-zone [`CanonicalZoneRecord`], its [`TariffRule`]s and
//! [`CanonicalRegion`]s, plus the small value types they are built from.
//!
//! The serde representation of these types *is* the output format consumed
//! by the downstream application, so field names follow the wire names
//! (`beacon-minor`, `periods`, `free-period`, ...).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub const SECONDS_IN_MINUTE: u32 = 60;
pub const SECONDS_IN_HOUR: u32 = 3_600;
pub const SECONDS_IN_DAY: u32 = 86_400;

/// Length of a billing period, in seconds.
pub type DurationSeconds = u32;

/// Seconds since local midnight, always in `[0, 86400)`.
pub type ClockSeconds = u32;

/// Price in minor currency units (euro cents).
pub type Price = u32;

// ---------------------------------------------------------------------------
// WeekdaySet
// ---------------------------------------------------------------------------

/// A set of ISO weekdays, Monday = 1 … Sunday = 7.
///
/// Stored as a bitmask; bit `d - 1` is set when weekday `d` is a member.
/// Serialized as an ascending array of day numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const ALL: WeekdaySet = WeekdaySet(0b111_1111);
    pub const WORKDAYS: WeekdaySet = WeekdaySet(0b001_1111);

    pub const fn empty() -> Self {
        WeekdaySet(0)
    }

    /// Inclusive range `start..=end`. A reversed or out-of-range pair yields
    /// the empty set; there is no wraparound past Sunday.
    pub const fn range(start: u8, end: u8) -> Self {
        if start == 0 || end > 7 || start > end {
            return WeekdaySet(0);
        }
        let upto_end = (1u8 << end) - 1;
        let below_start = (1u8 << (start - 1)) - 1;
        WeekdaySet(upto_end & !below_start)
    }

    pub const fn single(day: u8) -> Self {
        Self::range(day, day)
    }

    /// Add `day` to the set. Returns `false` (and leaves the set untouched)
    /// when `day` is not in `1..=7`.
    pub fn insert(&mut self, day: u8) -> bool {
        if !(1..=7).contains(&day) {
            return false;
        }
        self.0 |= 1 << (day - 1);
        true
    }

    pub fn contains(&self, day: u8) -> bool {
        (1..=7).contains(&day) && self.0 & (1 << (day - 1)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_all(&self) -> bool {
        *self == Self::ALL
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Member days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=7u8).filter(move |day| self.contains(*day))
    }
}

impl FromIterator<u8> for WeekdaySet {
    /// Out-of-range days are ignored; use [`WeekdaySet::insert`] to detect them.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<u8>::deserialize(deserializer)?;
        let mut set = WeekdaySet::empty();
        for day in days {
            if !set.insert(day) {
                return Err(serde::de::Error::custom(format!(
                    "weekday {day} is outside 1..=7"
                )));
            }
        }
        if set.is_empty() {
            return Err(serde::de::Error::custom("weekday set must not be empty"));
        }
        Ok(set)
    }
}

// ---------------------------------------------------------------------------
// TimeWindow
// ---------------------------------------------------------------------------

/// A daily clock window. `end < start` means the window spans midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub start: ClockSeconds,
    pub end: ClockSeconds,
}

impl TimeWindow {
    pub const fn new(start: ClockSeconds, end: ClockSeconds) -> Self {
        Self { start, end }
    }

    /// Window between two whole hours, e.g. `hours(22, 8)`.
    pub const fn hours(start: u32, end: u32) -> Self {
        Self::new(start * SECONDS_IN_HOUR, end * SECONDS_IN_HOUR)
    }

    pub fn spans_midnight(&self) -> bool {
        self.end < self.start
    }
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// A (latitude, longitude) pair. Serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lat, value.lng]
    }
}

/// One closed ring describing part of a zone. A single point is a degenerate
/// one-point ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRegion {
    pub points: Vec<Coordinate>,
}

// ---------------------------------------------------------------------------
// Tariffs
// ---------------------------------------------------------------------------

/// One weekday/time-scoped price table for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TariffRuleWire", into = "TariffRuleWire")]
pub struct TariffRule {
    pub days: WeekdaySet,
    pub window: Option<TimeWindow>,
    pub prices: BTreeMap<DurationSeconds, Price>,
    pub free_period: Option<DurationSeconds>,
}

impl TariffRule {
    /// The all-week, all-day rule with an empty price table.
    pub fn fallback() -> Self {
        Self::scoped(WeekdaySet::ALL, None)
    }

    pub fn scoped(days: WeekdaySet, window: Option<TimeWindow>) -> Self {
        Self {
            days,
            window,
            prices: BTreeMap::new(),
            free_period: None,
        }
    }

    /// All seven weekdays and no time window.
    pub fn is_fallback_shaped(&self) -> bool {
        self.days.is_all() && self.window.is_none()
    }
}

/// Wire shape of a [`TariffRule`]: the window is flattened into optional
/// `start` / `end` fields.
#[derive(Serialize, Deserialize)]
struct TariffRuleWire {
    days: WeekdaySet,
    periods: BTreeMap<DurationSeconds, Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<ClockSeconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<ClockSeconds>,
    #[serde(rename = "free-period", default, skip_serializing_if = "Option::is_none")]
    free_period: Option<DurationSeconds>,
}

impl From<TariffRule> for TariffRuleWire {
    fn from(rule: TariffRule) -> Self {
        Self {
            days: rule.days,
            periods: rule.prices,
            start: rule.window.map(|w| w.start),
            end: rule.window.map(|w| w.end),
            free_period: rule.free_period,
        }
    }
}

impl TryFrom<TariffRuleWire> for TariffRule {
    type Error = String;

    fn try_from(wire: TariffRuleWire) -> Result<Self, Self::Error> {
        let window = match (wire.start, wire.end) {
            (Some(start), Some(end)) if start < SECONDS_IN_DAY && end < SECONDS_IN_DAY => {
                Some(TimeWindow::new(start, end))
            }
            (None, None) => None,
            (start, end) => {
                return Err(format!(
                    "tariff window must have both start and end within a day, got {start:?}..{end:?}"
                ))
            }
        };
        Ok(Self {
            days: wire.days,
            window,
            prices: wire.periods,
            free_period: wire.free_period,
        })
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Zone-level overrides derived from a provider's free-text special message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneModifiers {
    /// The zone cannot be paid for through the app; drop it.
    pub ignore_zone: bool,
    /// Replaces the window of an always-open schedule.
    pub override_window: Option<TimeWindow>,
    /// Free time granted before billing starts.
    pub free_initial_period: Option<DurationSeconds>,
}

impl ZoneModifiers {
    pub fn ignored() -> Self {
        Self {
            ignore_zone: true,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// The normalised, provider-independent description of one parking zone.
///
/// `tariffs[0]` is always the fallback rule (see [`TariffRule::fallback`]),
/// `regions` and `code` are never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalZoneRecord {
    #[serde(rename = "beacon-minor")]
    pub beacon_id: u64,
    #[serde(rename = "provider")]
    pub provider_id: u32,
    pub code: String,
    pub regions: Vec<CanonicalRegion>,
    pub tariffs: Vec<TariffRule>,
}
