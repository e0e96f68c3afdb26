//! Tariff assembler — price lists, price tables and schedules → ordered [`TariffRule`]s.
//!
//! Every assembled sequence starts with the fallback rule (all weekdays, no
//! window), followed by the scoped rules in source order. The fallback is the
//! only fallback-shaped rule in the output: scoped input that turns out to
//! cover the whole week without a window is merged into it.

use crate::duration::parse_duration;
use crate::error::{NormalizeError, Result};
use crate::price::parse_price;
use crate::schedule::ScheduleEntry;
use crate::timestamp::parse_timestamp;
use crate::types::{DurationSeconds, Price, TariffRule, TimeWindow, WeekdaySet, ZoneModifiers};
use std::collections::BTreeMap;

/// Period → price table of one zone.
pub type PriceTable = BTreeMap<DurationSeconds, Price>;

/// A structured price-list entry (Europark style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceListEntry {
    /// Free-text period, e.g. `"2 HOURS"`.
    pub period: String,
    /// Already in minor units.
    pub amount: Price,
    pub restrictions: Vec<Restriction>,
}

/// Day/time scope of a price-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    /// One digit per weekday, e.g. `"12345"`.
    pub weekdays: String,
    pub start_time: String,
    pub end_time: String,
}

/// A textual price-table row (parkimine.ee style), e.g. `("1 hour", "1.50 €")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    pub period: String,
    pub price: String,
}

/// Parse a weekday digit string such as `"135"`. Each character is the day
/// number itself; anything other than `1`–`7` is fatal.
pub fn parse_weekday_digits(digits: &str) -> Result<WeekdaySet> {
    let mut days = WeekdaySet::empty();
    for c in digits.chars() {
        let inserted = c.to_digit(10).is_some_and(|d| days.insert(d as u8));
        if !inserted {
            return Err(NormalizeError::InvalidWeekdayDigit(digits.to_string()));
        }
    }
    if days.is_empty() {
        return Err(NormalizeError::InvalidWeekdayDigit(digits.to_string()));
    }
    Ok(days)
}

/// Assemble rules from a structured price list.
///
/// Entries with an unsupported period are dropped. Unrestricted entries feed
/// the fallback; each restriction of a restricted entry becomes its own rule.
pub fn assemble_price_list(
    entries: &[PriceListEntry],
    modifiers: Option<&ZoneModifiers>,
) -> Result<Vec<TariffRule>> {
    let mut fallback = TariffRule::fallback();
    let mut scoped = Vec::new();

    for entry in entries {
        let Some(duration) = parse_duration(&entry.period) else {
            continue;
        };

        if entry.restrictions.is_empty() {
            fallback.prices.insert(duration, entry.amount);
            continue;
        }

        for restriction in &entry.restrictions {
            let days = parse_weekday_digits(&restriction.weekdays)?;
            let window = match (
                parse_timestamp(&restriction.start_time),
                parse_timestamp(&restriction.end_time),
            ) {
                (Some(start), Some(end)) => Some(TimeWindow::new(start, end)),
                _ => {
                    tracing::warn!(
                        start = %restriction.start_time,
                        end = %restriction.end_time,
                        "unreadable restriction times, rule applies all day"
                    );
                    None
                }
            };

            let mut rule = TariffRule::scoped(days, window);
            rule.prices.insert(duration, entry.amount);
            push_scoped(&mut fallback, &mut scoped, rule);
        }
    }

    Ok(finish(fallback, scoped, modifiers.and_then(|m| m.free_initial_period)))
}

/// Parse textual price rows into a table. Rows with unsupported periods are
/// dropped; an unreadable price aborts.
pub fn parse_price_table(rows: &[PriceRow]) -> Result<PriceTable> {
    let mut table = PriceTable::new();
    for row in rows {
        let Some(duration) = parse_duration(&row.period) else {
            continue;
        };
        table.insert(duration, parse_price(&row.price)?);
    }
    Ok(table)
}

/// Assemble rules from schedule entries sharing one price table.
///
/// Whole-week, whole-day entries price the fallback; every other entry
/// becomes a rule scoped to its days and window.
pub fn assemble_schedule(
    schedule: &[ScheduleEntry],
    prices: &PriceTable,
    modifiers: Option<&ZoneModifiers>,
) -> Vec<TariffRule> {
    let mut fallback = TariffRule::fallback();
    let mut scoped = Vec::new();

    for entry in schedule {
        let mut rule = TariffRule::scoped(entry.days, entry.window);
        rule.prices = prices.clone();
        push_scoped(&mut fallback, &mut scoped, rule);
    }

    finish(fallback, scoped, modifiers.and_then(|m| m.free_initial_period))
}

/// A single fallback rule with a fixed table.
pub fn assemble_flat(prices: PriceTable, free_period: Option<DurationSeconds>) -> Vec<TariffRule> {
    let mut fallback = TariffRule::fallback();
    fallback.prices = prices;
    finish(fallback, Vec::new(), free_period)
}

fn push_scoped(fallback: &mut TariffRule, scoped: &mut Vec<TariffRule>, rule: TariffRule) {
    if rule.is_fallback_shaped() {
        fallback.prices.extend(rule.prices);
    } else {
        scoped.push(rule);
    }
}

fn finish(
    fallback: TariffRule,
    scoped: Vec<TariffRule>,
    free_period: Option<DurationSeconds>,
) -> Vec<TariffRule> {
    std::iter::once(fallback)
        .chain(scoped)
        .map(|mut rule| {
            rule.free_period = free_period;
            rule
        })
        .collect()
}
