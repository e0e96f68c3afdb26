//! Domain-specific assertion macros for zonefeed harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record invariant was violated and for *which* zone.

// ---------------------------------------------------------------------------
// Record invariants
// ---------------------------------------------------------------------------

/// Assert the invariants every emitted record must hold: non-empty code and
/// regions, and a fallback rule (all weekdays, no window) at `tariffs[0]`
/// that is the only fallback-shaped rule.
///
/// ```rust
/// assert_record_invariants!(record);
/// ```
#[macro_export]
macro_rules! assert_record_invariants {
    ($record:expr) => {{
        let record: &zonefeed_core::CanonicalZoneRecord = &$record;
        if record.code.is_empty() {
            panic!("assert_record_invariants! failed: empty code on beacon {}", record.beacon_id);
        }
        if record.regions.is_empty() || record.regions.iter().any(|r| r.points.is_empty()) {
            panic!(
                "assert_record_invariants! failed: zone {:?} has empty regions: {:?}",
                record.code, record.regions
            );
        }
        match record.tariffs.first() {
            Some(first) if first.is_fallback_shaped() => {}
            other => panic!(
                "assert_record_invariants! failed: zone {:?} does not start with the fallback rule.\n  first: {:?}",
                record.code, other
            ),
        }
        let fallbacks = record.tariffs.iter().filter(|t| t.is_fallback_shaped()).count();
        if fallbacks != 1 {
            panic!(
                "assert_record_invariants! failed: zone {:?} has {} fallback-shaped rules",
                record.code, fallbacks
            );
        }
    }};
}

/// Assert the codes of a record batch, in order.
///
/// ```rust
/// assert_codes!(records, ["EP12", "EP7"]);
/// ```
#[macro_export]
macro_rules! assert_codes {
    ($records:expr, [$($code:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $records.iter().map(|r| r.code.as_str()).collect();
        let expected: Vec<&str> = vec![$($code),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_codes! failed");
    }};
}

// ---------------------------------------------------------------------------
// Tariff assertions
// ---------------------------------------------------------------------------

/// Assert one tariff rule's days, window and price table.
///
/// ```rust
/// assert_tariff!(record.tariffs[1], days: [1, 2, 3, 4, 5], window: Some((28_800, 64_800)), prices: [(3_600, 150)]);
/// ```
#[macro_export]
macro_rules! assert_tariff {
    ($rule:expr, days: [$($day:expr),*], window: $window:expr, prices: [$(($period:expr, $price:expr)),* $(,)?]) => {{
        let rule: &zonefeed_core::TariffRule = &$rule;
        let days: Vec<u8> = rule.days.iter().collect();
        pretty_assertions::assert_eq!(days, vec![$($day),*], "assert_tariff! days");
        let window: Option<(u32, u32)> = $window;
        pretty_assertions::assert_eq!(
            rule.window.map(|w| (w.start, w.end)),
            window,
            "assert_tariff! window"
        );
        let prices: std::collections::BTreeMap<u32, u32> = [$(($period, $price)),*].into_iter().collect();
        pretty_assertions::assert_eq!(rule.prices, prices, "assert_tariff! prices");
    }};
}

/// Assert that every rule of a record carries the same free period.
#[macro_export]
macro_rules! assert_free_period {
    ($record:expr, $expected:expr) => {{
        let record: &zonefeed_core::CanonicalZoneRecord = &$record;
        let expected: Option<u32> = $expected;
        for (i, rule) in record.tariffs.iter().enumerate() {
            if rule.free_period != expected {
                panic!(
                    "assert_free_period! failed on zone {:?} tariff {}:\n  expected: {:?}\n  actual:   {:?}",
                    record.code, i, expected, rule.free_period
                );
            }
        }
    }};
}
