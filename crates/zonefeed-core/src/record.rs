//! Canonical record builder. Turns one provider-neutral [`RawZone`] into at most one
//! [`CanonicalZoneRecord`].
//!
//! A zone is dropped (not an error) when its code is empty, its modifiers say
//! to ignore it, or no region can be derived from its geometry. Fatal parse
//! errors propagate and abort the whole batch.

use crate::error::Result;
use crate::geometry::{normalize_features, GeometryFeature};
use crate::modifiers::parse_modifiers;
use crate::schedule::parse_schedule;
use crate::tariff::{
    assemble_flat, assemble_price_list, assemble_schedule, parse_price_table, PriceListEntry,
    PriceRow, PriceTable,
};
use crate::types::{CanonicalZoneRecord, DurationSeconds, TariffRule};

/// Where a zone's pricing comes from. Each provider flow supplies one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TariffSource {
    /// Structured entries with optional weekday/time restrictions.
    PriceList(Vec<PriceListEntry>),
    /// An opening-hours string plus a textual price table.
    OpeningHours {
        opening_hours: String,
        prices: Vec<PriceRow>,
    },
    /// A ready price table applying all week.
    Flat {
        prices: PriceTable,
        free_period: Option<DurationSeconds>,
    },
}

/// A zone as handed over by a provider adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct RawZone {
    pub beacon_id: u64,
    pub provider_id: u32,
    pub code: String,
    pub geometry: Vec<GeometryFeature>,
    /// Free-text operator note ("important message"), if any.
    pub message: Option<String>,
    pub tariffs: TariffSource,
}

/// Build the canonical record for one zone, or `None` if it is dropped.
pub fn build_record(zone: RawZone) -> Result<Option<CanonicalZoneRecord>> {
    let code = zone.code.trim();
    if code.is_empty() {
        tracing::debug!(beacon = zone.beacon_id, "dropping zone without code");
        return Ok(None);
    }

    let modifiers = parse_modifiers(zone.message.as_deref());
    if modifiers.is_some_and(|m| m.ignore_zone) {
        tracing::info!(code, beacon = zone.beacon_id, "zone ignored by its operator note");
        return Ok(None);
    }

    let regions = normalize_features(&zone.geometry);
    if regions.is_empty() {
        tracing::warn!(code, beacon = zone.beacon_id, "dropping zone without geometry");
        return Ok(None);
    }

    tracing::info!(code, beacon = zone.beacon_id, "normalizing zone");
    let tariffs = match zone.tariffs {
        TariffSource::PriceList(entries) => assemble_price_list(&entries, modifiers.as_ref())?,
        TariffSource::OpeningHours {
            opening_hours,
            prices,
        } => {
            let override_window = modifiers.and_then(|m| m.override_window);
            let schedule = parse_schedule(&opening_hours, override_window)?;
            let prices = parse_price_table(&prices)?;
            assemble_schedule(&schedule, &prices, modifiers.as_ref())
        }
        TariffSource::Flat {
            prices,
            free_period,
        } => {
            let free_period = modifiers
                .and_then(|m| m.free_initial_period)
                .or(free_period);
            assemble_flat(prices, free_period)
        }
    };
    debug_assert!(tariffs.first().is_some_and(TariffRule::is_fallback_shaped));

    Ok(Some(CanonicalZoneRecord {
        beacon_id: zone.beacon_id,
        provider_id: zone.provider_id,
        code: code.to_string(),
        regions,
        tariffs,
    }))
}

/// Normalize a batch strictly in input order. The first fatal error aborts
/// the batch; nothing partial is returned.
pub fn normalize_batch<I>(zones: I) -> Result<Vec<CanonicalZoneRecord>>
where
    I: IntoIterator<Item = RawZone>,
{
    let mut records = Vec::new();
    let mut seen = 0usize;
    for zone in zones {
        seen += 1;
        if let Some(record) = build_record(zone)? {
            records.push(record);
        }
    }
    tracing::info!(emitted = records.len(), seen, "batch normalized");
    Ok(records)
}
