//! parkimine.ee adapter — opening-hours flow.
//!
//! The list endpoint gives each zone's title, opening hours and areas. The
//! `details` object holds the already-extracted content of each zone's detail
//! page, keyed by zone id: an optional label, the price table rows and the
//! optional "important message".

use crate::{sanitize_code, ProviderAdapter};
use serde::Deserialize;
use std::collections::HashMap;
use zonefeed_core::geometry::{Geometry, GeometryFeature, LatLng};
use zonefeed_core::tariff::PriceRow;
use zonefeed_core::{RawZone, Result, TariffSource};

const PARKING_MACHINE_PREFIX: &str = "Parking machine";
const BUY_CELL: &str = "Buy";

// ---------------------------------------------------------------------------
// Payload shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ParkiminePayload {
    pub items: Vec<ParkimineItem>,
    /// Detail pages are validated one by one; a bad detail only degrades its
    /// own zone.
    #[serde(default)]
    pub details: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ParkimineItem {
    pub id: u64,
    pub title: String,
    pub opened: String,
    pub areas: Vec<Area>,
}

#[derive(Debug, Deserialize)]
pub struct Area {
    pub points: Vec<LatLng>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ParkimineDetail {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub important_message: Option<String>,
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct Parkimine;

impl ProviderAdapter for Parkimine {
    const NAME: &'static str = "parkimine";
    type Payload = ParkiminePayload;

    fn into_zones(mut payload: ParkiminePayload, provider_id: u32) -> Result<Vec<RawZone>> {
        let mut zones = Vec::with_capacity(payload.items.len());
        for item in payload.items {
            if item.title.starts_with(PARKING_MACHINE_PREFIX) {
                tracing::debug!(id = item.id, title = %item.title, "skipping parking machine");
                continue;
            }
            let detail = take_detail(&mut payload.details, item.id);
            zones.push(lower_zone(item, detail, provider_id));
        }
        Ok(zones)
    }
}

fn take_detail(details: &mut HashMap<String, serde_json::Value>, id: u64) -> ParkimineDetail {
    let Some(value) = details.remove(&id.to_string()) else {
        tracing::warn!(id, "zone detail unavailable, continuing without prices");
        return ParkimineDetail::default();
    };
    serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::warn!(id, error = %err, "zone detail malformed, continuing without prices");
        ParkimineDetail::default()
    })
}

fn lower_zone(item: ParkimineItem, detail: ParkimineDetail, provider_id: u32) -> RawZone {
    let code = zone_code(detail.label.as_deref(), &item.title);

    let geometry = item
        .areas
        .into_iter()
        .map(|area| GeometryFeature::new(Geometry::Path(area.points)))
        .collect();

    let prices = detail.rows.iter().filter_map(|row| price_row(row)).collect();

    RawZone {
        beacon_id: item.id,
        provider_id,
        code,
        geometry,
        message: detail.important_message.map(|m| m.trim().to_string()),
        tariffs: TariffSource::OpeningHours {
            opening_hours: item.opened.trim().to_string(),
            prices,
        },
    }
}

/// Last whitespace token of the label, or of the title without one.
fn zone_code(label: Option<&str>, title: &str) -> String {
    let source = label.map(str::trim).filter(|l| !l.is_empty()).unwrap_or(title);
    source
        .split_whitespace()
        .last()
        .map(sanitize_code)
        .unwrap_or_default()
}

/// Reduce a table row to `(period, price)`. Header rows have no cells and
/// yield nothing.
fn price_row(cells: &[String]) -> Option<PriceRow> {
    let mut cells = cells
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| *cell != BUY_CELL && !cell.is_empty());
    let period = cells.next()?;
    let price = cells.next().unwrap_or_default();
    Some(PriceRow {
        period: period.to_string(),
        price: price.to_string(),
    })
}
