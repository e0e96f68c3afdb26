//! Snabb: flat price flow.
//!
//! The list endpoint gives each location's point; the optional per-location
//! detail adds area geometry, a half-hour and a 24-hour price and a number
//! of free minutes. Every zone gets a single all-week tariff.

use crate::{sanitize_code, ProviderAdapter};
use serde::Deserialize;
use std::collections::HashMap;
use zonefeed_core::geometry::{GeoJsonGeometry, Geometry, GeometryFeature, LatLng};
use zonefeed_core::price::cents_from_euros;
use zonefeed_core::tariff::PriceTable;
use zonefeed_core::types::{DurationSeconds, SECONDS_IN_DAY, SECONDS_IN_MINUTE};
use zonefeed_core::{RawZone, Result, TariffSource};

const HALF_HOUR: DurationSeconds = 30 * SECONDS_IN_MINUTE;

// ---------------------------------------------------------------------------
// Payload shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SnabbPayload {
    pub locations: Vec<SnabbLocation>,
    #[serde(default)]
    pub details: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnabbLocation {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    pub address_text: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zone: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub rent_view: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SnabbDetail {
    #[serde(default)]
    pub areas: Option<Vec<Area>>,
    #[serde(default)]
    pub geojson: Option<GeoJsonFeature>,
    #[serde(rename = "Price24h", default)]
    pub price_24h: Option<f64>,
    #[serde(rename = "HalfHourPrice", default)]
    pub half_hour_price: Option<f64>,
    #[serde(rename = "FreeMinutes", default)]
    pub free_minutes: Option<f64>,
    #[serde(rename = "Polygons", default)]
    pub polygons: Option<Vec<PolygonPath>>,
}

#[derive(Debug, Deserialize)]
pub struct Area {
    pub points: Vec<LatLng>,
}

#[derive(Debug, Deserialize)]
pub struct PolygonPath {
    pub path: Vec<LatLng>,
}

#[derive(Debug, Deserialize)]
pub struct GeoJsonFeature {
    pub geometry: GeoJsonGeometry,
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct Snabb;

impl ProviderAdapter for Snabb {
    const NAME: &'static str = "snabb";
    type Payload = SnabbPayload;

    fn into_zones(mut payload: SnabbPayload, provider_id: u32) -> Result<Vec<RawZone>> {
        payload
            .locations
            .into_iter()
            .map(|location| {
                let detail = take_detail(&mut payload.details, location.id);
                lower_zone(location, detail, provider_id)
            })
            .collect()
    }
}

fn take_detail(details: &mut HashMap<String, serde_json::Value>, id: u64) -> Option<SnabbDetail> {
    let Some(value) = details.remove(&id.to_string()) else {
        tracing::warn!(id, "location detail unavailable, using list point only");
        return None;
    };
    match serde_json::from_value(value) {
        Ok(detail) => Some(detail),
        Err(err) => {
            tracing::warn!(id, error = %err, "location detail malformed, using list point only");
            None
        }
    }
}

fn lower_zone(
    location: SnabbLocation,
    detail: Option<SnabbDetail>,
    provider_id: u32,
) -> Result<RawZone> {
    let code = location_code(&location);
    tracing::debug!(
        id = location.id,
        code = %code,
        zone = %location.zone,
        kind = %location.kind,
        address = %location.address_text,
        "lowering location"
    );

    let point = LatLng {
        lat: location.latitude,
        lng: location.longitude,
    };
    let mut geometry = vec![GeometryFeature::new(Geometry::Path(vec![point]))];
    let detail = detail.unwrap_or_default();
    geometry.extend(detail_geometry(&detail));

    Ok(RawZone {
        beacon_id: location.id,
        provider_id,
        code,
        geometry,
        message: None,
        tariffs: TariffSource::Flat {
            prices: price_table(&detail)?,
            free_period: free_period(&detail),
        },
    })
}

/// `Code`, else the first word of `Name`, else the numeric id.
fn location_code(location: &SnabbLocation) -> String {
    if let Some(code) = &location.code {
        return code.clone();
    }
    location
        .name
        .split_whitespace()
        .next()
        .map(sanitize_code)
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| location.id.to_string())
}

/// Detail geometry by preference: `areas`, then `Polygons`, then `geojson`.
fn detail_geometry(detail: &SnabbDetail) -> Vec<GeometryFeature> {
    if let Some(areas) = detail.areas.as_ref().filter(|a| !a.is_empty()) {
        return areas
            .iter()
            .map(|area| GeometryFeature::new(Geometry::Path(area.points.clone())))
            .collect();
    }
    if let Some(polygons) = detail.polygons.as_ref().filter(|p| !p.is_empty()) {
        return polygons
            .iter()
            .map(|polygon| GeometryFeature::new(Geometry::Path(polygon.path.clone())))
            .collect();
    }
    detail
        .geojson
        .as_ref()
        .map(|feature| vec![GeometryFeature::new(feature.geometry.clone())])
        .unwrap_or_default()
}

fn price_table(detail: &SnabbDetail) -> Result<PriceTable> {
    let mut prices = PriceTable::new();
    if let Some(euros) = detail.half_hour_price {
        prices.insert(HALF_HOUR, cents_from_euros(euros)?);
    }
    if let Some(euros) = detail.price_24h {
        prices.insert(SECONDS_IN_DAY, cents_from_euros(euros)?);
    }
    Ok(prices)
}

/// Positive `FreeMinutes` in whole seconds. A value too large for
/// [`DurationSeconds`] is logged and treated as no free period.
fn free_period(detail: &SnabbDetail) -> Option<DurationSeconds> {
    let minutes = detail
        .free_minutes
        .filter(|minutes| minutes.is_finite() && *minutes > 0.0)?;
    let seconds = (minutes * f64::from(SECONDS_IN_MINUTE)).round();
    if seconds > f64::from(DurationSeconds::MAX) {
        tracing::warn!(minutes, "free minutes out of range, ignoring free period");
        return None;
    }
    Some(seconds as DurationSeconds)
}
