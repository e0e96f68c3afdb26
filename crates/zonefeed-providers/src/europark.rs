//! Europark: structured price-list flow.
//!
//! Every zone carries its own price list with optional weekday/time
//! restrictions and a GeoJSON feature collection. A feature tagged
//! `"outline"` replaces all others as the zone's region.

use crate::ProviderAdapter;
use serde::Deserialize;
use zonefeed_core::geometry::{GeoJsonGeometry, GeometryFeature};
use zonefeed_core::tariff::{PriceListEntry, Restriction};
use zonefeed_core::{RawZone, Result, TariffSource};

const OUTLINE_FEATURE: &str = "outline";

// ---------------------------------------------------------------------------
// Payload shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct EuroparkPayload {
    pub paringzones: Vec<EuroparkZone>,
}

#[derive(Debug, Deserialize)]
pub struct EuroparkZone {
    pub id: u64,
    pub parking_code: String,
    pub price_list: Vec<EuroparkPrice>,
    pub geojson: FeatureCollection,
}

#[derive(Debug, Deserialize)]
pub struct EuroparkPrice {
    /// Minor units, VAT included.
    pub amount_w_vat: u32,
    pub period: String,
    #[serde(default)]
    pub restrictions: Vec<EuroparkRestriction>,
}

#[derive(Debug, Deserialize)]
pub struct EuroparkRestriction {
    pub start_time: String,
    pub end_time: String,
    pub weekdays: String,
}

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: GeoJsonGeometry,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct Europark;

impl ProviderAdapter for Europark {
    const NAME: &'static str = "europark";
    type Payload = EuroparkPayload;

    fn into_zones(payload: EuroparkPayload, provider_id: u32) -> Result<Vec<RawZone>> {
        Ok(payload
            .paringzones
            .into_iter()
            .map(|zone| lower_zone(zone, provider_id))
            .collect())
    }
}

fn lower_zone(zone: EuroparkZone, provider_id: u32) -> RawZone {
    if zone.parking_code.is_empty() {
        tracing::debug!(id = zone.id, "zone not valid for mobile parking");
    }

    let geometry = zone
        .geojson
        .features
        .into_iter()
        .map(|feature| {
            if feature.properties.kind.as_deref() == Some(OUTLINE_FEATURE) {
                GeometryFeature::outline(feature.geometry)
            } else {
                GeometryFeature::new(feature.geometry)
            }
        })
        .collect();

    let entries = zone
        .price_list
        .into_iter()
        .map(|price| PriceListEntry {
            period: price.period,
            amount: price.amount_w_vat,
            restrictions: price
                .restrictions
                .into_iter()
                .map(|r| Restriction {
                    weekdays: r.weekdays,
                    start_time: r.start_time,
                    end_time: r.end_time,
                })
                .collect(),
        })
        .collect();

    RawZone {
        beacon_id: zone.id,
        provider_id,
        code: zone.parking_code,
        geometry,
        message: None,
        tariffs: TariffSource::PriceList(entries),
    }
}
