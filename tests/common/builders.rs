//! Test builders — ergonomic constructors for `RawZone` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use zonefeed_core::geometry::{GeoJsonGeometry, Geometry, GeometryFeature, LatLng};
use zonefeed_core::tariff::{PriceListEntry, PriceRow, PriceTable, Restriction};
use zonefeed_core::{RawZone, TariffSource};

// ---------------------------------------------------------------------------
// RawZoneBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawZone`] test fixtures.
///
/// Starts as a zone with one GeoJSON point and an empty price list.
///
/// # Example
///
/// ```rust
/// let zone = RawZoneBuilder::new("K1")
///     .opening_hours("E-R 08:00-18:00")
///     .row("1 hour", "1.50 €")
///     .message("First 15 min of parking free")
///     .build();
/// ```
pub struct RawZoneBuilder {
    beacon_id: u64,
    provider_id: u32,
    code: String,
    geometry: Vec<GeometryFeature>,
    message: Option<String>,
    tariffs: TariffSource,
}

impl RawZoneBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            beacon_id: 1,
            provider_id: 99,
            code: code.into(),
            geometry: vec![GeometryFeature::new(GeoJsonGeometry::Point {
                coordinates: [24.75, 59.43],
            })],
            message: None,
            tariffs: TariffSource::PriceList(Vec::new()),
        }
    }

    pub fn beacon(mut self, beacon_id: u64) -> Self {
        self.beacon_id = beacon_id;
        self
    }

    pub fn provider(mut self, provider_id: u32) -> Self {
        self.provider_id = provider_id;
        self
    }

    pub fn no_geometry(mut self) -> Self {
        self.geometry.clear();
        self
    }

    pub fn feature(mut self, feature: GeometryFeature) -> Self {
        self.geometry.push(feature);
        self
    }

    pub fn path(self, points: &[(f64, f64)]) -> Self {
        let path = points.iter().map(|&(lat, lng)| LatLng { lat, lng }).collect();
        self.feature(GeometryFeature::new(Geometry::Path(path)))
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append a price-list entry. Switches the tariff source to a price list.
    pub fn price(mut self, period: &str, amount: u32, restrictions: &[(&str, &str, &str)]) -> Self {
        let entry = PriceListEntry {
            period: period.to_string(),
            amount,
            restrictions: restrictions
                .iter()
                .map(|&(weekdays, start, end)| Restriction {
                    weekdays: weekdays.to_string(),
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                })
                .collect(),
        };
        match &mut self.tariffs {
            TariffSource::PriceList(entries) => entries.push(entry),
            other => *other = TariffSource::PriceList(vec![entry]),
        }
        self
    }

    /// Switch to the opening-hours flow, keeping rows added so far.
    pub fn opening_hours(mut self, hours: &str) -> Self {
        let prices = match std::mem::replace(&mut self.tariffs, TariffSource::PriceList(Vec::new())) {
            TariffSource::OpeningHours { prices, .. } => prices,
            _ => Vec::new(),
        };
        self.tariffs = TariffSource::OpeningHours {
            opening_hours: hours.to_string(),
            prices,
        };
        self
    }

    /// Append a price-table row. Only meaningful after [`Self::opening_hours`].
    pub fn row(mut self, period: &str, price: &str) -> Self {
        if let TariffSource::OpeningHours { prices, .. } = &mut self.tariffs {
            prices.push(PriceRow {
                period: period.to_string(),
                price: price.to_string(),
            });
        } else {
            panic!("RawZoneBuilder::row called before opening_hours");
        }
        self
    }

    pub fn flat(mut self, prices: &[(u32, u32)], free_period: Option<u32>) -> Self {
        self.tariffs = TariffSource::Flat {
            prices: prices.iter().copied().collect::<PriceTable>(),
            free_period,
        };
        self
    }

    pub fn build(self) -> RawZone {
        RawZone {
            beacon_id: self.beacon_id,
            provider_id: self.provider_id,
            code: self.code,
            geometry: self.geometry,
            message: self.message,
            tariffs: self.tariffs,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A minimal zone that always survives normalization.
pub fn plain_zone(code: &str) -> RawZone {
    RawZoneBuilder::new(code).build()
}

/// A zone on the opening-hours flow with a one-row price table.
pub fn scheduled_zone(code: &str, hours: &str) -> RawZone {
    RawZoneBuilder::new(code)
        .opening_hours(hours)
        .row("1 hour", "1.50 €")
        .build()
}

/// Build `n` zones cycling through every tariff flow.
pub fn build_batch(n: usize) -> Vec<RawZone> {
    (0..n)
        .map(|i| {
            let code = format!("Z{i}");
            let builder = RawZoneBuilder::new(code).beacon(i as u64);
            match i % 3 {
                0 => builder
                    .price("2 HOURS", 300, &[])
                    .price("1 HOUR", 150, &[("12345", "08:00:00", "18:00:00")])
                    .build(),
                1 => builder
                    .opening_hours("E-R 07:00-19:00, L 08:00-15:00")
                    .row("15 min", "0.50 €")
                    .row("1 hour", "1.80 €")
                    .message("First 15 min of parking free")
                    .build(),
                _ => builder.flat(&[(1_800, 120), (86_400, 1_000)], Some(900)).build(),
            }
        })
        .collect()
}
