//! Converts provider geometry into canonical `(lat, lng)` rings.
//!
//! Providers describe zones as GeoJSON points and polygons (`[lng, lat]`
//! order) or as native lists of `{lat, lng}` objects. Each shape has exactly
//! one conversion; nothing here inspects untyped properties.

use crate::types::{CanonicalRegion, Coordinate};
use serde::Deserialize;

/// A GeoJSON geometry as published by providers. Only the shapes zones use
/// are accepted; anything else fails payload validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    /// `[lng, lat]`
    Point { coordinates: [f64; 2] },
    /// Rings of `[lng, lat]`; the first ring is the outer boundary.
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// Provider-native coordinate object.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
}

/// Any geometry representation a provider may supply for a zone.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    GeoJson(GeoJsonGeometry),
    Path(Vec<LatLng>),
}

impl From<GeoJsonGeometry> for Geometry {
    fn from(value: GeoJsonGeometry) -> Self {
        Geometry::GeoJson(value)
    }
}

/// One geometry feature of a zone. `outline` marks the feature a provider
/// tags as the zone's overall outline.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFeature {
    pub geometry: Geometry,
    pub outline: bool,
}

impl GeometryFeature {
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            outline: false,
        }
    }

    pub fn outline(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            outline: true,
        }
    }
}

fn swap_axes([lng, lat]: [f64; 2]) -> Coordinate {
    Coordinate::new(lat, lng)
}

/// Convert one geometry into a canonical region.
///
/// Polygons keep only their outer ring; holes are discarded.
pub fn to_region(geometry: &Geometry) -> CanonicalRegion {
    let points = match geometry {
        Geometry::GeoJson(GeoJsonGeometry::Point { coordinates }) => vec![swap_axes(*coordinates)],
        Geometry::GeoJson(GeoJsonGeometry::Polygon { coordinates }) => coordinates
            .first()
            .map(|ring| ring.iter().copied().map(swap_axes).collect())
            .unwrap_or_default(),
        Geometry::Path(path) => path.iter().map(|p| Coordinate::new(p.lat, p.lng)).collect(),
    };
    CanonicalRegion { points }
}

/// Normalize all geometry features of a zone.
///
/// If any feature is tagged as the outline, that feature alone becomes the
/// zone's region; otherwise every feature becomes its own region. Regions
/// without points are dropped.
pub fn normalize_features(features: &[GeometryFeature]) -> Vec<CanonicalRegion> {
    let selected: Vec<&GeometryFeature> = match features.iter().find(|f| f.outline) {
        Some(outline) => vec![outline],
        None => features.iter().collect(),
    };

    selected
        .into_iter()
        .map(|feature| to_region(&feature.geometry))
        .filter(|region| !region.points.is_empty())
        .collect()
}
