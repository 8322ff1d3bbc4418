//! Coarse land outlines drawn under the route.
//!
//! The shapes ship as a GeoJSON `FeatureCollection` compiled into the binary
//! and are parsed once on first use.

use crate::events::LonLat;
use once_cell::sync::Lazy;
use serde::Deserialize;

const LAND_GEOJSON: &str = include_str!("../assets/land.geojson");

/// Rings of one polygon: the outer ring first, then holes.
pub type Rings = Vec<Vec<LonLat>>;

#[derive(Debug, Clone, PartialEq)]
pub struct LandFeature {
    pub name: String,
    pub polygons: Vec<Rings>,
}

#[derive(Debug, thiserror::Error)]
pub enum LandError {
    #[error("invalid land data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("feature {index} has an unclosed or degenerate ring")]
    BadRing { index: usize },
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Properties,
    geometry: Geometry,
}

#[derive(Deserialize, Default)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Polygon(Rings),
    MultiPolygon(Vec<Rings>),
}

fn ring_is_valid(ring: &[LonLat]) -> bool {
    ring.len() >= 4 && ring.first() == ring.last()
}

/// Parse a GeoJSON feature collection of polygons.
pub fn parse_land(json: &str) -> Result<Vec<LandFeature>, LandError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let polygons = match feature.geometry {
                Geometry::Polygon(rings) => vec![rings],
                Geometry::MultiPolygon(polys) => polys,
            };
            if polygons.iter().flatten().any(|ring| !ring_is_valid(ring)) {
                return Err(LandError::BadRing { index });
            }
            Ok(LandFeature {
                name: feature.properties.name.unwrap_or_else(|| format!("feature-{}", index)),
                polygons,
            })
        })
        .collect()
}

static LAND: Lazy<Result<Vec<LandFeature>, LandError>> = Lazy::new(|| parse_land(LAND_GEOJSON));

/// The embedded land features.
pub fn land() -> Result<&'static [LandFeature], &'static LandError> {
    LAND.as_deref()
}
