//! Reverse lookup: coordinate → POI, region, or nothing.
//!
//! Two passes over the gazetteer:
//!   1. POI pass: every POI of every region whose *center* is within its
//!      radius of the query is a candidate; the globally nearest wins.
//!   2. Region pass (only if pass 1 found nothing): the nearest region
//!      center; a match only if within that region's radius.
//!
//! Minimum tracking uses strict `<`, so on exact ties the first entry in
//! declaration order wins. Radius tests are inclusive (`<=`).

use crate::gazetteer::{Category, ConfigurationError, Gazetteer, Poi, Region};
use crate::geo::{distance_km, format_coords, Coordinate, InvalidCoordinateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Region name reported when the gazetteer is empty.
pub const UNKNOWN_REGION: &str = "unknown";

const VERY_CLOSE_KM: f64 = 0.5;
const CLOSE_KM: f64 = 2.0;

/// Qualitative confidence attached to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    /// POI within 0.5 km.
    VeryClose,
    /// POI within 2 km.
    Close,
    /// POI 2 km or further.
    Approximate,
    /// No POI candidate; matched the region itself.
    Region,
}

impl Accuracy {
    /// Tier for a POI match at `distance_km`.
    pub fn from_poi_distance(distance_km: f64) -> Self {
        if distance_km < VERY_CLOSE_KM {
            Self::VeryClose
        } else if distance_km < CLOSE_KM {
            Self::Close
        } else {
            Self::Approximate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryClose => "very_close",
            Self::Close => "close",
            Self::Approximate => "approximate",
            Self::Region => "region",
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single resolution. Owned by the caller; no ties to the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ResolutionRecord", try_from = "ResolutionRecord")]
pub enum ResolutionResult {
    Found {
        /// POI name, or the region name for region-only matches.
        location: String,
        region: String,
        /// Always set by the resolver; records read from elsewhere may lack it.
        category: Option<Category>,
        distance_km: f64,
        coordinate: Coordinate,
        accuracy: Accuracy,
    },
    NotFound {
        coordinate: Coordinate,
        /// Distance to the nearest region center; infinite for an empty gazetteer.
        distance_km: f64,
        nearest_region: String,
    },
}

impl ResolutionResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn accuracy(&self) -> Option<Accuracy> {
        match self {
            Self::Found { accuracy, .. } => Some(*accuracy),
            Self::NotFound { .. } => None,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Found { distance_km, .. } | Self::NotFound { distance_km, .. } => *distance_km,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Found { coordinate, .. } | Self::NotFound { coordinate, .. } => *coordinate,
        }
    }

    /// One-line human-readable banner.
    pub fn summary_line(&self) -> String {
        match self {
            Self::Found { location, region, distance_km, accuracy, coordinate, .. } => {
                if location == region {
                    format!(
                        "\u{1F4CD} {} [{}] {:.2} km ({})",
                        region, accuracy, distance_km, format_coords(coordinate.lat, coordinate.lng)
                    )
                } else {
                    format!(
                        "\u{1F4CD} {}, {} [{}] {:.2} km ({})",
                        location, region, accuracy, distance_km, format_coords(coordinate.lat, coordinate.lng)
                    )
                }
            }
            Self::NotFound { nearest_region, distance_km, coordinate } => {
                let dist = if distance_km.is_finite() {
                    format!("{:.1} km", distance_km)
                } else {
                    "n/a".to_string()
                };
                format!(
                    "\u{2753} No known place at {} (nearest region: {}, {})",
                    format_coords(coordinate.lat, coordinate.lng), nearest_region, dist
                )
            }
        }
    }
}

/// Flat JSON shape shared with the photo gallery: a boolean `found` plus
/// the fields of whichever variant applies.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolutionRecord {
    found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(default)]
    distance_km: Option<f64>,
    coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accuracy: Option<Accuracy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nearest_region: Option<String>,
}

impl From<ResolutionResult> for ResolutionRecord {
    fn from(result: ResolutionResult) -> Self {
        match result {
            ResolutionResult::Found { location, region, category, distance_km, coordinate, accuracy } => {
                Self {
                    found: true,
                    location: Some(location),
                    region: Some(region),
                    category,
                    distance_km: Some(distance_km),
                    coordinate,
                    accuracy: Some(accuracy),
                    nearest_region: None,
                }
            }
            ResolutionResult::NotFound { coordinate, distance_km, nearest_region } => Self {
                found: false,
                location: None,
                region: None,
                category: None,
                distance_km: distance_km.is_finite().then_some(distance_km),
                coordinate,
                accuracy: None,
                nearest_region: Some(nearest_region),
            },
        }
    }
}

impl TryFrom<ResolutionRecord> for ResolutionResult {
    type Error = String;

    fn try_from(record: ResolutionRecord) -> Result<Self, Self::Error> {
        if !record.found {
            return Ok(Self::NotFound {
                coordinate: record.coordinate,
                distance_km: record.distance_km.unwrap_or(f64::INFINITY),
                nearest_region: record.nearest_region.unwrap_or_else(|| UNKNOWN_REGION.to_string()),
            });
        }

        let region = record.region.ok_or("found record is missing 'region'")?;
        Ok(Self::Found {
            location: record.location.unwrap_or_else(|| region.clone()),
            region,
            category: record.category,
            distance_km: record.distance_km.ok_or("found record is missing 'distanceKm'")?,
            coordinate: record.coordinate,
            accuracy: record.accuracy.ok_or("found record is missing 'accuracy'")?,
        })
    }
}

/// Stateless resolver over a shared, read-only gazetteer.
#[derive(Debug, Clone)]
pub struct Resolver {
    gazetteer: Arc<Gazetteer>,
}

impl Resolver {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self { gazetteer }
    }

    /// Resolver over the compiled-in catalog.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Ok(Self::new(Arc::new(Gazetteer::builtin()?)))
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Validate raw floats, then resolve.
    pub fn resolve_lat_lng(&self, lat: f64, lng: f64) -> Result<ResolutionResult, InvalidCoordinateError> {
        self.resolve(Coordinate::validated(lat, lng)?)
    }

    /// Resolve a coordinate to the best POI, region, or a not-found record.
    pub fn resolve(&self, coordinate: Coordinate) -> Result<ResolutionResult, InvalidCoordinateError> {
        coordinate.validate()?;

        if let Some((region, poi, distance)) = self.nearest_poi(&coordinate) {
            let accuracy = Accuracy::from_poi_distance(distance);
            tracing::debug!(
                %coordinate, poi = %poi.name, region = %region.name, distance_km = distance, %accuracy,
                "resolved to POI"
            );
            return Ok(ResolutionResult::Found {
                location: poi.name.clone(),
                region: region.name.clone(),
                category: Some(poi.category),
                distance_km: distance,
                coordinate,
                accuracy,
            });
        }

        match self.nearest_region(&coordinate) {
            Some((region, distance)) if distance <= region.radius_km => {
                tracing::debug!(%coordinate, region = %region.name, distance_km = distance, "resolved to region");
                Ok(ResolutionResult::Found {
                    location: region.name.clone(),
                    region: region.name.clone(),
                    category: Some(region.default_category),
                    distance_km: distance,
                    coordinate,
                    accuracy: Accuracy::Region,
                })
            }
            Some((region, distance)) => {
                tracing::debug!(%coordinate, nearest = %region.name, distance_km = distance, "no match");
                Ok(ResolutionResult::NotFound {
                    coordinate,
                    distance_km: distance,
                    nearest_region: region.name.clone(),
                })
            }
            None => {
                tracing::debug!(%coordinate, "no match, gazetteer is empty");
                Ok(ResolutionResult::NotFound {
                    coordinate,
                    distance_km: f64::INFINITY,
                    nearest_region: UNKNOWN_REGION.to_string(),
                })
            }
        }
    }

    /// POI pass: nearest POI across all regions whose center is in range.
    ///
    /// Range is judged on the parent region's center, not the POI's own
    /// position, so a POI outside its region's circle can still win while
    /// an adjacent POI of an out-of-range region never does.
    fn nearest_poi(&self, point: &Coordinate) -> Option<(&Region, &Poi, f64)> {
        let mut best: Option<(&Region, &Poi, f64)> = None;

        for region in self.gazetteer.all_regions() {
            if distance_km(&region.center, point) > region.radius_km {
                continue;
            }
            for poi in &region.pois {
                let d = distance_km(point, &poi.coordinate);
                if best.map_or(true, |(_, _, min)| d < min) {
                    best = Some((region, poi, d));
                }
            }
        }
        best
    }

    /// Region pass: nearest region center regardless of radius.
    pub fn nearest_region(&self, point: &Coordinate) -> Option<(&Region, f64)> {
        let mut best: Option<(&Region, f64)> = None;

        for region in self.gazetteer.all_regions() {
            let d = distance_km(&region.center, point);
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((region, d));
            }
        }
        best
    }
}
