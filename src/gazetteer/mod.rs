//! Gazetteer: the static catalog of regions and points of interest.
//!
//! Built once at startup, validated, then shared read-only.

pub mod builtin;
pub mod loader;
pub mod types;

use serde::Serialize;
use std::collections::HashSet;

pub use types::{Category, ConfigurationError, Poi, Region};

/// An immutable, validated set of regions in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Gazetteer {
    regions: Vec<Region>,
}

impl Gazetteer {
    /// Validate and wrap `regions`. Declaration order is kept.
    pub fn new(regions: Vec<Region>) -> Result<Self, ConfigurationError> {
        validate(&regions)?;
        Ok(Self { regions })
    }

    /// The compiled-in Costa Rica catalog.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::new(builtin::builtin_regions())
    }

    pub fn all_regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a region by its (unique) name.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn poi_count(&self) -> usize {
        self.regions.iter().map(|r| r.pois.len()).sum()
    }

    /// Lightweight listing for the API and CLI.
    pub fn summary(&self) -> Vec<RegionInfo> {
        self.regions
            .iter()
            .map(|r| RegionInfo {
                name: r.name.clone(),
                lat: r.center.lat,
                lng: r.center.lng,
                radius_km: r.radius_km,
                category: r.default_category,
                poi_count: r.pois.len(),
            })
            .collect()
    }
}

/// A region entry for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
    pub category: Category,
    pub poi_count: usize,
}

fn validate(regions: &[Region]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();

    for region in regions {
        if !region.radius_km.is_finite() || region.radius_km <= 0.0 {
            return Err(ConfigurationError::InvalidRadius {
                region: region.name.clone(),
                radius_km: region.radius_km,
            });
        }
        if !region.center.is_valid() {
            return Err(ConfigurationError::CenterOutOfRange {
                region: region.name.clone(),
                lat: region.center.lat,
                lng: region.center.lng,
            });
        }
        if let Some(poi) = region.pois.iter().find(|p| !p.coordinate.is_valid()) {
            return Err(ConfigurationError::PoiOutOfRange {
                region: region.name.clone(),
                poi: poi.name.clone(),
                lat: poi.coordinate.lat,
                lng: poi.coordinate.lng,
            });
        }
        if !seen.insert(region.name.as_str()) {
            return Err(ConfigurationError::DuplicateRegion {
                name: region.name.clone(),
            });
        }
    }
    Ok(())
}

/// Test fixture: a region with no POIs.
#[cfg(test)]
pub(crate) fn bare_region(
    name: &str,
    center: crate::geo::Coordinate,
    radius_km: f64,
    category: Category,
) -> Region {
    Region {
        name: name.to_string(),
        center,
        radius_km,
        default_category: category,
        pois: Vec::new(),
    }
}
