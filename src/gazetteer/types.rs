//! Core types for the gazetteer.

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Semantic photo category.
///
/// The serialized form is the label used by the photo gallery, which is
/// why the wire names are German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "stadt")]
    City,
    #[serde(rename = "erkundung")]
    Exploration,
    #[serde(rename = "anreise")]
    Travel,
    #[serde(rename = "kultur")]
    Culture,
    #[serde(rename = "ankunft")]
    Arrival,
    #[serde(rename = "kulinarik")]
    Cuisine,
    #[serde(rename = "nachtleben")]
    Nightlife,
    #[serde(rename = "natur")]
    Nature,
    #[serde(rename = "strand")]
    Beach,
    #[serde(rename = "tierwelt")]
    Wildlife,
    #[serde(rename = "abenteuer")]
    Adventure,
}

impl Category {
    /// The generic category for photos nothing more specific is known about.
    pub const EXPLORATION: Category = Category::Exploration;

    pub const ALL: [Category; 11] = [
        Category::City,
        Category::Exploration,
        Category::Travel,
        Category::Culture,
        Category::Arrival,
        Category::Cuisine,
        Category::Nightlife,
        Category::Nature,
        Category::Beach,
        Category::Wildlife,
        Category::Adventure,
    ];

    /// Gallery label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::City => "stadt",
            Self::Exploration => "erkundung",
            Self::Travel => "anreise",
            Self::Culture => "kultur",
            Self::Arrival => "ankunft",
            Self::Cuisine => "kulinarik",
            Self::Nightlife => "nachtleben",
            Self::Nature => "natur",
            Self::Beach => "strand",
            Self::Wildlife => "tierwelt",
            Self::Adventure => "abenteuer",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Exploration => "exploration",
            Self::Travel => "travel",
            Self::Culture => "culture",
            Self::Arrival => "arrival",
            Self::Cuisine => "cuisine",
            Self::Nightlife => "nightlife",
            Self::Nature => "nature",
            Self::Beach => "beach",
            Self::Wildlife => "wildlife",
            Self::Adventure => "adventure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the gallery label or the English name, case-insensitively.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == needle || c.english_name() == needle)
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

/// A named, geocoded point of interest inside a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub coordinate: Coordinate,
    pub category: Category,
}

impl Poi {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            coordinate: Coordinate::new(lat, lng),
            category,
        }
    }
}

/// A region: a circle around `center` with its own default category and POIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub center: Coordinate,
    pub radius_km: f64,
    pub default_category: Category,
    #[serde(default)]
    pub pois: Vec<Poi>,
}

impl Region {
    /// Whether `point` lies within the radius (boundary inclusive).
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.center.distance_to(point) <= self.radius_km
    }
}

/// Malformed gazetteer data. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Region '{region}' has invalid radius {radius_km} km (must be > 0)")]
    InvalidRadius { region: String, radius_km: f64 },

    #[error("Region '{region}' has center ({lat}, {lng}) outside valid bounds")]
    CenterOutOfRange { region: String, lat: f64, lng: f64 },

    #[error("POI '{poi}' in region '{region}' has coordinate ({lat}, {lng}) outside valid bounds")]
    PoiOutOfRange {
        region: String,
        poi: String,
        lat: f64,
        lng: f64,
    },

    #[error("Duplicate region name '{name}'")]
    DuplicateRegion { name: String },

    #[error("Cannot read gazetteer file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gazetteer file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
