//! Category suggestion for a photo.
//!
//! Priority: the resolved category, then a region-based default, then
//! the generic exploration category.

use crate::gazetteer::Category;
use crate::geo::Coordinate;
use crate::resolver::{ResolutionResult, Resolver};
use serde::Serialize;

/// Region whose photos default to the arrival category.
pub const ARRIVAL_HUB_REGION: &str = "Escazú";

/// Suggest a category for a resolution result.
pub fn suggest_category(result: &ResolutionResult) -> Category {
    match result {
        ResolutionResult::Found { category: Some(category), .. } => *category,
        ResolutionResult::Found { category: None, region, .. } => region_default(region),
        ResolutionResult::NotFound { .. } => Category::EXPLORATION,
    }
}

fn region_default(region: &str) -> Category {
    if region == ARRIVAL_HUB_REGION {
        Category::Arrival
    } else {
        Category::EXPLORATION
    }
}

/// File-name keywords mapped to a representative coordinate. First match wins.
const FILENAME_HINTS: &[(&[&str], Coordinate)] = &[
    (&["escazu", "hotel"], Coordinate::new(9.9189, -84.1370)),
    (&["san_jose", "airport"], Coordinate::new(9.9937, -84.2088)),
    (&["manuel", "antonio"], Coordinate::new(9.3908, -84.1417)),
    (&["tamarindo", "beach"], Coordinate::new(10.2994, -85.8397)),
    (&["monteverde", "zip"], Coordinate::new(10.3181, -84.8066)),
    (&["arenal", "volcano"], Coordinate::new(10.4630, -84.7033)),
];

/// Guess a coordinate from a photo's file name when it carries no GPS data.
pub fn filename_hint(file_name: &str) -> Option<Coordinate> {
    let name = file_name.to_lowercase();
    FILENAME_HINTS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, coordinate)| *coordinate)
}

/// Where the coordinate used for a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    Gps,
    FileName,
    None,
}

/// Resolution plus category for one photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoSuggestion {
    pub resolution: Option<ResolutionResult>,
    pub category: Category,
    pub source: CoordinateSource,
}

/// Caller-level flow for one photo: GPS coordinate, else file-name hint,
/// else the exploration category with no resolution.
///
/// An invalid GPS coordinate is treated as missing.
pub fn suggest_for_photo(
    resolver: &Resolver,
    coordinate: Option<Coordinate>,
    file_name: Option<&str>,
) -> PhotoSuggestion {
    let gps = coordinate.and_then(|c| match resolver.resolve(c) {
        Ok(result) => Some(result),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unusable GPS coordinate");
            None
        }
    });

    if let Some(result) = gps {
        return PhotoSuggestion {
            category: suggest_category(&result),
            resolution: Some(result),
            source: CoordinateSource::Gps,
        };
    }

    let hinted = file_name
        .and_then(filename_hint)
        .and_then(|c| resolver.resolve(c).ok());

    match hinted {
        Some(result) => PhotoSuggestion {
            category: suggest_category(&result),
            resolution: Some(result),
            source: CoordinateSource::FileName,
        },
        None => PhotoSuggestion {
            resolution: None,
            category: Category::EXPLORATION,
            source: CoordinateSource::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Accuracy;

    fn found(region: &str, category: Option<Category>) -> ResolutionResult {
        ResolutionResult::Found {
            location: region.to_string(),
            region: region.to_string(),
            category,
            distance_km: 1.0,
            coordinate: Coordinate::new(9.9, -84.1),
            accuracy: Accuracy::Region,
        }
    }

    #[test]
    fn test_poi_category_passes_through() {
        let result = ResolutionResult::Found {
            location: "Playa Espadilla".into(),
            region: "Manuel Antonio".into(),
            category: Some(Category::Beach),
            distance_km: 0.1,
            coordinate: Coordinate::new(9.3928, -84.15),
            accuracy: Accuracy::VeryClose,
        };
        let category = suggest_category(&result);
        assert_eq!(category, Category::Beach);
        assert_eq!(category.to_string(), "strand");
    }

    #[test]
    fn test_not_found_is_exploration() {
        let result = ResolutionResult::NotFound {
            coordinate: Coordinate::new(0.0, 0.0),
            distance_km: 1000.0,
            nearest_region: "Puerto Viejo".into(),
        };
        assert_eq!(suggest_category(&result), Category::EXPLORATION);
        assert_eq!(suggest_category(&result).to_string(), "erkundung");
    }

    #[test]
    fn test_missing_category_region_default() {
        assert_eq!(suggest_category(&found("Escazú", None)), Category::Arrival);
        assert_eq!(suggest_category(&found("Arenal", None)), Category::Exploration);
    }

    #[test]
    fn test_present_category_beats_region_default() {
        assert_eq!(suggest_category(&found("Escazú", Some(Category::Nightlife))), Category::Nightlife);
    }

    #[test]
    fn test_filename_hint() {
        assert_eq!(filename_hint("IMG_Escazu_001.jpg"), Some(Coordinate::new(9.9189, -84.1370)));
        assert_eq!(filename_hint("airport-arrival.png"), Some(Coordinate::new(9.9937, -84.2088)));
        assert_eq!(filename_hint("Volcano.jpg"), Some(Coordinate::new(10.4630, -84.7033)));
        assert_eq!(filename_hint("IMG_4711.jpg"), None);
    }

    #[test]
    fn test_filename_hint_first_rule_wins() {
        // "hotel" (Escazú) is listed before "beach" (Tamarindo).
        assert_eq!(filename_hint("beach_hotel.jpg"), Some(Coordinate::new(9.9189, -84.1370)));
    }

    #[test]
    fn test_suggest_for_photo_gps() {
        let resolver = Resolver::builtin().unwrap();
        let s = suggest_for_photo(&resolver, Some(Coordinate::new(9.3856, -84.1494)), Some("hotel.jpg"));
        assert_eq!(s.source, CoordinateSource::Gps);
        assert_eq!(s.category, Category::Beach);
    }

    #[test]
    fn test_suggest_for_photo_filename() {
        let resolver = Resolver::builtin().unwrap();
        let s = suggest_for_photo(&resolver, None, Some("tamarindo_sunset.jpg"));
        assert_eq!(s.source, CoordinateSource::FileName);
        assert_eq!(s.category, Category::Beach);
        assert!(s.resolution.unwrap().is_found());
    }

    #[test]
    fn test_suggest_for_photo_invalid_gps_falls_back() {
        let resolver = Resolver::builtin().unwrap();
        let s = suggest_for_photo(&resolver, Some(Coordinate::new(123.0, 0.0)), Some("arenal.jpg"));
        assert_eq!(s.source, CoordinateSource::FileName);
        assert_eq!(s.category, Category::Nature);
    }

    #[test]
    fn test_suggest_for_photo_nothing() {
        let resolver = Resolver::builtin().unwrap();
        let s = suggest_for_photo(&resolver, None, Some("IMG_0001.jpg"));
        assert_eq!(s.source, CoordinateSource::None);
        assert_eq!(s.category, Category::EXPLORATION);
        assert!(s.resolution.is_none());
    }

    #[test]
    fn test_far_gps_is_exploration() {
        let resolver = Resolver::builtin().unwrap();
        let s = suggest_for_photo(&resolver, Some(Coordinate::new(48.8566, 2.3522)), None);
        assert_eq!(s.source, CoordinateSource::Gps);
        assert_eq!(s.category, Category::EXPLORATION);
        assert!(!s.resolution.unwrap().is_found());
    }
}
