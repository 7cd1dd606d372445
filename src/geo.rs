//! Coordinates and great-circle distance.
//!
//! All coordinates are WGS84 decimal degrees. Distances are haversine
//! great-circle distances on a sphere of radius 6371 km.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

const DEG: f64 = PI / 180.0;

/// Mean Earth radius used for all distance computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A query coordinate that cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Invalid coordinate ({lat}, {lng}). Lat: -90..90, Lng: -180..180")]
pub struct InvalidCoordinateError {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn validated(lat: f64, lng: f64) -> Result<Self, InvalidCoordinateError> {
        let c = Self { lat, lng };
        c.validate()?;
        Ok(c)
    }

    /// Bounds are inclusive: the poles and the antimeridian are valid.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn validate(&self) -> Result<(), InvalidCoordinateError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(InvalidCoordinateError { lat: self.lat, lng: self.lng })
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_coords(self.lat, self.lng))
    }
}

/// Haversine distance between two coordinates in kilometres.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat) * DEG;
    let d_lng = (b.lng - a.lng) * DEG;

    let h = (d_lat / 2.0).sin().powi(2)
        + (a.lat * DEG).cos() * (b.lat * DEG).cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Convert an EXIF-style DMS string (e.g. `9°55'41.2"`) to signed decimal degrees.
///
/// Missing minutes or seconds count as zero. `S` and `W` references negate
/// the result. Returns `None` when no degree component can be parsed.
pub fn parse_dms(dms: &str, reference: char) -> Option<f64> {
    let parts: Vec<f64> = dms
        .split(|c| matches!(c, '°' | '\'' | '"'))
        .filter_map(|p| p.trim().parse::<f64>().ok())
        .collect();

    let degrees = *parts.first()?;
    let minutes = parts.get(1).copied().unwrap_or(0.0);
    let seconds = parts.get(2).copied().unwrap_or(0.0);

    let dd = degrees + minutes / 60.0 + seconds / 3600.0;
    match reference.to_ascii_uppercase() {
        'S' | 'W' => Some(-dd),
        _ => Some(dd),
    }
}

/// Human-readable coordinate pair, e.g. `9.9281°N, 84.0907°W`.
pub fn format_coords(lat: f64, lng: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lng >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{}, {:.4}°{}", lat.abs(), ns, lng.abs(), ew)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SAN_JOSE: Coordinate = Coordinate::new(9.9281, -84.0907);
    const ESCAZU: Coordinate = Coordinate::new(9.9189, -84.1370);

    #[test]
    fn test_distance_identity() {
        assert_eq!(distance_km(&SAN_JOSE, &SAN_JOSE), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let ab = distance_km(&SAN_JOSE, &ESCAZU);
        let ba = distance_km(&ESCAZU, &SAN_JOSE);
        assert_abs_diff_eq!(ab, ba, epsilon = 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_one_degree_latitude() {
        let a = Coordinate::new(10.0, -84.0);
        let b = Coordinate::new(11.0, -84.0);
        assert_abs_diff_eq!(distance_km(&a, &b), 111.19, epsilon = 1.0);
    }

    #[test]
    fn test_san_jose_escazu() {
        // ~5.2 km across the valley
        let d = SAN_JOSE.distance_to(&ESCAZU);
        assert!(d > 4.5 && d < 6.0, "got {}", d);
    }

    #[test]
    fn test_antipodes() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        assert_abs_diff_eq!(distance_km(&a, &b), PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn test_validated_bounds() {
        assert!(Coordinate::validated(90.0, 180.0).is_ok());
        assert!(Coordinate::validated(-90.0, -180.0).is_ok());
        assert!(Coordinate::validated(90.01, 0.0).is_err());
        assert!(Coordinate::validated(0.0, -180.5).is_err());
        assert!(Coordinate::validated(f64::NAN, 0.0).is_err());
        assert!(Coordinate::validated(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_coordinate_message() {
        let err = Coordinate::validated(100.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_parse_dms() {
        let lat = parse_dms("9°55'41.16\"", 'N').unwrap();
        assert_abs_diff_eq!(lat, 9.9281, epsilon = 1e-4);

        let lng = parse_dms("84°5'26.52\"", 'W').unwrap();
        assert_abs_diff_eq!(lng, -84.0907, epsilon = 1e-4);

        assert_eq!(parse_dms("10°", 'S'), Some(-10.0));
        assert_eq!(parse_dms("", 'N'), None);
    }

    #[test]
    fn test_format_coords() {
        assert_eq!(format_coords(9.9281, -84.0907), "9.9281°N, 84.0907°W");
        assert_eq!(format_coords(-33.8688, 151.2093), "33.8688°S, 151.2093°E");
    }
}
