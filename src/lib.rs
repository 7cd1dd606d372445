//! Reverse geotagging for travel photos.
//!
//! A coordinate is resolved against a small, validated gazetteer of
//! regions and points of interest, and a semantic photo category is
//! suggested from the result.

pub mod category;
pub mod gazetteer;
pub mod geo;
pub mod resolver;
pub mod server;

pub use category::{suggest_category, suggest_for_photo, PhotoSuggestion};
pub use gazetteer::{Category, ConfigurationError, Gazetteer, Poi, Region};
pub use geo::{distance_km, Coordinate, InvalidCoordinateError};
pub use resolver::{Accuracy, ResolutionResult, Resolver};
