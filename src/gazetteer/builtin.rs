//! Built-in Costa Rica gazetteer.
//!
//! Regions are listed in iteration order; that order decides ties.
//! Some POIs deliberately share their region's center coordinate.

use super::types::{Category, Poi, Region};
use crate::geo::Coordinate;

struct BuiltinPoi {
    name: &'static str,
    lat: f64,
    lng: f64,
    category: Category,
}

struct BuiltinRegion {
    name: &'static str,
    lat: f64,
    lng: f64,
    radius_km: f64,
    category: Category,
    pois: &'static [BuiltinPoi],
}

const fn poi(name: &'static str, lat: f64, lng: f64, category: Category) -> BuiltinPoi {
    BuiltinPoi { name, lat, lng, category }
}

use Category::*;

const BUILTIN_REGIONS: &[BuiltinRegion] = &[
    BuiltinRegion {
        name: "San José",
        lat: 9.9281, lng: -84.0907, radius_km: 15.0,
        category: City,
        pois: &[
            poi("Flughafen Juan Santamaría (SJO)", 9.9937, -84.2088, Travel),
            poi("Centro San José", 9.9281, -84.0907, Exploration),
            poi("Mercado Central", 9.9334, -84.0789, Exploration),
            poi("Teatro Nacional", 9.9326, -84.0787, Culture),
        ],
    },
    BuiltinRegion {
        name: "Escazú",
        lat: 9.9189, lng: -84.1370, radius_km: 8.0,
        category: Arrival,
        pois: &[
            poi("Centro Escazú", 9.9189, -84.1370, Exploration),
            poi("Multiplaza Escazú", 9.9167, -84.1297, Exploration),
            poi("Hotel Belmont Escazú", 9.9156, -84.1389, Arrival),
            poi("Restaurants Escazú", 9.9189, -84.1370, Cuisine),
            poi("Bars Escazú", 9.9200, -84.1350, Nightlife),
        ],
    },
    BuiltinRegion {
        name: "Manuel Antonio",
        lat: 9.3908, lng: -84.1417, radius_km: 12.0,
        category: Nature,
        pois: &[
            poi("Manuel Antonio Nationalpark", 9.3908, -84.1417, Nature),
            poi("Playa Manuel Antonio", 9.3856, -84.1494, Beach),
            poi("Playa Espadilla", 9.3928, -84.1500, Beach),
            poi("Sloth Sanctuary", 9.3850, -84.1400, Wildlife),
            poi("Zip-Line Manuel Antonio", 9.3950, -84.1350, Adventure),
        ],
    },
    BuiltinRegion {
        name: "Monteverde",
        lat: 10.3181, lng: -84.8066, radius_km: 10.0,
        category: Adventure,
        pois: &[
            poi("Monteverde Cloud Forest", 10.3181, -84.8066, Nature),
            poi("Sky Adventures Zip-Line", 10.3200, -84.8100, Adventure),
            poi("Selvatura Park", 10.3250, -84.8150, Adventure),
            poi("Monteverde Coffee Tours", 10.3150, -84.8050, Exploration),
        ],
    },
    BuiltinRegion {
        name: "Tamarindo",
        lat: 10.2994, lng: -85.8397, radius_km: 8.0,
        category: Beach,
        pois: &[
            poi("Playa Tamarindo", 10.2994, -85.8397, Beach),
            poi("Tamarindo Beach Bars", 10.2990, -85.8390, Nightlife),
            poi("Surf Spots Tamarindo", 10.3000, -85.8400, Adventure),
            poi("Restaurants Tamarindo", 10.2985, -85.8385, Cuisine),
        ],
    },
    BuiltinRegion {
        name: "Arenal",
        lat: 10.4630, lng: -84.7033, radius_km: 15.0,
        category: Nature,
        pois: &[
            poi("Arenal Vulkan", 10.4630, -84.7033, Nature),
            poi("La Fortuna", 10.4697, -84.6431, Exploration),
            poi("Arenal Hot Springs", 10.4650, -84.7000, Adventure),
            poi("Hanging Bridges Arenal", 10.4600, -84.7100, Adventure),
        ],
    },
    BuiltinRegion {
        name: "Poás",
        lat: 10.1989, lng: -84.2328, radius_km: 8.0,
        category: Nature,
        pois: &[
            poi("Poás Vulkan Nationalpark", 10.1989, -84.2328, Nature),
            poi("Poás Krater", 10.1980, -84.2330, Nature),
        ],
    },
    BuiltinRegion {
        name: "Jacó",
        lat: 9.6146, lng: -84.6297, radius_km: 6.0,
        category: Beach,
        pois: &[
            poi("Playa Jacó", 9.6146, -84.6297, Beach),
            poi("Jacó Nightlife", 9.6150, -84.6290, Nightlife),
            poi("Jacó Surf", 9.6140, -84.6300, Adventure),
        ],
    },
    BuiltinRegion {
        name: "Puerto Viejo",
        lat: 9.6533, lng: -82.7581, radius_km: 10.0,
        category: Beach,
        pois: &[
            poi("Puerto Viejo Beach", 9.6533, -82.7581, Beach),
            poi("Cahuita Nationalpark", 9.7358, -82.7881, Nature),
            poi("Sloth Sanctuary Cahuita", 9.7200, -82.7700, Wildlife),
        ],
    },
];

/// The compiled-in catalog as owned regions, in declaration order.
pub fn builtin_regions() -> Vec<Region> {
    BUILTIN_REGIONS.iter().map(builtin_to_region).collect()
}

fn builtin_to_region(region: &BuiltinRegion) -> Region {
    Region {
        name: region.name.to_string(),
        center: Coordinate::new(region.lat, region.lng),
        radius_km: region.radius_km,
        default_category: region.category,
        pois: region
            .pois
            .iter()
            .map(|p| Poi::new(p.name, p.lat, p.lng, p.category))
            .collect(),
    }
}
