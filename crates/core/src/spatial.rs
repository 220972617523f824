//! Spatial context synthesis: biome tagging from free-text descriptions and
//! the fixed coordinate/climate defaults attached to each biome.

use serde::Serialize;

/// Ordered keyword table. Scanning stops at the first keyword found as a
/// substring of the lower-cased description, so table order is part of the
/// contract: a description mentioning both a forest and a mountain resolves
/// to the forest biome.
pub static BIOME_KEYWORDS: &[(&str, &str)] = &[
    ("forest", "TEMPERATE_FOREST"),
    ("mountain", "MOUNTAINOUS_REGION"),
    ("desert", "ARID_DESERT"),
    ("swamp", "WETLAND_SWAMP"),
    ("ocean", "COASTAL_REGION"),
    ("cave", "UNDERGROUND_CAVES"),
    ("volcano", "VOLCANIC_REGION"),
    ("tundra", "ARCTIC_TUNDRA"),
    ("jungle", "TROPICAL_JUNGLE"),
    ("plains", "GRASSLAND_PLAINS"),
];

/// Fixed latitude/longitude per biome.
pub static BIOME_COORDINATES: &[(&str, (f64, f64))] = &[
    ("TEMPERATE_FOREST", (45.5231, -122.6765)),
    ("MOUNTAINOUS_REGION", (40.7128, -74.0060)),
    ("ARID_DESERT", (36.1699, -115.1398)),
    ("WETLAND_SWAMP", (29.7604, -95.3698)),
    ("COASTAL_REGION", (34.0522, -118.2437)),
    ("UNDERGROUND_CAVES", (37.7749, -122.4194)),
    ("VOLCANIC_REGION", (19.8968, -155.5828)),
    ("ARCTIC_TUNDRA", (64.2008, -149.4937)),
    ("TROPICAL_JUNGLE", (1.3521, 103.8198)),
    ("GRASSLAND_PLAINS", (39.8283, -98.5795)),
];

/// Biome used when no keyword matches, and whose coordinates back any biome
/// missing from the coordinate table.
pub const DEFAULT_BIOME: &str = "TEMPERATE_FOREST";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestingLocation {
    pub biome: String,
    pub climate: String,
    pub soil_type: String,
}

/// Synthesized geographic context for one entity. A pure function of the
/// description text; carries no identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialContext {
    pub galaxy: String,
    pub sector: String,
    pub system: String,
    pub planet: String,
    pub region: String,
    pub sub_region: String,
    pub coordinates: Coordinates,
    pub harvesting_location: HarvestingLocation,
}

/// Biome tag for a description: first keyword hit wins, default otherwise.
pub fn resolve_biome(description: &str) -> &'static str {
    let lowered = description.to_lowercase();
    BIOME_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, biome)| biome)
        .unwrap_or(DEFAULT_BIOME)
}

fn coordinates_for(biome: &str) -> (f64, f64) {
    let lookup = |b: &str| {
        BIOME_COORDINATES
            .iter()
            .find(|(name, _)| *name == b)
            .map(|&(_, coords)| coords)
    };
    lookup(biome).or_else(|| lookup(DEFAULT_BIOME)).unwrap_or((45.5231, -122.6765))
}

/// Full spatial context for a description. The galaxy/sector/system/planet
/// names, altitude, climate, and soil type are fixed constants rather than
/// derived from input.
pub fn resolve(description: &str) -> SpatialContext {
    let biome = resolve_biome(description);
    let (latitude, longitude) = coordinates_for(biome);
    SpatialContext {
        galaxy: "MILKY_WAY".to_owned(),
        sector: "ALPHA_QUADRANT".to_owned(),
        system: "SOLAR_SYSTEM".to_owned(),
        planet: "EARTH".to_owned(),
        region: biome.to_owned(),
        sub_region: format!("{biome}_OUTSKIRTS"),
        coordinates: Coordinates {
            latitude,
            longitude,
            altitude: 100,
        },
        harvesting_location: HarvestingLocation {
            biome: biome.to_lowercase(),
            climate: "moderate".to_owned(),
            soil_type: "well_drained".to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_resolves_biome_and_coordinates() {
        let ctx = resolve("found near a mountain pass");
        assert_eq!(ctx.region, "MOUNTAINOUS_REGION");
        assert_eq!(ctx.coordinates.latitude, 40.7128);
        assert_eq!(ctx.coordinates.longitude, -74.0060);
        assert_eq!(ctx.sub_region, "MOUNTAINOUS_REGION_OUTSKIRTS");
        assert_eq!(ctx.harvesting_location.biome, "mountainous_region");
    }

    #[test]
    fn no_keyword_falls_back_to_default_biome() {
        let ctx = resolve("glimmers softly");
        assert_eq!(ctx.region, "TEMPERATE_FOREST");
        assert_eq!(ctx.coordinates.latitude, 45.5231);
        assert_eq!(ctx.coordinates.longitude, -122.6765);
    }

    #[test]
    fn first_listed_keyword_wins_over_later_ones() {
        // "forest" precedes "mountain" in the table, so a description
        // containing both resolves to the forest biome.
        assert_eq!(
            resolve_biome("a mountain forest of pale birch"),
            "TEMPERATE_FOREST"
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(resolve_biome("Deep in the VOLCANO's shadow"), "VOLCANIC_REGION");
    }

    #[test]
    fn fixed_constants_are_attached() {
        let ctx = resolve("");
        assert_eq!(ctx.galaxy, "MILKY_WAY");
        assert_eq!(ctx.sector, "ALPHA_QUADRANT");
        assert_eq!(ctx.system, "SOLAR_SYSTEM");
        assert_eq!(ctx.planet, "EARTH");
        assert_eq!(ctx.coordinates.altitude, 100);
        assert_eq!(ctx.harvesting_location.climate, "moderate");
        assert_eq!(ctx.harvesting_location.soil_type, "well_drained");
    }
}
