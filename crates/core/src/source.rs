//! Display names for satellite data sources.

const SOURCE_NAMES: &[(&str, &str)] = &[
    ("modis", "MODIS"),
    ("sentinel-1", "Sentinel-1 SAR"),
    ("sentinel-2", "Sentinel-2"),
    ("landsat", "Landsat 8/9"),
    ("planet", "PlanetScope"),
];

/// Human-readable name for a source id. Unknown ids are returned as-is.
pub fn source_display_name(source_id: &str) -> &str {
    SOURCE_NAMES
        .iter()
        .find(|(id, _)| *id == source_id)
        .map_or(source_id, |(_, name)| *name)
}
