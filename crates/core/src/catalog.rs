//! Static registry of spectral index definitions and their color scales.
//!
//! Stop values, colors and category labels match the dashboard legends.
//! Stops are listed in declaration order; consumers that interpolate must go
//! through [`IndexDefinition::sorted_stops`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, digits are case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// An anchor of a piecewise-linear color scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    /// Position on the index domain.
    pub value: f64,
    pub color: Rgb,
    /// Category name shown in legends, e.g. "Healthy".
    pub label: &'static str,
}

impl ColorStop {
    pub const fn new(value: f64, rgb: u32, label: &'static str) -> Self {
        Self {
            value,
            color: Rgb::from_u32(rgb),
            label,
        }
    }
}

/// Supported spectral indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Normalized Difference Vegetation Index
    Ndvi,
    /// Enhanced Vegetation Index
    Evi,
    /// Normalized Difference Water Index
    Ndwi,
    /// Soil Adjusted Vegetation Index
    Savi,
    /// Moisture Stress Index
    Msi,
    /// Normalized Burn Ratio
    Nbr,
    /// Leaf Area Index (NDVI-derived approximation)
    Lai,
    /// Green Normalized Difference Vegetation Index
    Gndvi,
}

impl IndexKind {
    /// All indices, in catalog order.
    pub const ALL: [IndexKind; 8] = [
        Self::Ndvi,
        Self::Evi,
        Self::Ndwi,
        Self::Savi,
        Self::Msi,
        Self::Nbr,
        Self::Lai,
        Self::Gndvi,
    ];

    /// Catalog key ("ndvi", "evi", ...).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Ndvi => "ndvi",
            Self::Evi => "evi",
            Self::Ndwi => "ndwi",
            Self::Savi => "savi",
            Self::Msi => "msi",
            Self::Nbr => "nbr",
            Self::Lai => "lai",
            Self::Gndvi => "gndvi",
        }
    }

    /// Case-sensitive exact match on the catalog key.
    pub fn from_id(id: &str) -> Option<IndexKind> {
        IndexKind::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn definition(&self) -> &'static IndexDefinition {
        &INDEX_DEFINITIONS[*self as usize]
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IndexKind::from_id(s).ok_or_else(|| Error::UnknownIndex(s.to_string()))
    }
}

/// Immutable description of one spectral index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexDefinition {
    pub kind: IndexKind,
    pub id: &'static str,
    /// Display label.
    pub name: &'static str,
    /// Human-readable formula; not evaluated.
    pub formula: &'static str,
    pub description: &'static str,
    /// Expected output bounds `(min, max)`. Used to lay out legends, never
    /// enforced on computed values.
    pub valid_range: (f64, f64),
    /// Possibly empty.
    pub unit: &'static str,
    /// Stops in declaration order.
    pub color_scale: &'static [ColorStop],
}

impl IndexDefinition {
    /// Color stops sorted ascending by value. The sort is stable, so stops
    /// that share a value keep their declaration order.
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut stops = self.color_scale.to_vec();
        stops.sort_by(|a, b| a.value.total_cmp(&b.value));
        stops
    }
}

/// Look up an index definition by its catalog key (case-sensitive).
pub fn get_index_definition(id: &str) -> Option<&'static IndexDefinition> {
    INDEX_DEFINITIONS.iter().find(|d| d.id == id)
}

/// Every catalog entry, in [`IndexKind::ALL`] order.
pub fn index_definitions() -> &'static [IndexDefinition] {
    &INDEX_DEFINITIONS
}

// ─── Color scales ──────────────────────────────────────────────────────

const NDVI_SCALE: &[ColorStop] = &[
    ColorStop::new(-0.2, 0x8b4513, "Water/Bare"),
    ColorStop::new(0.0, 0xd2b48c, "Sparse"),
    ColorStop::new(0.3, 0xffffcc, "Low"),
    ColorStop::new(0.5, 0xc6e090, "Moderate"),
    ColorStop::new(0.7, 0x38a800, "Healthy"),
    ColorStop::new(1.0, 0x006100, "Dense"),
];

const EVI_SCALE: &[ColorStop] = &[
    ColorStop::new(-0.2, 0x7c3aed, "Very Low"),
    ColorStop::new(0.0, 0x06b6d4, "Low"),
    ColorStop::new(0.3, 0xfbbf24, "Moderate"),
    ColorStop::new(0.6, 0x22c55e, "Good"),
    ColorStop::new(1.0, 0x15803d, "Excellent"),
];

const NDWI_SCALE: &[ColorStop] = &[
    ColorStop::new(-1.0, 0xd4a574, "Dry Land"),
    ColorStop::new(-0.3, 0xfcd34d, "Dry Veg"),
    ColorStop::new(0.0, 0x93c5fd, "Moderate"),
    ColorStop::new(0.3, 0x3b82f6, "Wet Veg"),
    ColorStop::new(1.0, 0x1e40af, "Water"),
];

const SAVI_SCALE: &[ColorStop] = &[
    ColorStop::new(-0.5, 0x92400e, "Bare Soil"),
    ColorStop::new(0.0, 0xd4d4d4, "Sparse"),
    ColorStop::new(0.3, 0xbef264, "Low"),
    ColorStop::new(0.5, 0x84cc16, "Moderate"),
    ColorStop::new(1.0, 0x365314, "Dense"),
];

const MSI_SCALE: &[ColorStop] = &[
    ColorStop::new(0.5, 0x22c55e, "Well Hydrated"),
    ColorStop::new(1.0, 0x84cc16, "Normal"),
    ColorStop::new(1.5, 0xfbbf24, "Mild Stress"),
    ColorStop::new(2.0, 0xf97316, "Moderate Stress"),
    ColorStop::new(3.0, 0xdc2626, "Severe Stress"),
];

const NBR_SCALE: &[ColorStop] = &[
    ColorStop::new(-0.5, 0x7c2d12, "High Severity Burn"),
    ColorStop::new(-0.2, 0xea580c, "Moderate Burn"),
    ColorStop::new(0.1, 0xfcd34d, "Low Severity"),
    ColorStop::new(0.4, 0x84cc16, "Unburned"),
    ColorStop::new(1.0, 0x15803d, "Healthy Regrowth"),
];

const LAI_SCALE: &[ColorStop] = &[
    ColorStop::new(0.0, 0xfbbf24, "Bare"),
    ColorStop::new(1.0, 0xa3e635, "Low"),
    ColorStop::new(2.0, 0x22c55e, "Moderate"),
    ColorStop::new(4.0, 0x16a34a, "High"),
    ColorStop::new(7.0, 0x14532d, "Very High"),
];

const GNDVI_SCALE: &[ColorStop] = &[
    ColorStop::new(-0.2, 0x78350f, "Non-veg"),
    ColorStop::new(0.1, 0xfef08a, "Low Chlorophyll"),
    ColorStop::new(0.4, 0x86efac, "Moderate"),
    ColorStop::new(0.6, 0x22c55e, "Good"),
    ColorStop::new(1.0, 0x14532d, "High Chlorophyll"),
];

// Indexed by `IndexKind as usize`; keep in `IndexKind::ALL` order.
static INDEX_DEFINITIONS: [IndexDefinition; 8] = [
    IndexDefinition {
        kind: IndexKind::Ndvi,
        id: "ndvi",
        name: "NDVI",
        formula: "(NIR - Red) / (NIR + Red)",
        description: "Normalized Difference Vegetation Index - measures green, living vegetation",
        valid_range: (-1.0, 1.0),
        unit: "",
        color_scale: NDVI_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Evi,
        id: "evi",
        name: "EVI",
        formula: "2.5 * ((NIR - Red) / (NIR + 6*Red - 7.5*Blue + 1))",
        description: "Enhanced Vegetation Index - improves sensitivity in high biomass regions",
        valid_range: (-1.0, 1.0),
        unit: "",
        color_scale: EVI_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Ndwi,
        id: "ndwi",
        name: "NDWI",
        formula: "(Green - NIR) / (Green + NIR)",
        description: "Normalized Difference Water Index - monitors water content in vegetation",
        valid_range: (-1.0, 1.0),
        unit: "",
        color_scale: NDWI_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Savi,
        id: "savi",
        name: "SAVI",
        formula: "((NIR - Red) / (NIR + Red + 0.5)) * 1.5",
        description: "Soil Adjusted Vegetation Index - minimizes soil brightness influence",
        valid_range: (-1.0, 1.0),
        unit: "",
        color_scale: SAVI_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Msi,
        id: "msi",
        name: "MSI",
        formula: "SWIR / NIR",
        description: "Moisture Stress Index - indicates plant water stress",
        valid_range: (0.0, 3.0),
        unit: "",
        color_scale: MSI_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Nbr,
        id: "nbr",
        name: "NBR",
        formula: "(NIR - SWIR) / (NIR + SWIR)",
        description: "Normalized Burn Ratio - detects burned areas and vegetation recovery",
        valid_range: (-1.0, 1.0),
        unit: "",
        color_scale: NBR_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Lai,
        id: "lai",
        name: "LAI",
        formula: "Derived from NDVI",
        description: "Leaf Area Index - one-sided green leaf area per ground area",
        valid_range: (0.0, 7.0),
        unit: "m²/m²",
        color_scale: LAI_SCALE,
    },
    IndexDefinition {
        kind: IndexKind::Gndvi,
        id: "gndvi",
        name: "GNDVI",
        formula: "(NIR - Green) / (NIR + Green)",
        description: "Green Normalized Difference Vegetation Index - sensitive to chlorophyll content",
        valid_range: (-1.0, 1.0),
        unit: "",
        color_scale: GNDVI_SCALE,
    },
];
