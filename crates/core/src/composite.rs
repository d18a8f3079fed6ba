//! False-color band composites offered by the imagery viewer.

use serde::Serialize;

/// A named mapping of sensor bands onto display RGB channels.
///
/// Channel names are sensor band labels, which include bands outside
/// [`crate::Band`] (e.g. "SWIR1", "SWIR2").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandComposite {
    pub id: &'static str,
    pub name: &'static str,
    pub red_band: &'static str,
    pub green_band: &'static str,
    pub blue_band: &'static str,
    pub description: &'static str,
}

static BAND_COMPOSITES: [BandComposite; 4] = [
    BandComposite {
        id: "natural",
        name: "Natural Color",
        red_band: "Red",
        green_band: "Green",
        blue_band: "Blue",
        description: "True color representation as seen by human eye",
    },
    BandComposite {
        id: "false-color",
        name: "False Color (NIR)",
        red_band: "NIR",
        green_band: "Red",
        blue_band: "Green",
        description: "Standard false color - vegetation appears red",
    },
    BandComposite {
        id: "swir",
        name: "Shortwave Infrared",
        red_band: "SWIR2",
        green_band: "NIR",
        blue_band: "Red",
        description: "Emphasizes moisture content and soil differences",
    },
    BandComposite {
        id: "agriculture",
        name: "Agriculture",
        red_band: "SWIR1",
        green_band: "NIR",
        blue_band: "Blue",
        description: "Optimal for crop monitoring and biomass assessment",
    },
];

pub fn band_composites() -> &'static [BandComposite] {
    &BAND_COMPOSITES
}

pub fn get_band_composite(id: &str) -> Option<&'static BandComposite> {
    BAND_COMPOSITES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_color_puts_nir_on_red() {
        let c = get_band_composite("false-color").unwrap();
        assert_eq!((c.red_band, c.green_band, c.blue_band), ("NIR", "Red", "Green"));
    }

    #[test]
    fn unknown_composite() {
        assert!(get_band_composite("thermal").is_none());
        assert_eq!(band_composites().len(), 4);
    }
}
