//! Spectral bands and per-call band samples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named channel of reflected light intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    Red,
    Green,
    Blue,
    /// Near-infrared
    #[serde(rename = "NIR")]
    Nir,
    /// Shortwave infrared
    #[serde(rename = "SWIR")]
    Swir,
}

impl Band {
    /// All bands, in storage order.
    pub const ALL: [Band; 5] = [Band::Red, Band::Green, Band::Blue, Band::Nir, Band::Swir];

    /// Canonical band name as used by the dashboard ("Red", "NIR", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Band::Red => "Red",
            Band::Green => "Green",
            Band::Blue => "Blue",
            Band::Nir => "NIR",
            Band::Swir => "SWIR",
        }
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Band> {
        Band::ALL.into_iter().find(|b| b.name() == name)
    }

    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Band {
    type Err = Error;

    /// Lenient parse for user input: case-insensitive canonical names.
    fn from_str(s: &str) -> Result<Self> {
        Band::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownBand(s.to_string()))
    }
}

/// Reflectance readings for a single evaluation.
///
/// Bands that were never set read as `0.0`. A stored NaN also reads as
/// `0.0`, so a sample never feeds NaN into an index formula.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandSample {
    values: [Option<f64>; 5],
}

impl BandSample {
    /// An empty sample: every band reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, band: Band, value: f64) -> Self {
        self.set(band, value);
        self
    }

    pub fn set(&mut self, band: Band, value: f64) {
        self.values[band.slot()] = Some(value);
    }

    /// Reflectance for `band`, `0.0` when missing.
    pub fn get(&self, band: Band) -> f64 {
        match self.values[band.slot()] {
            Some(v) if !v.is_nan() => v,
            _ => 0.0,
        }
    }

    /// Whether `band` was explicitly provided.
    pub fn contains(&self, band: Band) -> bool {
        self.values[band.slot()].is_some()
    }

    /// Build a sample from string-keyed readings, as a UI layer holds them.
    ///
    /// Keys are matched exactly against canonical band names; anything else
    /// is ignored, like a missing band.
    pub fn from_named<'a, I>(readings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        readings
            .into_iter()
            .filter_map(|(name, v)| Band::from_name(name).map(|b| (b, v)))
            .collect()
    }
}

impl FromIterator<(Band, f64)> for BandSample {
    fn from_iter<I: IntoIterator<Item = (Band, f64)>>(iter: I) -> Self {
        let mut sample = BandSample::new();
        for (band, value) in iter {
            sample.set(band, value);
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bands_read_zero() {
        let s = BandSample::new().with(Band::Nir, 0.5);
        assert_eq!(s.get(Band::Nir), 0.5);
        assert_eq!(s.get(Band::Red), 0.0);
        assert!(!s.contains(Band::Red));
    }

    #[test]
    fn nan_reads_zero() {
        let s = BandSample::new().with(Band::Red, f64::NAN);
        assert!(s.contains(Band::Red));
        assert_eq!(s.get(Band::Red), 0.0);
    }

    #[test]
    fn from_named_is_case_sensitive() {
        let s = BandSample::from_named([("NIR", 0.6), ("red", 0.2), ("Red", 0.1)]);
        assert_eq!(s.get(Band::Nir), 0.6);
        assert_eq!(s.get(Band::Red), 0.1);
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!("nir".parse::<Band>().unwrap(), Band::Nir);
        assert_eq!(" Swir ".parse::<Band>().unwrap(), Band::Swir);
        assert!("SWIR2".parse::<Band>().is_err());
    }
}
