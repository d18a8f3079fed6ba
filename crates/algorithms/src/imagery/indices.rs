//! Spectral vegetation, water and stress indices
//!
//! Scalar index formulas evaluated on a single [`BandSample`]. Every
//! division is guarded: a zero denominator yields the index's fallback
//! value instead of NaN or infinity.
//!
//! | Index | Formula | Zero-denominator fallback |
//! |---|---|---|
//! | NDVI | (NIR − Red) / (NIR + Red) | −1 |
//! | EVI | 2.5 · (NIR − Red) / (NIR + 6·Red − 7.5·Blue + 1) | −1 |
//! | NDWI | (Green − NIR) / (Green + NIR) | −1 |
//! | SAVI | 1.5 · (NIR − Red) / (NIR + Red + 0.5) | −1 |
//! | MSI | SWIR / NIR | 3 |
//! | NBR | (NIR − SWIR) / (NIR + SWIR) | −1 |
//! | GNDVI | (NIR − Green) / (NIR + Green) | −1 |
//! | LAI | clamp(6 · NDVI, 0, 7), NDVI taken as 0 when NIR + Red = 0 | n/a |

use serde::Serialize;
use tracing::debug;
use verdant_core::{Band, BandSample, Error, IndexKind, Result};

/// Fallback for the normalized-difference family, EVI and SAVI.
pub const DEGENERATE_FALLBACK: f64 = -1.0;

/// MSI fallback when NIR is zero (top of the MSI domain).
pub const MSI_FALLBACK: f64 = 3.0;

/// Upper bound of the NDVI-derived LAI approximation.
pub const LAI_MAX: f64 = 7.0;

// ---------------------------------------------------------------------------
// Evaluation result
// ---------------------------------------------------------------------------

/// An index value together with whether a fallback was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexValue {
    pub value: f64,
    /// `true` when the formula's denominator was zero and `value` is the
    /// index's fallback (for LAI: when the inner NDVI was forced to 0).
    pub degenerate: bool,
}

impl IndexValue {
    fn exact(value: f64) -> Self {
        Self {
            value,
            degenerate: false,
        }
    }

    fn fallback(value: f64) -> Self {
        Self {
            value,
            degenerate: true,
        }
    }
}

/// Guarded `numerator / denominator`, scaled after the division.
fn guarded(gain: f64, numerator: f64, denominator: f64, fallback: f64) -> IndexValue {
    if denominator == 0.0 {
        return IndexValue::fallback(fallback);
    }
    IndexValue::exact(numerator / denominator * gain)
}

fn normalized_difference(a: f64, b: f64) -> IndexValue {
    guarded(1.0, a - b, a + b, DEGENERATE_FALLBACK)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate `kind` on `bands`, reporting whether a fallback was used.
///
/// Missing bands read as zero.
pub fn evaluate(kind: IndexKind, bands: &BandSample) -> IndexValue {
    let red = bands.get(Band::Red);
    let green = bands.get(Band::Green);
    let blue = bands.get(Band::Blue);
    let nir = bands.get(Band::Nir);
    let swir = bands.get(Band::Swir);

    match kind {
        IndexKind::Ndvi => normalized_difference(nir, red),
        IndexKind::Evi => guarded(
            2.5,
            nir - red,
            nir + 6.0 * red - 7.5 * blue + 1.0,
            DEGENERATE_FALLBACK,
        ),
        IndexKind::Ndwi => normalized_difference(green, nir),
        IndexKind::Savi => guarded(1.5, nir - red, nir + red + 0.5, DEGENERATE_FALLBACK),
        IndexKind::Msi => guarded(1.0, swir, nir, MSI_FALLBACK),
        IndexKind::Nbr => normalized_difference(nir, swir),
        IndexKind::Gndvi => normalized_difference(nir, green),
        IndexKind::Lai => {
            let ndvi = normalized_difference(nir, red);
            let base = if ndvi.degenerate { 0.0 } else { ndvi.value };
            IndexValue {
                value: (base * 6.0).clamp(0.0, LAI_MAX),
                degenerate: ndvi.degenerate,
            }
        }
    }
}

/// Index value for `kind`.
///
/// Never NaN or infinite from a zero denominator. A nonzero but tiny
/// denominator (e.g. a subnormal NIR for MSI) is divided as-is.
pub fn compute(kind: IndexKind, bands: &BandSample) -> f64 {
    evaluate(kind, bands).value
}

/// Index value by catalog id.
///
/// Unknown ids yield `0.0`; dashboards render that as a neutral reading
/// rather than failing. Use [`try_compute_index`] to surface the miss.
pub fn compute_index(index_id: &str, bands: &BandSample) -> f64 {
    match IndexKind::from_id(index_id) {
        Some(kind) => compute(kind, bands),
        None => {
            debug!(index_id, "unknown spectral index, returning 0");
            0.0
        }
    }
}

/// Strict variant of [`compute_index`]: unknown ids are an error.
pub fn try_compute_index(index_id: &str, bands: &BandSample) -> Result<f64> {
    let kind = IndexKind::from_id(index_id)
        .ok_or_else(|| Error::UnknownIndex(index_id.to_string()))?;
    Ok(compute(kind, bands))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pairs: &[(Band, f64)]) -> BandSample {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_ndvi() {
        let bands = sample(&[(Band::Nir, 0.5), (Band::Red, 0.1)]);
        let val = compute_index("ndvi", &bands);
        // (0.5 - 0.1) / (0.5 + 0.1) = 0.4/0.6 ≈ 0.6667
        assert!((val - 0.6667).abs() < 1e-4, "Expected 0.6667, got {}", val);
    }

    #[test]
    fn test_ndvi_water() {
        let bands = sample(&[(Band::Nir, 0.05), (Band::Red, 0.15)]);
        let val = compute(IndexKind::Ndvi, &bands);
        assert!(val < 0.0, "Water should have negative NDVI, got {}", val);
    }

    #[test]
    fn test_evi() {
        let bands = sample(&[(Band::Nir, 0.5), (Band::Red, 0.1), (Band::Blue, 0.05)]);
        let val = compute(IndexKind::Evi, &bands);
        let expected = 2.5 * ((0.5 - 0.1) / (0.5 + 6.0 * 0.1 - 7.5 * 0.05 + 1.0));
        assert!((val - expected).abs() < 1e-12, "Expected {}, got {}", expected, val);
    }

    #[test]
    fn test_evi_zero_denominator() {
        // 0.5 + 0 - 7.5 * 0.2 + 1 == 0
        let bands = sample(&[(Band::Nir, 0.5), (Band::Blue, 0.2)]);
        let v = evaluate(IndexKind::Evi, &bands);
        assert_eq!(v.value, -1.0);
        assert!(v.degenerate);
    }

    #[test]
    fn test_ndwi() {
        let bands = sample(&[(Band::Green, 0.3), (Band::Nir, 0.1)]);
        let val = compute(IndexKind::Ndwi, &bands);
        assert!((val - 0.5).abs() < 1e-12, "Expected 0.5, got {}", val);
    }

    #[test]
    fn test_savi() {
        let bands = sample(&[(Band::Nir, 0.5), (Band::Red, 0.1)]);
        let val = compute(IndexKind::Savi, &bands);
        // ((0.5 - 0.1) / (0.5 + 0.1 + 0.5)) * 1.5 ≈ 0.5455
        let expected = ((0.5 - 0.1) / (0.5 + 0.1 + 0.5)) * 1.5;
        assert!((val - expected).abs() < 1e-12, "Expected {}, got {}", expected, val);
    }

    #[test]
    fn test_savi_zero_denominator() {
        let bands = sample(&[(Band::Nir, -0.25), (Band::Red, -0.25)]);
        assert_eq!(compute(IndexKind::Savi, &bands), -1.0);
    }

    #[test]
    fn test_msi() {
        let bands = sample(&[(Band::Nir, 0.4), (Band::Swir, 0.6)]);
        let val = compute(IndexKind::Msi, &bands);
        assert!((val - 1.5).abs() < 1e-12, "Expected 1.5, got {}", val);
    }

    #[test]
    fn test_msi_zero_nir() {
        let bands = sample(&[(Band::Nir, 0.0), (Band::Swir, 0.4)]);
        assert_eq!(compute_index("msi", &bands), 3.0);
    }

    #[test]
    fn test_msi_subnormal_nir_is_divided() {
        // Only an exact zero takes the fallback
        let bands = sample(&[(Band::Nir, 1e-320), (Band::Swir, 1.0)]);
        let v = evaluate(IndexKind::Msi, &bands);
        assert!(!v.degenerate);
        assert!(v.value.is_infinite(), "Expected +inf, got {}", v.value);
    }

    #[test]
    fn test_nbr_and_gndvi() {
        let bands = sample(&[(Band::Nir, 0.6), (Band::Swir, 0.2), (Band::Green, 0.2)]);
        assert!((compute(IndexKind::Nbr, &bands) - 0.5).abs() < 1e-12);
        assert!((compute(IndexKind::Gndvi, &bands) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lai() {
        let bands = sample(&[(Band::Nir, 0.6), (Band::Red, 0.2)]);
        let val = compute_index("lai", &bands);
        assert!((val - 3.0).abs() < 1e-12, "Expected 3.0, got {}", val);
    }

    #[test]
    fn test_lai_clamped() {
        // NDVI = 1 → 6, inside the cap
        let dense = sample(&[(Band::Nir, 0.8)]);
        assert!((compute(IndexKind::Lai, &dense) - 6.0).abs() < 1e-12);
        // Negative NDVI clamps to zero
        let water = sample(&[(Band::Nir, 0.05), (Band::Red, 0.15)]);
        assert_eq!(compute(IndexKind::Lai, &water), 0.0);
    }

    #[test]
    fn test_all_zero_bands() {
        let zero = BandSample::new();
        for kind in IndexKind::ALL {
            let expected = match kind {
                IndexKind::Msi => 3.0,
                IndexKind::Lai => 0.0,
                // EVI denominator is 1 with all-zero bands: (0 / 1) * 2.5
                IndexKind::Evi => 0.0,
                // SAVI denominator is 0.5 with all-zero bands
                IndexKind::Savi => 0.0,
                _ => -1.0,
            };
            assert_eq!(compute(kind, &zero), expected, "{}", kind);
        }
    }

    #[test]
    fn test_unknown_index() {
        let bands = sample(&[(Band::Nir, 0.5), (Band::Red, 0.1)]);
        assert_eq!(compute_index("ndre", &bands), 0.0);
        assert_eq!(compute_index("NDVI", &bands), 0.0);
        assert_eq!(
            try_compute_index("ndre", &bands),
            Err(Error::UnknownIndex("ndre".into()))
        );
    }

    #[test]
    fn test_missing_bands_default_to_zero() {
        // Red missing → NDVI = NIR / NIR = 1
        let bands = sample(&[(Band::Nir, 0.4)]);
        assert_eq!(compute(IndexKind::Ndvi, &bands), 1.0);
    }
}
