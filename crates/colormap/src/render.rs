//! Index-grid-to-RGBA rendering using index color scales.

use ndarray::Array2;
use verdant_core::IndexKind;

use crate::scale::interpolate_stops;

/// Parameters for rendering an index grid.
#[derive(Debug, Clone)]
pub struct ColormapParams {
    /// Index whose color scale is applied.
    pub kind: IndexKind,
    /// Color for non-finite cells (RGBA). Default: fully transparent.
    pub nodata_color: [u8; 4],
}

impl ColormapParams {
    pub fn new(kind: IndexKind) -> Self {
        Self {
            kind,
            nodata_color: [0, 0, 0, 0],
        }
    }

    pub fn with_nodata_color(mut self, rgba: [u8; 4]) -> Self {
        self.nodata_color = rgba;
        self
    }
}

/// Convert a grid of index values to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order.
/// Finite cells are colored on the index scale exactly as
/// [`crate::color_for_value`] would color them and are fully opaque.
/// NaN and infinite cells take `params.nodata_color`.
pub fn index_grid_to_rgba(grid: &Array2<f64>, params: &ColormapParams) -> Vec<u8> {
    let stops = params.kind.definition().sorted_stops();
    let mut rgba = Vec::with_capacity(grid.len() * 4);

    for &v in grid.iter() {
        if v.is_finite() {
            let c = interpolate_stops(&stops, v);
            rgba.extend_from_slice(&[c.r, c.g, c.b, 255]);
        } else {
            rgba.extend_from_slice(&params.nodata_color);
        }
    }

    rgba
}
