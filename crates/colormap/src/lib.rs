//! # Verdant Colormap
//!
//! Color mapping for spectral index values.
//!
//! Every index in the catalog carries its own multi-stop color scale. This
//! crate interpolates along those scales, lays them out as legend
//! gradients, and renders index grids to RGBA buffers.
//!
//! ## Usage
//!
//! ```
//! use verdant_colormap::{color_for_value, css_linear_gradient};
//!
//! assert_eq!(color_for_value("ndvi", 0.15).to_hex(), "#e9daac");
//! assert!(css_linear_gradient("msi").starts_with("linear-gradient(to right, "));
//! ```

mod render;
mod scale;

pub use render::{index_grid_to_rgba, ColormapParams};
pub use scale::{
    color_for_definition, color_for_kind, color_for_value, css_linear_gradient,
    scale_gradient_descriptor, GradientStop, NEUTRAL_GRAY,
};
