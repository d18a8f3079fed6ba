//! # Verdant Algorithms
//!
//! Spectral index evaluation for Verdant.
//!
//! ## Usage
//!
//! ```
//! use verdant_algorithms::imagery::compute_index;
//! use verdant_core::{Band, BandSample};
//!
//! let bands = BandSample::new().with(Band::Nir, 0.6).with(Band::Red, 0.2);
//! assert!((compute_index("ndvi", &bands) - 0.5).abs() < 1e-12);
//! ```

pub mod imagery;
mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        classify, compute, compute_index, compute_index_grid, evaluate, try_compute_index,
        BandGrid, IndexValue,
    };
    pub use verdant_core::prelude::*;
}
