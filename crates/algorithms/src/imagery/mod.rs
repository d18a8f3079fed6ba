//! Spectral index evaluation
//!
//! - Scalar indices: NDVI, EVI, NDWI, SAVI, MSI, NBR, LAI, GNDVI
//! - Grid evaluation over co-registered band planes
//! - Classification of index values into legend categories

mod classify;
mod grid;
mod indices;

pub use classify::{classify, classify_kind};
pub use grid::{compute_index_grid, compute_index_grid_by_id, BandGrid};
pub use indices::{
    compute, compute_index, evaluate, try_compute_index, IndexValue, DEGENERATE_FALLBACK,
    LAI_MAX, MSI_FALLBACK,
};
