//! # Verdant Core
//!
//! Shared types for the Verdant spectral index engine.
//!
//! This crate provides:
//! - [`IndexDefinition`] / [`IndexKind`]: the static index catalog with
//!   per-index domains and color scales
//! - [`Band`] / [`BandSample`]: reflectance readings fed to index formulas
//! - [`BandComposite`]: false-color band combinations
//! - [`source_display_name`]: satellite source labels
//! - [`Error`] / [`Result`]: errors for the strict and grid APIs

pub mod band;
pub mod catalog;
pub mod composite;
pub mod error;
pub mod source;

pub use band::{Band, BandSample};
pub use catalog::{
    get_index_definition, index_definitions, ColorStop, IndexDefinition, IndexKind, Rgb,
};
pub use composite::{band_composites, get_band_composite, BandComposite};
pub use error::{Error, Result};
pub use source::source_display_name;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::band::{Band, BandSample};
    pub use crate::catalog::{get_index_definition, ColorStop, IndexDefinition, IndexKind, Rgb};
    pub use crate::error::{Error, Result};
}
