//! Wind-rose core: binning, geometry, palettes and the polar axis
//!
//! Structure:
//! - `binning.rs`: samples → frequency table
//! - `table.rs`: the frequency table type
//! - `geometry.rs`: frequency table → stacked polar bar descriptors
//! - `palettes.rs`: palette registry and color resolution
//! - `axis.rs`: renderer-facing polar axis description
//! - `error.rs`: error types

pub mod axis;
pub mod binning;
pub mod error;
pub mod geometry;
pub mod palettes;
pub mod table;

// Re-exports for convenience
pub use axis::{AngularTick, PolarAxis};
pub use error::{Result, RoseError};
pub use geometry::{BarDescriptor, RoseGeometry};
pub use palettes::PaletteSpec;
pub use table::FrequencyTable;
