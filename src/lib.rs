//! windrose - wind-rose binning and polar stacked-bar geometry
//!
//! Bins paired (direction, magnitude) samples from a polars `DataFrame` into
//! a direction-sector × magnitude-bin frequency table, and derives the
//! stacked polar bar geometry for rendering the table as a wind rose. The
//! crate emits geometry only; drawing belongs to an external renderer.
//!
//! Module organization:
//! - `rose`: the binning/geometry core (table, bars, palettes, axis)
//! - `config`: the two configuration structures (binning vs. styling)

pub mod config;
pub mod rose;

pub use config::{RoseStyle, TableConfig};
pub use rose::binning::table;
pub use rose::error::{Result, RoseError};
pub use rose::geometry::{build_bars, BarDescriptor, RoseGeometry};
pub use rose::palettes::{resolve_palette, PaletteSpec};
pub use rose::table::FrequencyTable;
pub use rose::PolarAxis;
