//! Binning and styling configuration
//!
//! Two independent structures, passed separately by the caller: `TableConfig`
//! drives the binner, `RoseStyle` drives the geometry builder. Defaults match
//! the conventional wind-rose setup (16 sectors, 3 degree spacing, Viridis).

use crate::rose::palettes::PaletteSpec;

/// Configuration for binning samples into a frequency table
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Name of the field holding the directional variable, degrees
    pub direction_field: String,

    /// Name of the field holding the magnitude variable
    pub magnitude_field: String,

    /// Number of direction sectors; must be positive
    pub sectors: usize,

    /// Ascending magnitude breakpoints. When absent, 6 are computed as a
    /// linear split between the observed extremes, rounded to 1 decimal.
    pub bins: Option<Vec<f64>>,

    /// Emit fractions of the retained sample count instead of raw counts
    pub normed: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            direction_field: "wind_direction".to_string(),
            magnitude_field: "wind_speed".to_string(),
            sectors: 16,
            bins: None,
            normed: false,
        }
    }
}

/// Styling for the rose geometry builder
#[derive(Debug, Clone, PartialEq)]
pub struct RoseStyle {
    /// Gap between adjacent sector bars, degrees. Must stay below the
    /// sector width (360 / sectors).
    pub spacing_degrees: f64,

    /// Palette resolved to one color per magnitude bin
    pub palette: PaletteSpec,
}

impl Default for RoseStyle {
    fn default() -> Self {
        RoseStyle {
            spacing_degrees: 3.0,
            palette: PaletteSpec::default(),
        }
    }
}
