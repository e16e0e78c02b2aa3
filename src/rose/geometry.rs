//! Angular bar geometry for polar rendering of a frequency table
//!
//! Pure geometry and color computation; drawing belongs to an external
//! renderer. Angles assume the conventional wind-rose frame downstream:
//! zero at north, increasing clockwise.

use super::axis::PolarAxis;
use super::error::{Result, RoseError};
use super::palettes::resolve_palette;
use super::table::FrequencyTable;
use crate::config::RoseStyle;
use std::f64::consts::TAU;

/// One stacked bar segment for a (sector, magnitude bin) pair
#[derive(Debug, Clone, PartialEq)]
pub struct BarDescriptor {
    /// Direction sector index (angular order)
    pub sector: usize,
    /// Magnitude bin index (ascending order)
    pub bin: usize,
    /// Sector center angle in radians, clockwise from north
    pub angle: f64,
    /// Angular bar width in radians (sector width minus spacing)
    pub width: f64,
    /// Radial offset: sum of the lower bins' values in this sector
    pub radial_start: f64,
    /// Radial extent: this cell's value
    pub height: f64,
    /// Fill color, shared by all bars of the same magnitude bin
    pub color: [u8; 3],
    /// Magnitude-bin interval label, for legends
    pub label: String,
}

/// The full rose: bar descriptors, the derived radial scale and the axis
#[derive(Debug, Clone, PartialEq)]
pub struct RoseGeometry {
    /// `sectors × n_bins` descriptors, grouped by magnitude bin with the
    /// lowest bin first (innermost ring drawn first)
    pub bars: Vec<BarDescriptor>,
    /// Largest stacked sector total; sizes the radial axis
    pub max_radius: f64,
    /// Renderer-facing polar frame description
    pub axis: PolarAxis,
}

/// Convert a frequency table into stacked polar bar descriptors
///
/// Bars of adjacent sectors are separated by `style.spacing_degrees`; the
/// spacing must stay below the sector width or bars would overlap their
/// neighbors. Colors come from the resolved palette, indexed by magnitude
/// bin so stacked rings are visually comparable across sectors.
pub fn build_bars(table: &FrequencyTable, style: &RoseStyle) -> Result<RoseGeometry> {
    let sectors = table.n_sectors();
    let n_bins = table.n_bins();

    if style.spacing_degrees < 0.0 || style.spacing_degrees >= table.sector_width() {
        return Err(RoseError::InvalidParameter(format!(
            "spacing of {} degrees must lie in [0, {}) for {} sectors",
            style.spacing_degrees,
            table.sector_width(),
            sectors
        )));
    }

    let colors = resolve_palette(&style.palette, n_bins)?;
    let step = TAU / sectors as f64;
    let bar_width = step - style.spacing_degrees.to_radians();

    // Running stacked offset per sector; bars are emitted bin-major so the
    // offsets accumulate in stacking order.
    let mut offsets = vec![0.0_f64; sectors];
    let mut bars = Vec::with_capacity(sectors * n_bins);

    for bin in 0..n_bins {
        let label = table.bin_label(bin);
        for sector in 0..sectors {
            let height = table.value(sector, bin);
            bars.push(BarDescriptor {
                sector,
                bin,
                angle: sector as f64 * step,
                width: bar_width,
                radial_start: offsets[sector],
                height,
                color: colors[bin],
                label: label.clone(),
            });
            offsets[sector] += height;
        }
    }

    let max_radius = offsets.iter().copied().fold(0.0, f64::max);
    let axis = PolarAxis::new(max_radius, table.is_normed());

    Ok(RoseGeometry {
        bars,
        max_radius,
        axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::rose::binning::table;
    use crate::rose::palettes::PaletteSpec;
    use polars::prelude::*;

    fn sample_table(normed: bool) -> FrequencyTable {
        let df = df!(
            "wind_direction" => [0.0, 10.0, 350.0, 90.0, 200.0, 200.0],
            "wind_speed" => [5.0, 5.0, 5.0, 10.0, 7.0, 8.0],
        )
        .unwrap();
        table(
            &df,
            &TableConfig {
                sectors: 4,
                normed,
                ..TableConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_descriptor_count_and_order() {
        let t = sample_table(false);
        let rose = build_bars(&t, &RoseStyle::default()).unwrap();

        assert_eq!(rose.bars.len(), 4 * 6);
        // Bin-major grouping: the first full round of bars is the lowest bin.
        for (i, bar) in rose.bars.iter().enumerate() {
            assert_eq!(bar.bin, i / 4);
            assert_eq!(bar.sector, i % 4);
        }
    }

    #[test]
    fn test_angles_and_width() {
        let t = sample_table(false);
        let style = RoseStyle {
            spacing_degrees: 3.0,
            ..RoseStyle::default()
        };
        let rose = build_bars(&t, &style).unwrap();

        let step = TAU / 4.0;
        let expected_width = step - 3.0_f64.to_radians();
        for bar in &rose.bars {
            assert!((bar.angle - bar.sector as f64 * step).abs() < 1e-12);
            assert!((bar.width - expected_width).abs() < 1e-12);
        }
    }

    #[test]
    fn test_stacking_matches_row_totals() {
        let t = sample_table(false);
        let rose = build_bars(&t, &RoseStyle::default()).unwrap();

        for sector in 0..t.n_sectors() {
            let stacked: f64 = rose
                .bars
                .iter()
                .filter(|b| b.sector == sector)
                .map(|b| b.height)
                .sum();
            assert!((stacked - t.row_total(sector)).abs() < 1e-12);

            // Each bar starts where the previous bin's stack ended.
            let mut expected_start = 0.0;
            for bar in rose.bars.iter().filter(|b| b.sector == sector) {
                assert!((bar.radial_start - expected_start).abs() < 1e-12);
                expected_start += bar.height;
            }
        }

        let expected_max = (0..t.n_sectors())
            .map(|s| t.row_total(s))
            .fold(0.0, f64::max);
        assert_eq!(rose.max_radius, expected_max);
        assert_eq!(rose.axis.outer_radius, expected_max);
    }

    #[test]
    fn test_colors_indexed_by_bin() {
        let t = sample_table(false);
        let style = RoseStyle {
            palette: PaletteSpec::Colors(vec![[255, 0, 0], [0, 255, 0]]),
            ..RoseStyle::default()
        };
        let rose = build_bars(&t, &style).unwrap();

        for bar in &rose.bars {
            let expected = if bar.bin % 2 == 0 {
                [255, 0, 0]
            } else {
                [0, 255, 0]
            };
            assert_eq!(bar.color, expected);
        }
    }

    #[test]
    fn test_axis_follows_normalization() {
        let counts = build_bars(&sample_table(false), &RoseStyle::default()).unwrap();
        assert!(!counts.axis.percent_ticks);

        let normed = build_bars(&sample_table(true), &RoseStyle::default()).unwrap();
        assert!(normed.axis.percent_ticks);
        assert!((normed.max_radius - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_spacing_validation() {
        let t = sample_table(false);

        // Sector width is 90 degrees for 4 sectors.
        let err = build_bars(
            &t,
            &RoseStyle {
                spacing_degrees: 90.0,
                ..RoseStyle::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, RoseError::InvalidParameter(_)));

        let err = build_bars(
            &t,
            &RoseStyle {
                spacing_degrees: -1.0,
                ..RoseStyle::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, RoseError::InvalidParameter(_)));

        let ok = build_bars(
            &t,
            &RoseStyle {
                spacing_degrees: 89.9,
                ..RoseStyle::default()
            },
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_labels_carry_bin_intervals() {
        let t = sample_table(false);
        let rose = build_bars(&t, &RoseStyle::default()).unwrap();
        assert_eq!(rose.bars[0].label, t.bin_label(0));
        assert_eq!(rose.bars.last().unwrap().label, t.bin_label(t.n_bins() - 1));
    }
}
