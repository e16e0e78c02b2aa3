//! Binning of (direction, magnitude) samples into a frequency table
//!
//! Sectors are centered on the angle they represent: for 8 sectors the
//! "North" sector covers [-22.5°, 22.5°), not [0°, 45°). Directions above
//! `360 - width/2` are folded by subtracting 360 so they land in the
//! 0°-centered sector.

use super::error::{Result, RoseError};
use super::table::FrequencyTable;
use crate::config::TableConfig;
use polars::prelude::{DataFrame, DataType};

/// Bin paired samples from `df` into a direction-sector × magnitude-bin
/// frequency table
///
/// Rows where either tracked field is missing are dropped pairwise; rows
/// missing unrelated fields are never considered. When no breakpoints are
/// configured, 6 are computed as a linear split between the observed
/// magnitude extremes, rounded to 1 decimal. The final bin is always
/// extended to +inf so magnitudes above the highest breakpoint are kept.
pub fn table(df: &DataFrame, config: &TableConfig) -> Result<FrequencyTable> {
    if config.sectors == 0 {
        return Err(RoseError::InvalidParameter(
            "sectors must be a positive integer".to_string(),
        ));
    }
    if let Some(breaks) = &config.bins {
        validate_breaks(breaks)?;
    }

    // Project onto the two tracked fields and drop incomplete pairs.
    let directions = field_values(df, &config.direction_field)?;
    let magnitudes = field_values(df, &config.magnitude_field)?;
    let pairs: Vec<(f64, f64)> = directions
        .into_iter()
        .zip(magnitudes)
        .filter_map(|pair| match pair {
            (Some(d), Some(m)) if !d.is_nan() && !m.is_nan() => Some((d, m)),
            _ => None,
        })
        .collect();

    let retained = pairs.len();
    if config.normed && retained == 0 {
        return Err(RoseError::EmptyInput(
            "cannot normalize a table over zero retained samples".to_string(),
        ));
    }

    let breaks = match &config.bins {
        Some(breaks) => breaks.clone(),
        None => default_breaks(&pairs),
    };

    let sectors = config.sectors;
    let width = 360.0 / sectors as f64;
    let mut cells = vec![vec![0.0_f64; breaks.len()]; sectors];

    for &(direction, magnitude) in &pairs {
        let Some(sector) = sector_index(direction, sectors, width) else {
            continue;
        };
        let Some(bin) = magnitude_bin(magnitude, &breaks) else {
            continue;
        };
        cells[sector][bin] += 1.0;
    }

    if config.normed {
        for row in &mut cells {
            for cell in row.iter_mut() {
                *cell /= retained as f64;
            }
        }
    }

    let sector_centers = (0..sectors).map(|i| i as f64 * width).collect();
    Ok(FrequencyTable::new(
        width,
        sector_centers,
        breaks,
        cells,
        retained,
        config.normed,
    ))
}

/// Extract one named field as nullable f64 values
fn field_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

fn validate_breaks(breaks: &[f64]) -> Result<()> {
    if breaks.len() < 2 {
        return Err(RoseError::InvalidParameter(
            "bins must contain at least 2 breakpoints".to_string(),
        ));
    }
    if breaks.windows(2).any(|w| w[0] >= w[1]) {
        return Err(RoseError::InvalidParameter(
            "bins must be strictly increasing".to_string(),
        ));
    }
    Ok(())
}

/// Assign a direction to its sector, or None when it falls outside the circle
///
/// Directions strictly above `360 - width/2` fold into the 0°-centered wrap
/// sector. Interval edges are left-closed/right-open, except the very last
/// edge: a direction exactly at `360 - width/2` belongs to the last non-wrap
/// sector.
fn sector_index(direction: f64, sectors: usize, width: f64) -> Option<usize> {
    let half = width / 2.0;
    let direction = if direction > 360.0 - half {
        direction - 360.0
    } else {
        direction
    };
    if direction < -half || direction > 360.0 - half {
        return None;
    }
    let index = ((direction + half) / width) as usize;
    Some(index.min(sectors - 1))
}

/// Assign a magnitude to its bin, or None when it lies below the first
/// breakpoint
///
/// Bins are left-closed/right-open on consecutive breakpoints; the final bin
/// is unbounded above.
fn magnitude_bin(magnitude: f64, breaks: &[f64]) -> Option<usize> {
    if magnitude < breaks[0] {
        return None;
    }
    let upper = breaks.partition_point(|b| *b <= magnitude);
    Some((upper - 1).min(breaks.len() - 1))
}

/// 6 evenly spaced breakpoints between the observed magnitude extremes,
/// rounded to 1 decimal
fn default_breaks(pairs: &[(f64, f64)]) -> Vec<f64> {
    let (min, max) = pairs.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), &(_, m)| (min.min(m), max.max(m)),
    );
    let (min, max) = if pairs.is_empty() { (0.0, 0.0) } else { (min, max) };

    (0..6)
        .map(|i| round1(min + (max - min) * i as f64 / 5.0))
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
