//! Polar axis description handed to the external renderer
//!
//! The crate never draws; this captures everything a renderer needs to set
//! up the polar frame around the bars without recomputation.

use std::f64::consts::FRAC_PI_4;

/// The 8 compass point labels, in clockwise angular order from north
pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// One angular tick: angle in radians (clockwise from north) and its label
#[derive(Debug, Clone, PartialEq)]
pub struct AngularTick {
    pub angle: f64,
    pub label: &'static str,
}

/// Renderer-facing axis configuration for a wind rose
#[derive(Debug, Clone, PartialEq)]
pub struct PolarAxis {
    /// The zero reference sits at the 12 o'clock position
    pub zero_at_north: bool,
    /// Angles increase clockwise
    pub clockwise: bool,
    /// Radial axis bound: the largest stacked sector total
    pub outer_radius: f64,
    /// Compass ticks at pi/4 steps
    pub ticks: Vec<AngularTick>,
    /// Format radial tick labels as percentages (normed tables) or counts
    pub percent_ticks: bool,
}

impl PolarAxis {
    pub fn new(outer_radius: f64, percent_ticks: bool) -> Self {
        let ticks = COMPASS_POINTS
            .iter()
            .enumerate()
            .map(|(i, &label)| AngularTick {
                angle: i as f64 * FRAC_PI_4,
                label,
            })
            .collect();

        PolarAxis {
            zero_at_north: true,
            clockwise: true,
            outer_radius,
            ticks,
            percent_ticks,
        }
    }
}

/// Format a radial tick label: `12.3%` for normed tables, `5` for counts
pub fn format_radial_tick(value: f64, percent: bool) -> String {
    if percent {
        format!("{:.1}%", value * 100.0)
    } else {
        format!("{}", value)
    }
}
