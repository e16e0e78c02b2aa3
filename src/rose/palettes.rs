//! Palette registry and color resolution for magnitude bins
//!
//! Loads palettes from palettes.json (embedded at compile time) and resolves
//! a palette specification to one color per magnitude bin, decoupled from any
//! rendering backend's colormap registry.
//!
//! Palette types:
//! - `categorical`: Discrete colors for distinct bins (colors repeat after exhausting the list)
//! - `sequential`: Gradient sampled at evenly spaced positions
//! - `diverging`: Gradient with a neutral midpoint, sampled like a sequential palette

use super::error::{Result, RoseError};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Embedded palettes.json content
const PALETTES_JSON: &str = include_str!("../../palettes.json");

/// Global palette registry, initialized lazily on first access
pub static PALETTE_REGISTRY: Lazy<PaletteRegistry> = Lazy::new(|| {
    PaletteRegistry::from_json(PALETTES_JSON).unwrap_or_else(|e| {
        eprintln!("ERROR: Failed to load palettes.json: {}", e);
        PaletteRegistry::default()
    })
});

/// Default palette name used when a style does not name one
pub const DEFAULT_PALETTE: &str = "Viridis";

/// How bin colors are chosen: a named registry palette, or explicit colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSpec {
    /// Name of a registry palette (case-insensitive)
    Named(String),
    /// Explicit color sequence, cycled when shorter than the bin count
    Colors(Vec<[u8; 3]>),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        PaletteSpec::Named(DEFAULT_PALETTE.to_string())
    }
}

/// Palette type as defined in palettes.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Categorical,
    Sequential,
    Diverging,
}

/// A single palette definition from palettes.json
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub palette_type: PaletteType,
    pub colors: Vec<String>,
}

impl PaletteDefinition {
    /// Get a color by index (wraps around when the index exceeds the list)
    pub fn get_color(&self, index: usize) -> [u8; 3] {
        if self.colors.is_empty() {
            return [128, 128, 128]; // Gray fallback
        }
        let idx = index % self.colors.len();
        parse_hex_color(&self.colors[idx]).unwrap_or([128, 128, 128])
    }

    /// Get the number of colors in this palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Interpolate a color from the palette at position t ∈ [0, 1]
    ///
    /// t=0 returns the first color, t=1 returns the last color.
    /// Values in between are linearly interpolated.
    pub fn interpolate(&self, t: f64) -> [u8; 3] {
        if self.colors.is_empty() {
            return [128, 128, 128]; // Gray fallback
        }

        let t = t.clamp(0.0, 1.0);
        let n = self.colors.len();

        if n == 1 {
            return self.get_color(0);
        }

        // Map t to position in the color array
        let pos = t * (n - 1) as f64;
        let idx_low = pos.floor() as usize;
        let idx_high = (idx_low + 1).min(n - 1);
        let frac = pos - idx_low as f64;

        let color_low = self.get_color(idx_low);
        let color_high = self.get_color(idx_high);

        [
            (color_low[0] as f64 * (1.0 - frac) + color_high[0] as f64 * frac) as u8,
            (color_low[1] as f64 * (1.0 - frac) + color_high[1] as f64 * frac) as u8,
            (color_low[2] as f64 * (1.0 - frac) + color_high[2] as f64 * frac) as u8,
        ]
    }

    /// Sample `n` colors from this palette, one per magnitude bin
    ///
    /// Sequential and diverging palettes are sampled at `n` evenly spaced
    /// positions; categorical palettes take the first `n` colors and wrap.
    pub fn sample(&self, n: usize) -> Vec<[u8; 3]> {
        match self.palette_type {
            PaletteType::Categorical => (0..n).map(|i| self.get_color(i)).collect(),
            PaletteType::Sequential | PaletteType::Diverging => (0..n)
                .map(|i| {
                    let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                    self.interpolate(t)
                })
                .collect(),
        }
    }
}

/// Registry of all available palettes
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    /// All palettes by name (lowercase keys for case-insensitive lookup)
    palettes: HashMap<String, PaletteDefinition>,
}

impl PaletteRegistry {
    /// Load palettes from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, String> {
        let definitions: Vec<PaletteDefinition> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse palettes JSON: {}", e))?;

        let mut registry = Self::default();
        for def in definitions {
            registry.palettes.insert(def.name.to_lowercase(), def);
        }

        Ok(registry)
    }

    /// Get a palette by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&PaletteDefinition> {
        self.palettes.get(&name.to_lowercase())
    }
}

/// Resolve a palette specification to exactly `n` colors, one per magnitude bin
///
/// Named palettes are looked up in the embedded registry; explicit color
/// sequences are cycled when shorter than `n`. An unknown name or an empty
/// color sequence is a configuration error.
pub fn resolve_palette(spec: &PaletteSpec, n: usize) -> Result<Vec<[u8; 3]>> {
    match spec {
        PaletteSpec::Named(name) => {
            let palette = PALETTE_REGISTRY.get(name).ok_or_else(|| {
                RoseError::InvalidParameter(format!("unknown palette '{}'", name))
            })?;
            Ok(palette.sample(n))
        }
        PaletteSpec::Colors(colors) => {
            if colors.is_empty() {
                return Err(RoseError::InvalidParameter(
                    "explicit palette must contain at least one color".to_string(),
                ));
            }
            Ok((0..n).map(|i| colors[i % colors.len()]).collect())
        }
    }
}

/// Parse a hex color string to RGB array
///
/// Supports formats:
/// - `#RRGGBB` (6 hex digits)
/// - `#RRGGBBAA` (8 hex digits, alpha ignored)
/// - `RRGGBB` (without #)
/// - `RRGGBBAA` (without #)
fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');

    // Handle 6-digit (RGB) or 8-digit (RGBA) hex
    if hex.len() != 6 && hex.len() != 8 {
        eprintln!("WARN: Invalid hex color length '{}': {}", hex, hex.len());
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        // 6-digit hex
        assert_eq!(parse_hex_color("#FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("#00FF00"), Some([0, 255, 0]));
        assert_eq!(parse_hex_color("#1F78B4"), Some([31, 120, 180]));

        // Without #
        assert_eq!(parse_hex_color("FF0000"), Some([255, 0, 0]));

        // 8-digit hex (with alpha, ignored)
        assert_eq!(parse_hex_color("#440154FF"), Some([68, 1, 84]));

        // Invalid
        assert_eq!(parse_hex_color("#FFF"), None); // Too short
        assert_eq!(parse_hex_color("GGGGGG"), None); // Invalid hex
    }

    #[test]
    fn test_palette_registry_loads() {
        let registry = &*PALETTE_REGISTRY;

        let viridis = registry.get("Viridis");
        assert!(viridis.is_some());
        let viridis = viridis.unwrap();
        assert_eq!(viridis.palette_type, PaletteType::Sequential);
        assert!(!viridis.is_empty());

        // Case-insensitive lookup
        assert!(registry.get("viridis").is_some());
        assert!(registry.get("VIRIDIS").is_some());

        // First color of Palette-1 should be #1F78B4 (blue)
        let palette1 = registry.get("Palette-1").unwrap();
        assert_eq!(palette1.palette_type, PaletteType::Categorical);
        assert_eq!(palette1.get_color(0), [31, 120, 180]);
    }

    #[test]
    fn test_sequential_sampling_hits_endpoints() {
        let colors = resolve_palette(&PaletteSpec::Named("viridis".to_string()), 2).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], [0x44, 0x01, 0x54]); // first stop
        assert_eq!(colors[1], [0xFD, 0xE7, 0x25]); // last stop
    }

    #[test]
    fn test_single_bin_takes_first_color() {
        let colors = resolve_palette(&PaletteSpec::Named("Viridis".to_string()), 1).unwrap();
        assert_eq!(colors, vec![[0x44, 0x01, 0x54]]);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let spec = PaletteSpec::Named("Plasma".to_string());
        assert_eq!(
            resolve_palette(&spec, 6).unwrap(),
            resolve_palette(&spec, 6).unwrap()
        );
    }

    #[test]
    fn test_explicit_colors_cycle() {
        let spec = PaletteSpec::Colors(vec![[255, 0, 0], [0, 0, 255]]);
        let colors = resolve_palette(&spec, 5).unwrap();
        assert_eq!(
            colors,
            vec![
                [255, 0, 0],
                [0, 0, 255],
                [255, 0, 0],
                [0, 0, 255],
                [255, 0, 0]
            ]
        );
    }

    #[test]
    fn test_unknown_palette_is_invalid() {
        let err = resolve_palette(&PaletteSpec::Named("NoSuchMap".to_string()), 3).unwrap_err();
        assert!(matches!(err, RoseError::InvalidParameter(_)));
    }

    #[test]
    fn test_empty_explicit_palette_is_invalid() {
        let err = resolve_palette(&PaletteSpec::Colors(vec![]), 3).unwrap_err();
        assert!(matches!(err, RoseError::InvalidParameter(_)));
    }

    #[test]
    fn test_categorical_wrapping() {
        let palette1 = PALETTE_REGISTRY.get("Palette-1").unwrap();
        let len = palette1.len();
        assert_eq!(palette1.get_color(0), palette1.get_color(len));
    }
}
