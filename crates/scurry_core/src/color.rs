//! Colors and the named palette
//!
//! Walkers are assigned distinct colors from a fixed 11-entry palette.
//! Colors are stored as sRGB bytes and converted to linear floats at the
//! GPU boundary.

use std::fmt;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Serialize, Deserialize};

/// An sRGB color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color from sRGB bytes
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sample a uniformly random color
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }

    /// Convert to linear-light RGBA floats for GPU use
    ///
    /// The render target is an sRGB format, so shader outputs must be
    /// linear; this applies the standard sRGB decode per channel.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_channel_to_linear(self.r),
            srgb_channel_to_linear(self.g),
            srgb_channel_to_linear(self.b),
            1.0,
        ]
    }

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red color
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green color
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue color
    pub const BLUE: Self = Self::new(0, 0, 255);
}

fn srgb_channel_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// The fixed named palette, 11 entries
///
/// "black" is deliberately off-black so walkers stay visible against the
/// default background.
pub static PALETTE: &[(&str, Color)] = &[
    ("white", Color::new(255, 255, 255)),
    ("green", Color::new(0, 255, 0)),
    ("red", Color::new(255, 0, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("pink", Color::new(255, 0, 127)),
    ("yellow", Color::new(255, 255, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("black", Color::new(30, 30, 30)),
    ("orange", Color::new(255, 64, 0)),
    ("purple", Color::new(148, 0, 211)),
    ("gray", Color::new(150, 150, 150)),
];

/// The fixed named palette
pub const fn palette() -> &'static [(&'static str, Color)] {
    PALETTE
}

/// Error type for palette sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// More distinct colors were requested than the palette holds
    NotEnoughColors {
        requested: usize,
        available: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::NotEnoughColors { requested, available } => write!(
                f,
                "requested {} distinct colors but the palette only has {}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for PaletteError {}

/// Sample `count` distinct colors from the palette, without replacement
///
/// Fails when `count` exceeds the palette size; sampling the full palette
/// is allowed.
pub fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<Color>, PaletteError> {
    let palette = palette();
    if count > palette.len() {
        return Err(PaletteError::NotEnoughColors {
            requested: count,
            available: palette.len(),
        });
    }
    Ok(palette
        .choose_multiple(rng, count)
        .map(|(_, color)| *color)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_eleven_entries() {
        assert_eq!(palette().len(), 11);
    }

    #[test]
    fn test_palette_accessor_returns_the_const_table() {
        // PALETTE is usable in const context and palette() is a view of it
        const FIRST: Color = PALETTE[0].1;
        assert_eq!(FIRST, Color::WHITE);
        assert!(std::ptr::eq(palette(), PALETTE));
    }

    #[test]
    fn test_palette_names_are_distinct() {
        let names: HashSet<_> = palette().iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_sample_distinct_yields_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 0..=11 {
            let colors = sample_distinct(&mut rng, count).unwrap();
            assert_eq!(colors.len(), count);
            let unique: HashSet<_> = colors.iter().collect();
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_sample_distinct_colors_come_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = sample_distinct(&mut rng, 11).unwrap();
        for color in colors {
            assert!(palette().iter().any(|(_, c)| *c == color));
        }
    }

    #[test]
    fn test_sample_more_than_palette_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = sample_distinct(&mut rng, 12).unwrap_err();
        assert_eq!(
            err,
            PaletteError::NotEnoughColors {
                requested: 12,
                available: 11,
            }
        );
    }

    #[test]
    fn test_palette_error_display() {
        let err = PaletteError::NotEnoughColors {
            requested: 20,
            available: 11,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("20"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn test_to_linear_rgba_endpoints() {
        let black = Color::new(0, 0, 0).to_linear_rgba();
        assert_eq!(black, [0.0, 0.0, 0.0, 1.0]);

        let white = Color::WHITE.to_linear_rgba();
        assert!((white[0] - 1.0).abs() < 1e-6);
        assert!((white[1] - 1.0).abs() < 1e-6);
        assert!((white[2] - 1.0).abs() < 1e-6);
        assert_eq!(white[3], 1.0);
    }

    #[test]
    fn test_to_linear_rgba_is_monotonic() {
        let low = Color::new(10, 10, 10).to_linear_rgba();
        let high = Color::new(200, 200, 200).to_linear_rgba();
        assert!(low[0] < high[0]);
    }

    #[test]
    fn test_random_color_is_deterministic_per_seed() {
        let a = Color::random(&mut StdRng::seed_from_u64(42));
        let b = Color::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
