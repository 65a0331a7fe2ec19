//! Palettes: three positional colors per frame

use serde::{Serialize, Deserialize};
use crate::color::{rotate_hue, Rgb};

/// Three colors used positionally: vertex points, edge lines, and a third
/// accent that rendering does not draw but that belongs to the palette's identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub colors: [Rgb; 3],
}

impl Palette {
    #[inline]
    pub const fn new(point: Rgb, edge: Rgb, accent: Rgb) -> Self {
        Self { colors: [point, edge, accent] }
    }

    /// Build from raw channel triples
    pub const fn from_triples(t: [(u8, u8, u8); 3]) -> Self {
        Self::new(
            Rgb::new(t[0].0, t[0].1, t[0].2),
            Rgb::new(t[1].0, t[1].1, t[1].2),
            Rgb::new(t[2].0, t[2].1, t[2].2),
        )
    }

    /// Color of vertex points
    #[inline]
    pub fn point(&self) -> Rgb {
        self.colors[0]
    }

    /// Color of edge lines
    #[inline]
    pub fn edge(&self) -> Rgb {
        self.colors[1]
    }

    #[inline]
    pub fn accent(&self) -> Rgb {
        self.colors[2]
    }

    /// Rotate every color's hue by the same amount
    pub fn hue_rotated(&self, delta: f32) -> Self {
        Self {
            colors: self.colors.map(|c| rotate_hue(c, delta)),
        }
    }

    /// Rotate hues with a per-position stagger: color `i` moves by `delta + i * stagger`
    pub fn hue_rotated_staggered(&self, delta: f32, stagger: f32) -> Self {
        let mut colors = self.colors;
        for (i, c) in colors.iter_mut().enumerate() {
            *c = rotate_hue(*c, delta + i as f32 * stagger);
        }
        Self { colors }
    }
}

/// How a catalog slot produces its colors each frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteKind {
    /// The stored colors, unmodified
    Static,
    /// Three phases of a continuous HSV rainbow
    Rainbow,
    /// A base palette whose hues drift with the frame counter
    AnimatedShift { base_slot: usize },
}
