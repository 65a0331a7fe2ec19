//! Active palette resolution
//!
//! Every frame the renderer asks which three colors to draw with. The answer
//! depends on the mode flags and the selected catalog slot, in priority order:
//! chaos, then the slot's [`PaletteKind`] (rainbow, animated shift, static).

use rand::Rng;

use crate::catalog::{PaletteCatalog, PaletteSelection};
use crate::color::{hsv_to_rgb, Rgb};
use crate::palette::{Palette, PaletteKind};

/// Hue advance per frame for animated palettes
pub const DEFAULT_ANIMATION_SPEED: f32 = 0.01;

/// Frame offset between the three rainbow phases
pub const DEFAULT_RAINBOW_PHASE_STEP: u64 = 85;

/// Per-position hue stagger of animated shift palettes
pub const SHIFT_STAGGER: f32 = 0.1;

/// Resolves the palette to draw with each frame
#[derive(Clone, Debug)]
pub struct PaletteEngine {
    catalog: PaletteCatalog,
    animation_speed: f32,
    rainbow_phase_step: u64,
}

impl PaletteEngine {
    pub fn new(catalog: PaletteCatalog) -> Self {
        Self {
            catalog,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            rainbow_phase_step: DEFAULT_RAINBOW_PHASE_STEP,
        }
    }

    /// Builder: set hue advance per frame
    pub fn with_animation_speed(mut self, speed: f32) -> Self {
        self.animation_speed = speed;
        self
    }

    /// Builder: set frame offset between rainbow phases
    pub fn with_rainbow_phase_step(mut self, step: u64) -> Self {
        self.rainbow_phase_step = step;
        self
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    /// Pick the palette for this frame
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        selection: PaletteSelection,
        chaos: bool,
        frame: u64,
        rng: &mut R,
    ) -> Palette {
        if chaos {
            return chaos_palette(rng);
        }

        let slot = self.catalog.get(selection);
        match slot.kind {
            PaletteKind::Rainbow => self.rainbow(frame),
            PaletteKind::AnimatedShift { base_slot } => {
                self.animated_shift(&self.catalog.base_palette(base_slot), frame)
            }
            PaletteKind::Static => slot.palette,
        }
    }

    /// Three hues sampled from a rainbow cycle at staggered frame offsets
    pub fn rainbow(&self, frame: u64) -> Palette {
        let phase = |k: u64| self.rainbow_color(frame + k * self.rainbow_phase_step);
        Palette::new(phase(0), phase(1), phase(2))
    }

    fn rainbow_color(&self, t: u64) -> Rgb {
        hsv_to_rgb(self.hue_at(t), 1.0, 1.0)
    }

    /// A base palette with hues drifting by `frame * speed`, staggered per color
    pub fn animated_shift(&self, base: &Palette, frame: u64) -> Palette {
        base.hue_rotated_staggered(self.hue_at(frame), SHIFT_STAGGER)
    }

    /// Hue position of frame `t`, wrapped into [0, 1)
    fn hue_at(&self, t: u64) -> f32 {
        // f64 keeps precision once the frame counter grows large
        (t as f64 * self.animation_speed as f64).rem_euclid(1.0) as f32
    }
}

/// Three independently random colors
pub fn chaos_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let mut color = || Rgb::new(rng.gen(), rng.gen(), rng.gen());
    Palette::new(color(), color(), color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RAINBOW_SLOT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> PaletteEngine {
        PaletteEngine::new(PaletteCatalog::build())
    }

    #[test]
    fn test_static_slot_returns_catalog_palette() {
        let e = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let sel = PaletteSelection::new(0, 0);
        assert_eq!(e.resolve(sel, false, 123, &mut rng), e.catalog().get(sel).palette);
    }

    #[test]
    fn test_static_slot_ignores_frame() {
        let e = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let sel = PaletteSelection::new(1, 4);
        assert_eq!(e.resolve(sel, false, 0, &mut rng), e.resolve(sel, false, 999, &mut rng));
    }

    #[test]
    fn test_rainbow_at_frame_zero() {
        let e = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let p = e.resolve(PaletteSelection::new(0, RAINBOW_SLOT), false, 0, &mut rng);
        // hue 0 is pure red
        assert_eq!(p.point(), Rgb::new(255, 0, 0));
        assert_ne!(p.edge(), p.point());
        assert_ne!(p.accent(), p.edge());
    }

    #[test]
    fn test_rainbow_repeats_every_hundred_frames() {
        let e = engine();
        // speed 0.01 -> one full hue cycle per 100 frames
        assert_eq!(e.rainbow(7), e.rainbow(107));
    }

    #[test]
    fn test_rainbow_is_fully_saturated() {
        let e = engine();
        for frame in [0, 13, 42, 77] {
            for c in e.rainbow(frame).colors {
                let max = c.r.max(c.g).max(c.b);
                let min = c.r.min(c.g).min(c.b);
                assert_eq!(max, 255);
                assert_eq!(min, 0);
            }
        }
    }

    #[test]
    fn test_animated_shift_frame_zero_is_stagger_only() {
        let e = engine();
        let base = e.catalog().base_palette(1);
        let shifted = e.animated_shift(&base, 0);
        assert_eq!(shifted.point(), base.point());
        assert_eq!(shifted, base.hue_rotated_staggered(0.0, SHIFT_STAGGER));
    }

    #[test]
    fn test_animated_shift_slot_moves_over_time() {
        let e = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let sel = PaletteSelection::new(2, 1); // "Sunset Shift"
        let a = e.resolve(sel, false, 0, &mut rng);
        let b = e.resolve(sel, false, 30, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_chaos_overrides_selection() {
        let e = engine();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let sel = PaletteSelection::new(0, 0);
        let chaos = e.resolve(sel, true, 0, &mut rng_a);
        assert_eq!(chaos, chaos_palette(&mut rng_b));
    }

    #[test]
    fn test_chaos_changes_every_frame() {
        let e = engine();
        let mut rng = StdRng::seed_from_u64(3);
        let sel = PaletteSelection::new(0, 0);
        let a = e.resolve(sel, true, 5, &mut rng);
        let b = e.resolve(sel, true, 5, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_large_frames_stay_in_hue_range() {
        let e = engine();
        for c in e.rainbow(1_000_000_007).colors {
            assert_eq!(c.r.max(c.g).max(c.b), 255);
        }
    }
}
