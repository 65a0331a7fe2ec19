//! Overlay fade tracking
//!
//! An overlay's opacity moves toward a target by a fixed step each frame,
//! giving the palette picker and keybind overlay their fade-in / fade-out.

/// Opacity an overlay settles at when shown
pub const OVERLAY_ALPHA: u8 = 180;

/// Opacity change per frame
pub const FADE_STEP: u8 = 15;

/// Frame-stepped opacity for one overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeOverlay {
    alpha: u8,
    target: u8,
    step: u8,
}

impl FadeOverlay {
    pub const fn new() -> Self {
        Self {
            alpha: 0,
            target: 0,
            step: FADE_STEP,
        }
    }

    /// Start fading toward the shown opacity
    pub fn fade_in(&mut self) {
        self.target = OVERLAY_ALPHA;
    }

    /// Start fading toward transparent
    pub fn fade_out(&mut self) {
        self.target = 0;
    }

    /// Advance one frame
    pub fn update(&mut self) {
        if self.alpha < self.target {
            self.alpha = self.alpha.saturating_add(self.step).min(self.target);
        } else if self.alpha > self.target {
            self.alpha = self.alpha.saturating_sub(self.step).max(self.target);
        }
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha > 0
    }

    /// Whether the overlay is still moving toward its target
    #[inline]
    pub fn is_fading(&self) -> bool {
        self.alpha != self.target
    }
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self::new()
    }
}
