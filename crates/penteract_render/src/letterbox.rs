//! Fitting the square canvas onto an arbitrary surface

/// A square region of the output surface, in physical pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Letterbox {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Letterbox {
    /// The largest centred square that fits a `width` x `height` surface
    ///
    /// The remainder on the long axis becomes black bars.
    pub fn fit(width: u32, height: u32) -> Self {
        let size = width.min(height);
        Self {
            x: (width - size) / 2,
            y: (height - size) / 2,
            size,
        }
    }

    /// Where a `canvas`-sized square goes on the surface
    ///
    /// Fullscreen scales it to [`Letterbox::fit`]. A window shows it 1:1 at
    /// the top-left corner, shrinking only when the window is too small.
    pub fn place(width: u32, height: u32, canvas: u32, fullscreen: bool) -> Self {
        if fullscreen || canvas > width.min(height) {
            return Self::fit(width, height);
        }
        Self { x: 0, y: 0, size: canvas }
    }

    /// Whether there is anything to draw into
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_surface_is_filled() {
        assert_eq!(Letterbox::fit(800, 800), Letterbox { x: 0, y: 0, size: 800 });
    }

    #[test]
    fn test_wide_surface_has_side_bars() {
        assert_eq!(Letterbox::fit(1920, 1080), Letterbox { x: 420, y: 0, size: 1080 });
    }

    #[test]
    fn test_tall_surface_has_top_and_bottom_bars() {
        assert_eq!(Letterbox::fit(600, 1001), Letterbox { x: 0, y: 200, size: 600 });
    }

    #[test]
    fn test_window_shows_canvas_unscaled() {
        assert_eq!(Letterbox::place(1200, 900, 800, false), Letterbox { x: 0, y: 0, size: 800 });
        assert_eq!(Letterbox::place(800, 800, 800, false), Letterbox { x: 0, y: 0, size: 800 });
    }

    #[test]
    fn test_fullscreen_scales_canvas() {
        assert_eq!(
            Letterbox::place(1920, 1080, 800, true),
            Letterbox { x: 420, y: 0, size: 1080 }
        );
    }

    #[test]
    fn test_small_window_shrinks_canvas() {
        assert_eq!(Letterbox::place(700, 500, 800, false), Letterbox { x: 100, y: 0, size: 500 });
    }

    #[test]
    fn test_minimized_surface() {
        assert!(Letterbox::fit(0, 720).is_empty());
    }
}
