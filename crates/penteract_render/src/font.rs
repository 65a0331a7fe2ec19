//! UI text
//!
//! Text uses the 6x10 ASCII font built into `embedded-graphics`, blown up
//! by an integer scale factor so each font pixel becomes a square block.

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use penteract_core::Rgb;

use crate::canvas::{to_rgb888, Canvas};

/// The UI font
pub const FONT: MonoFont<'static> = FONT_6X10;

/// Draw target that maps each font pixel onto a `scale`-sized block
struct Scaled<'a> {
    canvas: &'a mut Canvas,
    origin: Point,
    scale: i32,
}

impl OriginDimensions for Scaled<'_> {
    fn size(&self) -> Size {
        let side = self.canvas.size() / self.scale as u32;
        Size::new(side, side)
    }
}

impl DrawTarget for Scaled<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            let at = self.origin + p * self.scale;
            let color = Rgb::new(color.r(), color.g(), color.b());
            self.canvas.fill_rect(at.x, at.y, self.scale, self.scale, color);
        }
        Ok(())
    }
}

/// Draw one line of text with its top-left corner at (x, y)
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: i32, color: Rgb) {
    let mut target = Scaled {
        canvas,
        origin: Point::new(x, y),
        scale: scale.max(1),
    };
    let style = MonoTextStyle::new(&FONT, to_rgb888(color));
    let _ = Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut target);
}

/// Draw text horizontally centred on the canvas
pub fn draw_text_centered(canvas: &mut Canvas, text: &str, y: i32, scale: i32, color: Rgb) {
    let x = (canvas.size() as i32 - text_width(text, scale)) / 2;
    draw_text(canvas, text, x, y, scale, color);
}

/// Width in pixels of one line of text
pub fn text_width(text: &str, scale: i32) -> i32 {
    let advance = (FONT.character_size.width + FONT.character_spacing) as i32;
    text.chars().count() as i32 * advance * scale.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> usize {
        canvas.pixels().iter().filter(|p| p[0] != 0).count()
    }

    fn lit_points(canvas: &Canvas) -> Vec<(i32, i32)> {
        let size = canvas.size() as i32;
        (0..size * size)
            .map(|i| (i % size, i / size))
            .filter(|&(x, y)| canvas.pixel(x, y).is_some_and(|c| c != Rgb::BLACK))
            .collect()
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("ABC", 1), 18);
        assert_eq!(text_width("ABC", 3), 54);
    }

    #[test]
    fn test_lowercase_has_its_own_glyphs() {
        let mut upper = Canvas::new(32);
        let mut lower = Canvas::new(32);
        draw_text(&mut upper, "AB", 0, 0, 1, Rgb::WHITE);
        draw_text(&mut lower, "ab", 0, 0, 1, Rgb::WHITE);
        assert!(lit(&upper) > 0);
        assert!(lit(&lower) > 0);
        assert_ne!(upper.pixels(), lower.pixels());
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut canvas = Canvas::new(16);
        draw_text(&mut canvas, "  ", 0, 0, 2, Rgb::WHITE);
        assert_eq!(lit(&canvas), 0);
    }

    #[test]
    fn test_scale_multiplies_coverage() {
        let mut small = Canvas::new(64);
        let mut big = Canvas::new(64);
        draw_text(&mut small, "1", 0, 0, 1, Rgb::WHITE);
        draw_text(&mut big, "1", 0, 0, 3, Rgb::WHITE);
        assert!(lit(&small) > 0);
        assert_eq!(lit(&big), lit(&small) * 9);
    }

    #[test]
    fn test_glyph_stays_in_cell() {
        let mut canvas = Canvas::new(32);
        draw_text(&mut canvas, "Wg", 4, 2, 1, Rgb::WHITE);
        let points = lit_points(&canvas);
        assert!(!points.is_empty());
        for (x, y) in points {
            assert!((4..16).contains(&x) && (2..12).contains(&y), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_text_color() {
        let mut canvas = Canvas::new(32);
        let yellow = Rgb::new(255, 255, 0);
        draw_text(&mut canvas, "H", 0, 0, 2, yellow);
        let points = lit_points(&canvas);
        assert!(!points.is_empty());
        assert!(points.iter().all(|&(x, y)| canvas.pixel(x, y) == Some(yellow)));
    }

    #[test]
    fn test_centered_text() {
        let mut canvas = Canvas::new(60);
        draw_text_centered(&mut canvas, "I", 0, 1, Rgb::WHITE);
        // the cell starts at x = 27 and is 6 wide
        let points = lit_points(&canvas);
        assert!(!points.is_empty());
        assert!(points.iter().all(|&(x, _)| (27..33).contains(&x)));
    }
}
