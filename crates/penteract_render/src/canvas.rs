//! Software RGBA canvas
//!
//! Every frame is drawn on the CPU into a fixed square canvas, then uploaded
//! to the GPU as a texture. Coordinates are signed so that geometry
//! projected off-screen can be passed in directly; anything outside the
//! canvas is clipped.
//!
//! The canvas is an `embedded-graphics` draw target, so lines, discs,
//! rectangles and text all come from its primitives.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use penteract_core::Rgb;

/// Canvas color in the draw target's pixel format
#[inline]
pub fn to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// A square RGBA8 pixel buffer
#[derive(Clone, Debug)]
pub struct Canvas {
    size: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    /// Create a black canvas `size` pixels on a side
    pub fn new(size: u32) -> Self {
        let size = size.max(1);
        Self {
            size,
            pixels: vec![Rgb::BLACK.to_rgba(); (size * size) as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw pixel rows, top to bottom
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixel data as bytes, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Color at a pixel, or None outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| {
            let [r, g, b, _] = self.pixels[i];
            Rgb::new(r, g, b)
        })
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = self.size as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            None
        } else {
            Some((y * size + x) as usize)
        }
    }

    /// Fill the whole canvas
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba());
    }

    /// Darken every pixel by drawing black over it at `alpha`
    ///
    /// Used for motion blur: old frames linger and decay toward black.
    /// Channels truncate, so repeated fades always reach black.
    pub fn fade(&mut self, alpha: u8) {
        let keep = 255 - alpha as u32;
        for px in self.pixels.iter_mut() {
            for c in px.iter_mut().take(3) {
                *c = (*c as u32 * keep / 255) as u8;
            }
        }
    }

    /// Set one pixel; out-of-bounds writes are ignored
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_rgba();
        }
    }

    /// Blend `color` over one pixel at `alpha`
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: u8) {
        if let Some(i) = self.index(x, y) {
            let a = alpha as u32;
            let src = color.to_rgba();
            let dst = &mut self.pixels[i];
            for c in 0..3 {
                dst[c] = ((src[c] as u32 * a + dst[c] as u32 * (255 - a)) / 255) as u8;
            }
        }
    }

    /// One-pixel line between two points, clipped to the canvas
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        let max = (self.size - 1) as f64;
        let clipped = clip_line(x0 as f64, y0 as f64, x1 as f64, y1 as f64, max);
        let Some((x0, y0, x1, y1)) = clipped else {
            return;
        };

        let start = Point::new(x0.round() as i32, y0.round() as i32);
        let end = Point::new(x1.round() as i32, y1.round() as i32);
        let _ = Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(to_rgb888(color), 1))
            .draw(self);
    }

    /// Filled disc centred on a pixel
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        let diameter = 2 * radius.max(0) as u32 + 1;
        let _ = Circle::with_center(Point::new(cx, cy), diameter)
            .into_styled(PrimitiveStyle::with_fill(to_rgb888(color)))
            .draw(self);
    }

    /// Solid rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let area = Rectangle::new(Point::new(x, y), Size::new(w.max(0) as u32, h.max(0) as u32));
        let _ = self.fill_solid(&area, to_rgb888(color));
    }

    /// Translucent rectangle
    pub fn blend_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        for py in y.max(0)..(y + h).min(self.size as i32) {
            for px in x.max(0)..(x + w).min(self.size as i32) {
                self.blend_pixel(px, py, color, alpha);
            }
        }
    }

    /// Translucent wash over the whole canvas
    pub fn blend_all(&mut self, color: Rgb, alpha: u8) {
        let size = self.size as i32;
        self.blend_rect(0, 0, size, size, color, alpha);
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.size, self.size)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.put_pixel(coord.x, coord.y, Rgb::new(color.r(), color.g(), color.b()));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let rgba = Rgb::new(color.r(), color.g(), color.b()).to_rgba();
        let size = self.size as i32;
        for point in area.points() {
            self.pixels[(point.y * size + point.x) as usize] = rgba;
        }
        Ok(())
    }
}

/// Liang-Barsky clip of a segment to the square [0, max]
fn clip_line(x0: f64, y0: f64, x1: f64, y1: f64, max: f64) -> Option<(f64, f64, f64, f64)> {
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return None;
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [(-dx, x0), (dx, max - x0), (-dy, y0), (dy, max - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy))
}
