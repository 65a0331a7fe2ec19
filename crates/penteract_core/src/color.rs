//! RGB colors and the HSL / HSV conversions used by palette generation
//!
//! Channel math is done in unit floats; results are rounded back to 0-255.

use serde::{Serialize, Deserialize};

/// An 8-bit sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unit-range channels, rounding to the nearest integer
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
    }

    /// Channels as unit floats
    #[inline]
    pub fn to_unit(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }

    /// Opaque RGBA bytes
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Largest per-channel absolute difference
    pub fn max_channel_diff(self, other: Self) -> u8 {
        let d = |a: u8, b: u8| a.abs_diff(b);
        d(self.r, other.r).max(d(self.g, other.g)).max(d(self.b, other.b))
    }
}

#[inline]
fn unit_to_channel(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A color in hue / lightness / saturation form, all components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub l: f32,
    pub s: f32,
}

impl Hsl {
    /// Convert from RGB
    pub fn from_rgb(c: Rgb) -> Self {
        let [r, g, b] = c.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Self { h: 0.0, l, s: 0.0 };
        }

        let span = max - min;
        let s = if l <= 0.5 { span / (max + min) } else { span / (2.0 - max - min) };

        let rc = (max - r) / span;
        let gc = (max - g) / span;
        let bc = (max - b) / span;
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self { h: (h / 6.0).rem_euclid(1.0), l, s }
    }

    /// Convert back to RGB
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            return Rgb::from_unit(self.l, self.l, self.l);
        }
        let m2 = if self.l <= 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let m1 = 2.0 * self.l - m2;
        Rgb::from_unit(
            hue_channel(m1, m2, self.h + 1.0 / 3.0),
            hue_channel(m1, m2, self.h),
            hue_channel(m1, m2, self.h - 1.0 / 3.0),
        )
    }
}

fn hue_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// Rotate a color's hue by `delta` turns, keeping lightness and saturation
pub fn rotate_hue(c: Rgb, delta: f32) -> Rgb {
    let mut hsl = Hsl::from_rgb(c);
    hsl.h = (hsl.h + delta).rem_euclid(1.0);
    hsl.to_rgb()
}

/// Convert a hue / saturation / value triple to RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s == 0.0 {
        return Rgb::from_unit(v, v, v);
    }
    let h6 = h.rem_euclid(1.0) * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 % 6 {
        0 => Rgb::from_unit(v, t, p),
        1 => Rgb::from_unit(q, v, p),
        2 => Rgb::from_unit(p, v, t),
        3 => Rgb::from_unit(p, q, v),
        4 => Rgb::from_unit(t, p, v),
        _ => Rgb::from_unit(v, p, q),
    }
}
