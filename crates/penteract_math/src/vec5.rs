//! 5D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// 5D Vector with x, y, z, w, v components
///
/// Components are addressable by axis index (0 = x ... 4 = v), which is how
/// plane rotations and the perspective stages refer to them.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec5 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub v: f32,
}

impl Vec5 {
    /// Number of axes
    pub const DIM: usize = 5;

    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0, v: 0.0 };

    /// Create a new Vec5
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32, v: f32) -> Self {
        Self { x, y, z, w, v }
    }

    /// Create from an array in axis order
    #[inline]
    pub const fn from_array(a: [f32; 5]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4])
    }

    /// Components in axis order
    #[inline]
    pub const fn to_array(self) -> [f32; 5] {
        [self.x, self.y, self.z, self.w, self.v]
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w + self.v * other.v
    }

    /// Length squared
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Number of axes on which the two vectors differ exactly
    ///
    /// For hypercube corners this is the graph distance between them.
    pub fn hamming_distance(self, other: Self) -> usize {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Check approximate equality within epsilon on every axis
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (0..Self::DIM).all(|i| (self[i] - other[i]).abs() <= epsilon)
    }
}

impl Index<usize> for Vec5 {
    type Output = f32;

    fn index(&self, axis: usize) -> &f32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            4 => &self.v,
            _ => panic!("Vec5 axis {} out of range", axis),
        }
    }
}

impl IndexMut<usize> for Vec5 {
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            4 => &mut self.v,
            _ => panic!("Vec5 axis {} out of range", axis),
        }
    }
}

impl Add for Vec5 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w, self.v + rhs.v)
    }
}

impl Sub for Vec5 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w, self.v - rhs.v)
    }
}

impl Mul<f32> for Vec5 {
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s, self.v * s)
    }
}

impl Neg for Vec5 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}
