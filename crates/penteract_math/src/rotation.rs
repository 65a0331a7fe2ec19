//! Plane rotations in 5D space
//!
//! In 5D, rotations happen in planes spanned by two coordinate axes.
//! There are C(5,2) = 10 such planes. A rotation by θ in the plane (a, b)
//! maps `(a, b) -> (a·cosθ − b·sinθ, a·sinθ + b·cosθ)` and leaves the other
//! three coordinates untouched.
//!
//! Plane rotations do not commute, so a [`RotationSequence`] keeps its steps
//! in declared order and applies them one after another.

use crate::Vec5;

/// The 10 rotation planes of 5D space
///
/// Each plane carries an orientation: the first axis rotates toward the
/// second for positive angles. `VX` is oriented v -> x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane5 {
    XY,
    XZ,
    XW,
    /// Oriented from the 5th axis toward X
    VX,
    YZ,
    YW,
    YV,
    ZW,
    ZV,
    WV,
}

impl RotationPlane5 {
    /// All 10 planes
    pub const ALL: [RotationPlane5; 10] = [
        RotationPlane5::XY,
        RotationPlane5::XZ,
        RotationPlane5::XW,
        RotationPlane5::VX,
        RotationPlane5::YZ,
        RotationPlane5::YW,
        RotationPlane5::YV,
        RotationPlane5::ZW,
        RotationPlane5::ZV,
        RotationPlane5::WV,
    ];

    /// The (from, to) axis indices of this plane
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane5::XY => (0, 1),
            RotationPlane5::XZ => (0, 2),
            RotationPlane5::XW => (0, 3),
            RotationPlane5::VX => (4, 0),
            RotationPlane5::YZ => (1, 2),
            RotationPlane5::YW => (1, 3),
            RotationPlane5::YV => (1, 4),
            RotationPlane5::ZW => (2, 3),
            RotationPlane5::ZV => (2, 4),
            RotationPlane5::WV => (3, 4),
        }
    }

    /// Lowercase two-letter label ("xy", "vx", ...)
    pub const fn label(self) -> &'static str {
        match self {
            RotationPlane5::XY => "xy",
            RotationPlane5::XZ => "xz",
            RotationPlane5::XW => "xw",
            RotationPlane5::VX => "vx",
            RotationPlane5::YZ => "yz",
            RotationPlane5::YW => "yw",
            RotationPlane5::YV => "yv",
            RotationPlane5::ZW => "zw",
            RotationPlane5::ZV => "zv",
            RotationPlane5::WV => "wv",
        }
    }
}

/// Rotate the coordinate pair (a, b) by `angle` radians
#[inline]
pub fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sin_a, cos_a) = angle.sin_cos();
    (a * cos_a - b * sin_a, a * sin_a + b * cos_a)
}

/// A single rotation: an angle applied in one plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    pub plane: RotationPlane5,
    pub angle: f32,
}

impl PlaneRotation {
    #[inline]
    pub const fn new(plane: RotationPlane5, angle: f32) -> Self {
        Self { plane, angle }
    }

    /// Apply this rotation, returning a new vector
    pub fn apply(&self, v: Vec5) -> Vec5 {
        let (i, j) = self.plane.axes();
        let (a, b) = rotate_pair(v[i], v[j], self.angle);
        let mut out = v;
        out[i] = a;
        out[j] = b;
        out
    }

    /// The rotation undoing this one
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(self.plane, -self.angle)
    }
}

/// An ordered composition of plane rotations
///
/// Each step's output feeds the next, so step order is significant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotationSequence {
    steps: Vec<PlaneRotation>,
}

impl RotationSequence {
    /// Create a sequence from explicit steps
    pub fn new(steps: Vec<PlaneRotation>) -> Self {
        Self { steps }
    }

    /// Zip a plane order with matching angles
    ///
    /// Extra planes or angles beyond the shorter slice are ignored.
    pub fn from_planes(planes: &[RotationPlane5], angles: &[f32]) -> Self {
        Self {
            steps: planes
                .iter()
                .zip(angles.iter())
                .map(|(&plane, &angle)| PlaneRotation::new(plane, angle))
                .collect(),
        }
    }

    /// The steps in application order
    pub fn steps(&self) -> &[PlaneRotation] {
        &self.steps
    }

    /// Apply every step in order to `v`
    pub fn apply(&self, v: Vec5) -> Vec5 {
        self.steps.iter().fold(v, |acc, step| step.apply(acc))
    }

    /// The sequence undoing this one: reversed order, negated angles
    pub fn inverse(&self) -> Self {
        Self {
            steps: self.steps.iter().rev().map(PlaneRotation::inverse).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_all_planes_distinct() {
        for (i, a) in RotationPlane5::ALL.iter().enumerate() {
            for b in RotationPlane5::ALL.iter().skip(i + 1) {
                let (a0, a1) = a.axes();
                let (b0, b1) = b.axes();
                let same = (a0 == b0 && a1 == b1) || (a0 == b1 && a1 == b0);
                assert!(!same, "{:?} and {:?} span the same plane", a, b);
            }
        }
    }

    #[test]
    fn test_rotate_pair_quarter_turn() {
        let (a, b) = rotate_pair(1.0, 0.0, FRAC_PI_2);
        assert!(a.abs() < EPSILON);
        assert!((b - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_plane_rotation_leaves_other_axes() {
        let v = Vec5::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let r = PlaneRotation::new(RotationPlane5::ZW, 0.7).apply(v);
        assert_eq!(r.x, 1.0);
        assert_eq!(r.y, 2.0);
        assert_eq!(r.v, 5.0);
        assert!((r.z - v.z).abs() > EPSILON);
    }

    #[test]
    fn test_vx_orientation() {
        // v rotates toward x
        let v = Vec5::new(0.0, 0.0, 0.0, 0.0, 1.0);
        let r = PlaneRotation::new(RotationPlane5::VX, FRAC_PI_2).apply(v);
        assert!((r.x - 1.0).abs() < EPSILON);
        assert!(r.v.abs() < EPSILON);
    }

    #[test]
    fn test_zero_angles_are_identity() {
        let planes = RotationPlane5::ALL;
        let seq = RotationSequence::from_planes(&planes, &[0.0; 10]);
        let v = Vec5::new(1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(seq.apply(v).approx_eq(v, EPSILON));
    }

    #[test]
    fn test_inverse_restores_vertex() {
        let planes = [
            RotationPlane5::XY,
            RotationPlane5::YZ,
            RotationPlane5::ZW,
            RotationPlane5::WV,
            RotationPlane5::VX,
            RotationPlane5::XZ,
            RotationPlane5::YW,
        ];
        let angles = [0.3, -1.2, 2.5, 0.01, 4.0, -0.6, 1.1];
        let seq = RotationSequence::from_planes(&planes, &angles);
        let v = Vec5::new(1.0, -1.0, -1.0, 1.0, 1.0);
        let back = seq.inverse().apply(seq.apply(v));
        assert!(back.approx_eq(v, 1e-4), "{:?} != {:?}", back, v);
    }

    #[test]
    fn test_order_matters() {
        let v = Vec5::new(1.0, 0.0, 0.0, 0.0, 0.0);
        let ab = RotationSequence::from_planes(
            &[RotationPlane5::XY, RotationPlane5::YZ],
            &[FRAC_PI_2, FRAC_PI_2],
        );
        let ba = RotationSequence::from_planes(
            &[RotationPlane5::YZ, RotationPlane5::XY],
            &[FRAC_PI_2, FRAC_PI_2],
        );
        assert!(!ab.apply(v).approx_eq(ba.apply(v), EPSILON));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let seq = RotationSequence::from_planes(&RotationPlane5::ALL, &[0.4; 10]);
        let v = Vec5::new(1.0, 1.0, -1.0, 1.0, -1.0);
        assert!((seq.apply(v).length() - v.length()).abs() < 1e-4);
    }
}
