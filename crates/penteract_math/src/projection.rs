//! Two-stage perspective projection: 5D -> 3D -> 2D -> screen
//!
//! Each stage is a perspective divide along the last remaining axis:
//! `factor = distance / (distance - depth)`. The divide is undefined when
//! the depth reaches the viewing distance, which [`ProjectionError`] reports.

use crate::{Point2, Vec3, Vec5};

/// Default viewing distance along the 5th axis
pub const DEFAULT_DISTANCE_5D: f32 = 4.0;

/// Default viewing distance along the z axis
pub const DEFAULT_DISTANCE_3D: f32 = 5.0;

/// Smallest `distance - depth` accepted by a perspective divide
const MIN_DENOMINATOR: f32 = 1e-6;

/// Projection error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The point sits at (or numerically on) the eye plane
    Degenerate { depth: f32, distance: f32 },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::Degenerate { depth, distance } => write!(
                f,
                "Degenerate perspective divide: depth {} at viewing distance {}",
                depth, distance
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

fn perspective_factor(depth: f32, distance: f32) -> Result<f32, ProjectionError> {
    let denom = distance - depth;
    if denom.abs() < MIN_DENOMINATOR || !denom.is_finite() {
        return Err(ProjectionError::Degenerate { depth, distance });
    }
    Ok(distance / denom)
}

/// Perspective divide along the 5th coordinate
pub fn project_5d_to_3d(p: Vec5, distance: f32) -> Result<Vec3, ProjectionError> {
    let factor = perspective_factor(p.v, distance)?;
    Ok(Vec3::new(p.x * factor, p.y * factor, p.z * factor))
}

/// Perspective divide along z
pub fn project_3d_to_2d(p: Vec3, distance: f32) -> Result<Point2, ProjectionError> {
    let factor = perspective_factor(p.z, distance)?;
    Ok(Point2::new(p.x * factor, p.y * factor))
}

/// Affine map from projected 2D space to canvas pixels
#[inline]
pub fn to_screen(p: Point2, scale: f32, center: Point2) -> Point2 {
    Point2::new(p.x * scale + center.x, p.y * scale + center.y)
}

/// Scale and center offset for a square canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    pub scale: f32,
    pub center: Point2,
}

impl ScreenTransform {
    /// Transform for a square canvas of `size` pixels, centered on its midpoint
    pub fn for_canvas(size: u32, scale: f32) -> Self {
        let mid = (size / 2) as f32;
        Self {
            scale,
            center: Point2::new(mid, mid),
        }
    }

    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        to_screen(p, self.scale, self.center)
    }
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::for_canvas(800, 150.0)
    }
}

/// The full projection pipeline with its constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub distance_5d: f32,
    pub distance_3d: f32,
    pub screen: ScreenTransform,
}

impl Projection {
    pub fn new(distance_5d: f32, distance_3d: f32, screen: ScreenTransform) -> Self {
        Self {
            distance_5d,
            distance_3d,
            screen,
        }
    }

    /// Map a (rotated) 5D point to canvas coordinates
    pub fn project(&self, p: Vec5) -> Result<Point2, ProjectionError> {
        let p3 = project_5d_to_3d(p, self.distance_5d)?;
        let p2 = project_3d_to_2d(p3, self.distance_3d)?;
        Ok(self.screen.apply(p2))
    }

    /// Project every point, keeping `None` where the divide degenerates
    pub fn project_all(&self, points: &[Vec5]) -> Vec<Option<Point2>> {
        points.iter().map(|&p| self.project(p).ok()).collect()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE_5D, DEFAULT_DISTANCE_3D, ScreenTransform::default())
    }
}
