//! 5D Mathematics Library
//!
//! This crate provides the geometry behind the penteract visualizer.
//!
//! ## Core Types
//!
//! - [`Vec5`] - 5D vector with x, y, z, w, v components
//! - [`Vec3`] - 3D point produced by the first perspective stage
//! - [`Point2`] - 2D point produced by the second perspective stage
//! - [`RotationPlane5`] - One of the 10 coordinate planes of 5-space
//! - [`RotationSequence`] - Ordered composition of plane rotations
//!
//! ## Shapes and Projection
//!
//! - [`Penteract5D`] - The 5-cube: 32 vertices, 80 edges
//! - [`Projection`] - 5D -> 3D -> 2D perspective pipeline plus screen transform

mod vec5;
mod vec3;
pub mod rotation;
pub mod penteract;
pub mod projection;

pub use vec5::Vec5;
pub use vec3::{Vec3, Point2};
pub use rotation::{RotationPlane5, PlaneRotation, RotationSequence, rotate_pair};
pub use penteract::{Penteract5D, Edge, generate_vertices, generate_edges};
pub use projection::{
    Projection, ProjectionError, ScreenTransform,
    project_5d_to_3d, project_3d_to_2d, to_screen,
};
