//! Keyboard input for manual rotation
//!
//! Tracks which rotation keys are held and turns them into per-plane
//! directions for the three manually controlled planes.

mod rotation_controller;

pub use rotation_controller::{RotationController, MANUAL_PLANE_COUNT};
