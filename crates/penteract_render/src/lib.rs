//! Penteract rendering
//!
//! Frames are drawn on the CPU into a square [`canvas::Canvas`] and then
//! presented through wgpu. Fullscreen output is letterboxed; a window shows
//! the canvas at its native size.
//!
//! ## Key Components
//!
//! - [`canvas::Canvas`] - RGBA pixel buffer and `embedded-graphics` draw target
//! - [`font`] - scaled monospace text
//! - [`frame`] - drawing the projected penteract
//! - [`screens`] - menu, palette picker, keybind overlay and HUD
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::PresentPipeline`] - canvas upload and letterboxed blit

pub mod canvas;
pub mod context;
pub mod font;
pub mod frame;
pub mod letterbox;
pub mod pipeline;
pub mod screens;

pub use canvas::Canvas;
pub use letterbox::Letterbox;

// Re-export the types frames are built from
pub use penteract_core::{Palette, Rgb};
pub use penteract_math::{Edge, Point2};
