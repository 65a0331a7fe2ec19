//! Application systems
//!
//! Window, GPU presentation and frame timing, kept out of main.rs.

mod frame_pacer;
mod render;
mod window;

pub use frame_pacer::FramePacer;
pub use render::{RenderError, RenderSystem};
pub use window::{window_title, WindowError, WindowSystem};
