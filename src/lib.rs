//! Penteract - a rotating 5D hypercube
//!
//! The library half of the application: configuration, input mapping,
//! asset discovery, audio cues, windowing systems and the [`Visualizer`]
//! session. `main.rs` wires these into a winit event loop.

pub mod assets;
pub mod audio;
pub mod config;
pub mod input;
pub mod systems;
pub mod visualizer;

pub use config::AppConfig;
pub use visualizer::Visualizer;
