//! GPU pipelines
//!
//! Drawing happens on the CPU canvas; the GPU only scales it onto the
//! window surface.

pub mod present_pipeline;

pub use present_pipeline::{canvas_texture_format, PresentPipeline};
