//! GPU rendering system
//!
//! Manages GPU presentation including:
//! - Render context and surface
//! - The canvas present pipeline
//! - Frame submission

use std::sync::Arc;
use winit::window::Window;
use penteract_render::{
    context::{RenderContext, RenderContextError},
    pipeline::PresentPipeline,
    Canvas, Letterbox,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Init(RenderContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Init(e) => write!(f, "Render init failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Init(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for RenderError {
    fn from(err: RenderContextError) -> Self {
        RenderError::Init(err)
    }
}

/// Manages GPU presentation of the software canvas
pub struct RenderSystem {
    context: RenderContext,
    present_pipeline: PresentPipeline,
}

impl RenderSystem {
    /// Create render system for a window and a square canvas of `canvas_size`
    pub fn new(window: Arc<Window>, canvas_size: u32, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let present_pipeline =
            PresentPipeline::new(&context.device, context.config.format, canvas_size);

        log::info!(
            "Presenting {}x{} canvas to {}x{} surface ({:?})",
            canvas_size,
            canvas_size,
            context.size.width,
            context.size.height,
            context.config.format
        );

        Ok(Self {
            context,
            present_pipeline,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Upload the canvas and present it; letterboxed when `fullscreen`
    pub fn render_frame(&mut self, canvas: &Canvas, fullscreen: bool) -> Result<(), RenderError> {
        self.present_pipeline.upload(&self.context.queue, canvas);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        let size = self.context.size;
        let letterbox = Letterbox::place(size.width, size.height, canvas.size(), fullscreen);
        self.present_pipeline.render(&mut encoder, &view, letterbox);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_init_error_wraps_context_error() {
        let err = RenderError::from(RenderContextError::NoAdapter);
        assert!(format!("{}", err).starts_with("Render init failed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
