//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use penteract_core::UiMode;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_resizable(true)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    /// Switch between borderless fullscreen and windowed
    pub fn set_fullscreen(&self, enabled: bool) {
        if enabled == self.is_fullscreen() {
            return;
        }
        let mode = enabled.then_some(Fullscreen::Borderless(None));
        self.window.set_fullscreen(mode);
        log::info!("Fullscreen: {}", if enabled { "ON" } else { "OFF" });
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        self.set_fullscreen(!self.is_fullscreen());
    }

    /// Update window title with mode and palette info
    pub fn update_title(&self, mode: UiMode, palette_name: &str) {
        let title = window_title(&self.base_title, mode, palette_name);
        if self.window.title() != title {
            self.window.set_title(&title);
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title text for the given mode; the menu shows only the base title
pub fn window_title(base: &str, mode: UiMode, palette_name: &str) -> String {
    match mode {
        UiMode::Menu => base.to_string(),
        _ => format!("{} - {} - {}", base, mode.label(), palette_name),
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
