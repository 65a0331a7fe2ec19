//! Penteract - 5D Hypercube Visualizer
//!
//! Rotates a five-dimensional hypercube through seven planes and projects it
//! down to a square canvas, with palettes, motion blur and chaos mode.

use std::backtrace::Backtrace;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{ModifiersState, PhysicalKey},
    window::WindowId,
};

use penteract::config::AppConfig;
use penteract::input::InputMapper;
use penteract::systems::{FramePacer, RenderError, RenderSystem, WindowSystem};
use penteract::Visualizer;
use penteract_core::Effect;
use penteract_input::RotationController;

/// Main application state
struct App {
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    visualizer: Visualizer,
    /// Held manual rotation keys
    controller: RotationController,
    modifiers: ModifiersState,
    pacer: FramePacer,
    /// Set when startup fails inside the event loop
    fatal: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let now = Instant::now();
        let mut visualizer = Visualizer::from_config(&config, now);
        visualizer.play_startup();
        let pacer = FramePacer::new(config.visuals.frame_duration(), now);
        log::debug!("Frame interval {:?}", pacer.frame_duration());

        Self {
            config,
            window_system: None,
            render_system: None,
            visualizer,
            controller: RotationController::new(),
            modifiers: ModifiersState::empty(),
            pacer,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Box<dyn Error>) {
        log::error!("{}", err);
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn apply_effects(&mut self, event_loop: &ActiveEventLoop, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ToggleFullscreen => {
                    if let Some(window) = &self.window_system {
                        window.toggle_fullscreen();
                    }
                }
                Effect::Quit => {
                    log::info!("Quit selected");
                    event_loop.exit();
                }
                // Audio effects are consumed by the visualizer
                Effect::Play(_) | Effect::StartMusic | Effect::StopMusic => {}
            }
        }
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };
        let fullscreen = self
            .window_system
            .as_ref()
            .is_some_and(|window| window.is_fullscreen());
        match render_system.render_frame(self.visualizer.canvas(), fullscreen) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                if let Some(window) = &self.window_system {
                    window.request_redraw();
                }
            }
            Err(RenderError::OutOfMemory) => {
                self.fail(event_loop, Box::new(RenderError::OutOfMemory));
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => return self.fail(event_loop, Box::new(e)),
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.canvas.size,
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => return self.fail(event_loop, Box::new(e)),
        };

        window_system.update_title(self.visualizer.state().mode(), &self.visualizer.palette_name());
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused
                self.controller.release_all();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if !event.repeat {
                        let shift = self.modifiers.shift_key();
                        if let Some(action) = InputMapper::map_keyboard(key, event.state, shift) {
                            let effects = self.visualizer.handle_action(action);
                            self.apply_effects(event_loop, effects);
                        }
                    }
                    // Rotation keys go straight to the controller
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                self.present(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.pacer.is_due(now) {
            // Events for this frame are already handled; update, draw, then present
            self.visualizer.update(self.controller.key_directions(), now);
            self.visualizer.draw();
            if let Some(window) = &self.window_system {
                window.update_title(self.visualizer.state().mode(), &self.visualizer.palette_name());
                window.request_redraw();
            }
            self.pacer.advance(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn wait_for_enter() {
    eprintln!("Press Enter to exit...");
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}

fn main() -> ExitCode {
    // The log filter comes from config, so config loads before logging starts
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Penteract");

    panic::set_hook(Box::new(|info| {
        log::error!("Fatal: {}\n{}", info, Backtrace::force_capture());
    }));

    match panic::catch_unwind(AssertUnwindSafe(|| run(config))) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            log::error!("Fatal: {}\n{}", e, Backtrace::force_capture());
            wait_for_enter();
            ExitCode::FAILURE
        }
        Err(_) => {
            wait_for_enter();
            ExitCode::FAILURE
        }
    }
}
