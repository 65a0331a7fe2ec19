//! The visualizer session
//!
//! Owns everything a running session needs: the UI state machine, rotation
//! and chaos timing, the palette engine, the penteract itself, the audio
//! cues and the canvas frames are drawn into. The host feeds it actions and
//! held-key directions, then asks it to draw; it never touches the window.

use std::time::Instant;

use penteract_core::{
    Action, AppState, ChaosClock, ControlMode, Effect, PaletteCatalog, PaletteEngine,
    Penteract5D, RotationState, Tone, UiMode,
};
use penteract_math::{Projection, ScreenTransform};
use penteract_render::{frame, screens, Canvas};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::locate_assets;
use crate::audio::{open_backend, AudioSystem, SoundBank};
use crate::config::AppConfig;

/// Per-frame tunables taken from configuration
#[derive(Clone, Copy, Debug)]
struct FrameSettings {
    manual_step: f32,
    chaos_speed_limit: f32,
    blur_alpha: u8,
    point_radius: i32,
}

/// One running visualization session
pub struct Visualizer {
    state: AppState,
    rotation: RotationState,
    chaos_clock: ChaosClock,
    palettes: PaletteEngine,
    penteract: Penteract5D,
    projection: Projection,
    audio: AudioSystem,
    rng: StdRng,
    canvas: Canvas,
    frame: u64,
    settings: FrameSettings,
}

impl Visualizer {
    /// Build a session from config with explicit audio and randomness
    pub fn new(config: &AppConfig, audio: AudioSystem, mut rng: StdRng, now: Instant) -> Self {
        let rotation = RotationState::random(
            &mut rng,
            config.rotation.min_speed,
            config.rotation.max_speed,
        );
        let palettes = PaletteEngine::new(PaletteCatalog::build())
            .with_animation_speed(config.palette.animation_speed)
            .with_rainbow_phase_step(config.palette.rainbow_phase_step);
        let projection = Projection::new(
            config.projection.distance_5d,
            config.projection.distance_3d,
            ScreenTransform::for_canvas(config.canvas.size, config.canvas.scale),
        );
        let penteract = Penteract5D::new();

        log::info!(
            "Penteract: {} vertices, {} edges",
            penteract.vertex_count(),
            penteract.edge_count()
        );

        Self {
            state: AppState::new()
                .with_motion_blur(config.visuals.motion_blur)
                .with_fullscreen(config.window.fullscreen),
            rotation,
            chaos_clock: ChaosClock::new(config.rotation.chaos_interval(), now),
            palettes,
            penteract,
            projection,
            audio,
            rng,
            canvas: Canvas::new(config.canvas.size),
            frame: 0,
            settings: FrameSettings {
                manual_step: config.rotation.manual_step,
                chaos_speed_limit: config.rotation.chaos_speed_limit,
                blur_alpha: config.visuals.blur_alpha,
                point_radius: config.canvas.point_radius,
            },
        }
    }

    /// Build a session with sounds from the asset directory and an OS-seeded RNG
    pub fn from_config(config: &AppConfig, now: Instant) -> Self {
        let audio = if config.audio.enabled {
            let dir = locate_assets(config.audio.assets_dir.as_deref());
            AudioSystem::new(SoundBank::load(&dir), open_backend(), true)
        } else {
            log::info!("Audio disabled");
            AudioSystem::disabled()
        };
        Self::new(config, audio, StdRng::from_entropy(), now)
    }

    /// The launch cue
    pub fn play_startup(&mut self) {
        self.audio.play(Tone::Startup, &mut self.rng);
    }

    /// Apply an action, carrying out audio effects here
    ///
    /// Returns the effects only the host can perform (fullscreen, quit).
    pub fn handle_action(&mut self, action: Action) -> Vec<Effect> {
        let before = self.state.mode();
        let effects = self.state.apply(action);
        if self.state.mode() != before {
            log::info!("Mode: {} -> {}", before.label(), self.state.mode().label());
        }

        let mut host_effects = Vec::new();
        for effect in effects {
            match effect {
                Effect::Play(tone) => self.audio.play(tone, &mut self.rng),
                Effect::StartMusic => self.audio.start_music(),
                Effect::StopMusic => self.audio.stop_music(),
                Effect::ToggleFullscreen | Effect::Quit => host_effects.push(effect),
            }
        }
        host_effects
    }

    /// Advance one frame
    ///
    /// `directions` holds the manual rotation key state for xy, yz and zw.
    /// Angles only move while the visualization is unobscured.
    pub fn update(&mut self, directions: [i8; 3], now: Instant) {
        self.frame = self.frame.wrapping_add(1);

        if self.state.mode() == UiMode::Visualization {
            match self.state.control() {
                ControlMode::Automatic => {
                    if self.state.chaos() {
                        self.rotation.advance_chaos(
                            &mut self.chaos_clock,
                            now,
                            &mut self.rng,
                            self.settings.chaos_speed_limit,
                        );
                        if self.chaos_clock.palette_due(now) {
                            self.state.advance_chaos_cursor();
                        }
                    }
                    self.rotation.advance_auto();
                }
                ControlMode::Manual => {
                    self.rotation
                        .advance_manual(directions, self.settings.manual_step);
                }
            }
        }

        self.state.tick_fades();
    }

    /// Draw the current frame into the canvas
    pub fn draw(&mut self) -> &Canvas {
        match self.state.mode() {
            UiMode::Menu => screens::draw_main_menu(&mut self.canvas, &self.state),
            UiMode::Visualization => self.draw_visualization(),
            // Overlays sit on top of the frozen last frame
            UiMode::PaletteSelect => {
                screens::draw_palette_picker(&mut self.canvas, &self.state, self.palettes.catalog())
            }
            UiMode::KeybindOverlay => {
                screens::draw_keybind_overlay(&mut self.canvas, self.state.keybind_fade().alpha())
            }
        }
        &self.canvas
    }

    fn draw_visualization(&mut self) {
        frame::begin_frame(
            &mut self.canvas,
            self.state.motion_blur(),
            self.settings.blur_alpha,
        );

        let rotated = self.rotation.rotate_all(self.penteract.vertices());
        let points = self.projection.project_all(&rotated);
        let palette = self.palettes.resolve(
            self.state.selection(),
            self.state.chaos(),
            self.frame,
            &mut self.rng,
        );
        frame::draw_penteract(
            &mut self.canvas,
            &points,
            self.penteract.edges(),
            &palette,
            self.settings.point_radius,
        );

        screens::draw_hud(&mut self.canvas, &self.state);
        if self.state.chaos() {
            screens::draw_chaos_banner(&mut self.canvas);
        }

        // Overlays that were just closed fade out over the live view
        if self.state.keybind_fade().is_visible() {
            screens::draw_keybind_overlay(&mut self.canvas, self.state.keybind_fade().alpha());
        }
        if self.state.palette_fade().is_visible() {
            screens::draw_palette_fade(&mut self.canvas, self.state.palette_fade().alpha());
        }
    }

    /// Name of the palette currently selected
    pub fn palette_name(&self) -> String {
        self.palettes.catalog().name(self.state.selection().index())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn is_music_playing(&self) -> bool {
        self.audio.is_music_playing()
    }

    /// Frames advanced since launch
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
