//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`P5D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Drawing canvas configuration
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Perspective distances
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rotation speeds and chaos timing
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Procedural palette tuning
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Visual effects and frame pacing
    #[serde(default)]
    pub visuals: VisualsConfig,
    /// Audio cues
    #[serde(default)]
    pub audio: AudioConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`P5D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional user overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // P5D_CANVAS__SCALE=200 -> canvas.scale = 200.0
        figment = figment.merge(Env::prefixed("P5D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Penteract (5D Hypercube)".to_string(),
            width: 800,
            height: 800,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Drawing canvas configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Side length of the square canvas in pixels
    pub size: u32,
    /// Pixels per projected unit
    pub scale: f32,
    /// Radius of vertex discs in pixels
    pub point_radius: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: 800,
            scale: 150.0,
            point_radius: 5,
        }
    }
}

/// Perspective distances for the two projection stages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Viewer distance along the fifth axis
    pub distance_5d: f32,
    /// Viewer distance along z
    pub distance_3d: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            distance_5d: 4.0,
            distance_3d: 5.0,
        }
    }
}

/// Rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Lower bound of the random startup speeds (radians per frame)
    pub min_speed: f32,
    /// Upper bound of the random startup speeds (radians per frame)
    pub max_speed: f32,
    /// Manual rotation step per frame while a key is held
    pub manual_step: f32,
    /// Milliseconds between chaos speed reassignments
    pub chaos_interval_ms: u64,
    /// Chaos speeds are drawn from [-limit, limit]
    pub chaos_speed_limit: f32,
}

impl RotationConfig {
    pub fn chaos_interval(&self) -> Duration {
        Duration::from_millis(self.chaos_interval_ms)
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.005,
            max_speed: 0.02,
            manual_step: 0.03,
            chaos_interval_ms: 20,
            chaos_speed_limit: 0.1,
        }
    }
}

/// Procedural palette configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Hue turns per frame for rainbow and shifting palettes
    pub animation_speed: f32,
    /// Frame offset between the three rainbow colors
    pub rainbow_phase_step: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            animation_speed: 0.01,
            rainbow_phase_step: 85,
        }
    }
}

/// Visual effects configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualsConfig {
    /// Start with motion blur on
    pub motion_blur: bool,
    /// Strength of the per-frame fade used for motion blur
    pub blur_alpha: u8,
    /// Frame rate target
    pub target_fps: u32,
}

impl VisualsConfig {
    /// Wall-clock budget of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            motion_blur: true,
            blur_alpha: 40,
            target_fps: 60,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Play cues and music
    pub enabled: bool,
    /// Asset directory override; discovered next to the executable when unset
    pub assets_dir: Option<PathBuf>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            assets_dir: None,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.canvas.scale, 150.0);
        assert_eq!(config.projection.distance_5d, 4.0);
        assert_eq!(config.rotation.chaos_interval(), Duration::from_millis(20));
        assert_eq!(config.palette.rainbow_phase_step, 85);
        assert!(config.visuals.motion_blur);
        assert!(config.audio.assets_dir.is_none());
    }

    #[test]
    fn test_frame_duration() {
        let visuals = VisualsConfig::default();
        let frame = visuals.frame_duration();
        assert!(frame > Duration::from_millis(16) && frame < Duration::from_millis(17));

        let zero = VisualsConfig { target_fps: 0, ..VisualsConfig::default() };
        assert_eq!(zero.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("chaos_interval_ms"));
        assert!(toml.contains("blur_alpha"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[canvas]\nscale = 200.0\n").unwrap();
        assert_eq!(config.canvas.scale, 200.0);
        assert_eq!(config.canvas.size, 800);
        assert_eq!(config.rotation.manual_step, 0.03);
    }
}
