//! Core state for the penteract visualizer
//!
//! This crate holds everything that changes frame to frame but has nothing to
//! do with windows or GPUs:
//!
//! - [`Rgb`] / [`Hsl`] - colors and hue rotation
//! - [`Palette`] - a three-color triple with a resolution strategy ([`PaletteKind`])
//! - [`PaletteCatalog`] - the 100-slot palette table
//! - [`PaletteEngine`] - picks the colors to draw this frame
//! - [`RotationState`] / [`ChaosClock`] - angle accumulators and chaos timing
//! - [`AppState`] - the UI state machine
//! - [`FadeOverlay`] - overlay opacity

mod color;
mod palette;
mod catalog;
mod palette_engine;
mod rotation_state;
mod fade;
mod app_state;
mod asset_error;

pub use color::{hsv_to_rgb, rotate_hue, Hsl, Rgb};
pub use palette::{Palette, PaletteKind};
pub use catalog::{
    palette_names, PaletteCatalog, PaletteSelection, PaletteSlot, BASE_PALETTES, RAINBOW_SLOT,
    SET_COUNT, SET_SHIFT_STEP, SHIFT_MARKER, SLOTS_PER_SET, SLOT_COUNT,
};
pub use palette_engine::{
    chaos_palette, PaletteEngine, DEFAULT_ANIMATION_SPEED, DEFAULT_RAINBOW_PHASE_STEP,
    SHIFT_STAGGER,
};
pub use rotation_state::{
    ChaosClock, RotationState, ANIMATED_PLANES, DEFAULT_CHAOS_INTERVAL,
    DEFAULT_CHAOS_SPEED_LIMIT, DEFAULT_MANUAL_STEP, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED,
    MANUAL_PLANES,
};
pub use fade::{FadeOverlay, FADE_STEP, OVERLAY_ALPHA};
pub use app_state::{Action, AppState, ControlMode, Effect, MenuItem, Tone, UiMode};
pub use asset_error::AssetError;

// Re-export math types used alongside core state
pub use penteract_math::{Penteract5D, RotationPlane5, Vec5};
