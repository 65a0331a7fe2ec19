//! Held-key tracking for manual rotation
//!
//! Controls:
//! - W/S: XY plane forward/back
//! - A/D: YZ plane forward/back
//! - Q/E: ZW plane forward/back

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Number of planes driven from the keyboard
pub const MANUAL_PLANE_COUNT: usize = 3;

/// Held state of the rotation keys
#[derive(Clone, Debug, Default)]
pub struct RotationController {
    xy_forward: bool,  // W
    xy_back: bool,     // S
    yz_forward: bool,  // A
    yz_back: bool,     // D
    zw_forward: bool,  // Q
    zw_back: bool,     // E
}

impl RotationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a rotation key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.xy_forward = pressed; true }
            KeyCode::KeyS => { self.xy_back = pressed; true }
            KeyCode::KeyA => { self.yz_forward = pressed; true }
            KeyCode::KeyD => { self.yz_back = pressed; true }
            KeyCode::KeyQ => { self.zw_forward = pressed; true }
            KeyCode::KeyE => { self.zw_back = pressed; true }
            _ => false,
        }
    }

    /// Direction per manual plane (xy, yz, zw), each -1, 0 or 1
    ///
    /// Holding both keys of a pair cancels out.
    pub fn key_directions(&self) -> [i8; MANUAL_PLANE_COUNT] {
        [
            self.xy_forward as i8 - self.xy_back as i8,
            self.yz_forward as i8 - self.yz_back as i8,
            self.zw_forward as i8 - self.zw_back as i8,
        ]
    }

    /// Check if any rotation key is held
    pub fn is_rotating(&self) -> bool {
        self.key_directions().iter().any(|d| *d != 0)
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
