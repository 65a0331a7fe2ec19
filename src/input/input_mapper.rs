//! Input mapping from raw key events to semantic actions
//!
//! Maps keyboard input to the [`Action`]s the UI state machine understands.
//! Rotation keys (WASD, QE) are NOT mapped here - they go directly to the
//! RotationController.

use penteract_core::Action;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// `shift` is whether either shift key is held. Returns `None` for key
    /// releases, rotation keys, and unbound keys.
    pub fn map_keyboard(key: KeyCode, state: ElementState, shift: bool) -> Option<Action> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        if let Some(index) = Self::digit_index(key) {
            return Some(if shift {
                Action::SelectSet(index)
            } else {
                Action::SelectSlot(index)
            });
        }

        match key {
            KeyCode::ArrowUp => Some(Action::Up),
            KeyCode::ArrowDown => Some(Action::Down),
            KeyCode::ArrowLeft => Some(Action::Left),
            KeyCode::ArrowRight => Some(Action::Right),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(Action::Confirm),
            KeyCode::Escape => Some(Action::Back),
            KeyCode::Space => Some(Action::CyclePalette),
            KeyCode::KeyB => Some(Action::ToggleMotionBlur),
            KeyCode::KeyC => Some(Action::ToggleChaos),
            KeyCode::F11 => Some(Action::ToggleFullscreen),
            KeyCode::KeyM if shift => Some(Action::ToggleKeybinds),
            KeyCode::KeyP if shift => Some(Action::TogglePaletteMenu),
            _ => None, // Rotation keys handled by controller
        }
    }

    /// Keyboard row 1..9, 0 as a zero-based index 0..9
    fn digit_index(key: KeyCode) -> Option<usize> {
        let index = match key {
            KeyCode::Digit1 => 0,
            KeyCode::Digit2 => 1,
            KeyCode::Digit3 => 2,
            KeyCode::Digit4 => 3,
            KeyCode::Digit5 => 4,
            KeyCode::Digit6 => 5,
            KeyCode::Digit7 => 6,
            KeyCode::Digit8 => 7,
            KeyCode::Digit9 => 8,
            KeyCode::Digit0 => 9,
            _ => return None,
        };
        Some(index)
    }
}
