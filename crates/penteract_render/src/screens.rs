//! UI screens drawn onto the canvas
//!
//! The main menu and palette picker replace the visualization; the HUD,
//! chaos banner and keybind overlay are drawn over it.

use penteract_core::{AppState, MenuItem, PaletteCatalog, Rgb, OVERLAY_ALPHA, SLOTS_PER_SET};

use crate::canvas::Canvas;
use crate::font::{draw_text, draw_text_centered, text_width};

pub const TEXT_COLOR: Rgb = Rgb::WHITE;
pub const HINT_COLOR: Rgb = Rgb::new(180, 180, 180);
pub const HIGHLIGHT_COLOR: Rgb = Rgb::new(255, 255, 0);
pub const PICKER_TEXT_COLOR: Rgb = Rgb::new(200, 200, 200);
pub const PICKER_BACKGROUND: Rgb = Rgb::new(10, 10, 10);
pub const CHAOS_COLOR: Rgb = Rgb::new(255, 50, 50);

const SMALL: i32 = 2;
const MEDIUM: i32 = 3;
const LARGE: i32 = 4;
const TITLE: i32 = 5;

/// Key hints drawn in the top-left corner of the visualization
pub const HUD_LINES: [&str; 8] = [
    "WASD/QE: Rotate (manual)",
    "SPACE: Cycle palette in set",
    "B: Toggle motion blur",
    "ESC: Return to menu",
    "SHIFT+M: Toggle keybind menu",
    "SHIFT+P: Toggle palette menu",
    "C: Toggle Chaos Mode",
    "F11: Toggle fullscreen",
];

/// Contents of the keybind overlay
pub const KEYBIND_LINES: [&str; 10] = [
    "KEYBINDS:",
    "-----------------------------",
    "WASD/QE: Rotate (manual control)",
    "SPACE: Cycle palette in current set (disabled in chaos mode)",
    "B: Toggle motion blur",
    "ESC: Return to menu",
    "SHIFT + M: Toggle keybind menu",
    "SHIFT + P: Toggle palette menu (disabled in chaos mode)",
    "C: Toggle Chaos Mode",
    "F11: Toggle fullscreen",
];

pub const CHAOS_BANNER: &str = "CHAOS MODE ACTIVE";

/// Text for one main menu entry
pub fn menu_item_label(item: MenuItem, state: &AppState) -> String {
    match item {
        MenuItem::ControlStyle => format!("Control Style: {}", state.control().label()),
        MenuItem::PaletteSet => format!("Palette Set: {} (Use < or >)", state.selection().set + 1),
        MenuItem::Start => "Start Visualization".to_string(),
        MenuItem::Quit => "Quit".to_string(),
    }
}

/// The HUD status line
pub fn status_line(state: &AppState) -> String {
    let selection = state.selection();
    format!(
        "Control: {} | Palette Set: {} | Palette #: {}",
        state.control().label(),
        selection.set + 1,
        selection.slot + 1
    )
}

pub fn draw_main_menu(canvas: &mut Canvas, state: &AppState) {
    let center = canvas.size() as i32 / 2;
    canvas.clear(Rgb::BLACK);
    draw_text_centered(canvas, "Main Menu", 100, TITLE, TEXT_COLOR);

    for (idx, item) in MenuItem::ALL.iter().enumerate() {
        let color = if *item == state.menu_cursor() {
            HIGHLIGHT_COLOR
        } else {
            TEXT_COLOR
        };
        let label = menu_item_label(*item, state);
        draw_text(canvas, &label, center - 250, 250 + idx as i32 * 50, MEDIUM, color);
    }

    draw_text_centered(canvas, "Use UP/DOWN to navigate menu,", 600, SMALL, HINT_COLOR);
    draw_text_centered(
        canvas,
        "Use < or > to switch palette, ENTER to select",
        630,
        SMALL,
        HINT_COLOR,
    );
}

/// Palette picker for the current set
///
/// The background is washed in at the fade's alpha every frame, so it
/// settles to opaque while the picker stays open.
pub fn draw_palette_picker(canvas: &mut Canvas, state: &AppState, catalog: &PaletteCatalog) {
    let size = canvas.size() as i32;
    let selection = state.selection();
    canvas.blend_all(PICKER_BACKGROUND, state.palette_fade().alpha());

    let title = format!("Palette Menu - Set {} of 10", selection.set + 1);
    draw_text_centered(canvas, &title, 20, LARGE, TEXT_COLOR);

    let start = selection.set * SLOTS_PER_SET;
    for i in 0..SLOTS_PER_SET {
        let color = if i == selection.slot {
            HIGHLIGHT_COLOR
        } else {
            PICKER_TEXT_COLOR
        };
        let line = format!("{}. - {}", i + 1, catalog.name(start + i));
        draw_text(canvas, &line, 50, 100 + i as i32 * 40, MEDIUM, color);
    }

    draw_text_centered(
        canvas,
        "LEFT/RIGHT: Change set | 1-0: Select palette",
        size - 64,
        SMALL,
        HINT_COLOR,
    );
    draw_text_centered(
        canvas,
        "SHIFT+P: Exit palette menu | ESC: Main menu",
        size - 40,
        SMALL,
        HINT_COLOR,
    );
}

/// Translucent picker wash while it fades out over the visualization
pub fn draw_palette_fade(canvas: &mut Canvas, alpha: u8) {
    canvas.blend_all(PICKER_BACKGROUND, alpha);
}

/// Keybind list over a darkened frame; text fades with the overlay
pub fn draw_keybind_overlay(canvas: &mut Canvas, alpha: u8) {
    if alpha == 0 {
        return;
    }
    canvas.blend_all(Rgb::BLACK, alpha);

    let color = scale_color(TEXT_COLOR, alpha);
    for (i, line) in KEYBIND_LINES.iter().enumerate() {
        draw_text(canvas, line, 50, 50 + i as i32 * 30, SMALL, color);
    }
}

fn scale_color(color: Rgb, alpha: u8) -> Rgb {
    let a = alpha.min(OVERLAY_ALPHA) as u32;
    let s = |c: u8| (c as u32 * a / OVERLAY_ALPHA as u32) as u8;
    Rgb::new(s(color.r), s(color.g), s(color.b))
}

/// Key hints and the status line
pub fn draw_hud(canvas: &mut Canvas, state: &AppState) {
    let size = canvas.size() as i32;
    for (i, line) in HUD_LINES.iter().enumerate() {
        draw_text(canvas, line, 10, 10 + i as i32 * 30, SMALL, HINT_COLOR);
    }
    draw_text(canvas, &status_line(state), 10, size - 30, SMALL, HINT_COLOR);
}

pub fn draw_chaos_banner(canvas: &mut Canvas) {
    let x = canvas.size() as i32 - text_width(CHAOS_BANNER, LARGE) - 20;
    draw_text(canvas, CHAOS_BANNER, x, 20, LARGE, CHAOS_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use penteract_core::Action;

    fn count(canvas: &Canvas, color: Rgb) -> usize {
        let rgba = color.to_rgba();
        canvas.pixels().iter().filter(|p| **p == rgba).count()
    }

    #[test]
    fn test_menu_labels_follow_state() {
        let mut state = AppState::new();
        assert_eq!(menu_item_label(MenuItem::ControlStyle, &state), "Control Style: Auto");
        state.apply(Action::Confirm);
        assert_eq!(menu_item_label(MenuItem::ControlStyle, &state), "Control Style: Manual");
        state.apply(Action::SelectSet(4));
        assert_eq!(
            menu_item_label(MenuItem::PaletteSet, &state),
            "Palette Set: 5 (Use < or >)"
        );
    }

    #[test]
    fn test_status_line() {
        let state = AppState::new();
        assert_eq!(status_line(&state), "Control: Auto | Palette Set: 1 | Palette #: 1");
    }

    #[test]
    fn test_main_menu_highlights_cursor() {
        let mut canvas = Canvas::new(800);
        let state = AppState::new();
        draw_main_menu(&mut canvas, &state);
        assert!(count(&canvas, HIGHLIGHT_COLOR) > 0);
        assert!(count(&canvas, HINT_COLOR) > 0);
    }

    #[test]
    fn test_lines_fit_on_canvas() {
        for line in HUD_LINES.iter().chain(KEYBIND_LINES.iter()) {
            assert!(50 + text_width(line, SMALL) <= 800, "{} is too wide", line);
        }
        assert!(text_width("Palette Menu - Set 10 of 10", LARGE) <= 800);
        assert!(text_width("Main Menu", TITLE) <= 800);
    }

    #[test]
    fn test_keybind_overlay_hidden_at_zero_alpha() {
        let mut canvas = Canvas::new(800);
        canvas.clear(Rgb::WHITE);
        draw_keybind_overlay(&mut canvas, 0);
        assert_eq!(count(&canvas, Rgb::WHITE), 800 * 800);

        draw_keybind_overlay(&mut canvas, OVERLAY_ALPHA);
        assert!(count(&canvas, Rgb::WHITE) > 0);
        assert!(count(&canvas, Rgb::WHITE) < 800 * 800);
    }

    #[test]
    fn test_chaos_banner_is_red_and_right_aligned() {
        let mut canvas = Canvas::new(800);
        draw_chaos_banner(&mut canvas);
        assert!(count(&canvas, CHAOS_COLOR) > 0);
        assert_eq!(canvas.pixel(10, 30), Some(Rgb::BLACK));
    }
}
