//! Application UI state machine
//!
//! Exactly one [`UiMode`] is active. Input arrives as [`Action`]s; applying
//! an action mutates the state and returns the [`Effect`]s the host must
//! carry out (tones, music, fullscreen, quitting). The state machine itself
//! never touches audio or the window.

use crate::catalog::PaletteSelection;
use crate::fade::FadeOverlay;

/// The active screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiMode {
    Menu,
    Visualization,
    PaletteSelect,
    KeybindOverlay,
}

impl UiMode {
    pub fn label(self) -> &'static str {
        match self {
            UiMode::Menu => "Main Menu",
            UiMode::Visualization => "Visualization",
            UiMode::PaletteSelect => "Palette Menu",
            UiMode::KeybindOverlay => "Keybinds",
        }
    }
}

/// How rotation angles advance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    #[default]
    Automatic,
    Manual,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Automatic => ControlMode::Manual,
            ControlMode::Manual => ControlMode::Automatic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlMode::Automatic => "Auto",
            ControlMode::Manual => "Manual",
        }
    }
}

/// Main menu entries, top to bottom
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    ControlStyle,
    PaletteSet,
    Start,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::ControlStyle,
        MenuItem::PaletteSet,
        MenuItem::Start,
        MenuItem::Quit,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    fn offset(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        Self::ALL[(self.position() as isize + delta).rem_euclid(len) as usize]
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }
}

/// Semantic input, already decoded from keys and modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    CyclePalette,
    ToggleMotionBlur,
    ToggleChaos,
    ToggleFullscreen,
    ToggleKeybinds,
    TogglePaletteMenu,
    /// Jump to a palette set (modifier + digit)
    SelectSet(usize),
    /// Pick a slot in the current set (bare digit)
    SelectSlot(usize),
}

/// Acknowledgement sounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Ordinary action
    Beep,
    /// Menu confirm and application start
    Startup,
    /// Leaving the visualization
    Escape,
}

/// Side effects the host carries out after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Play(Tone),
    StartMusic,
    StopMusic,
    ToggleFullscreen,
    Quit,
}

/// All UI-visible application state
#[derive(Clone, Debug)]
pub struct AppState {
    mode: UiMode,
    menu_cursor: MenuItem,
    selection: PaletteSelection,
    control: ControlMode,
    chaos: bool,
    motion_blur: bool,
    fullscreen: bool,
    /// Selection to restore when chaos mode ends
    saved_selection: PaletteSelection,
    /// Where chaos-mode palette cycling currently points
    chaos_cursor: PaletteSelection,
    palette_fade: FadeOverlay,
    keybind_fade: FadeOverlay,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: UiMode::Menu,
            menu_cursor: MenuItem::default(),
            selection: PaletteSelection::default(),
            control: ControlMode::default(),
            chaos: false,
            motion_blur: true,
            fullscreen: false,
            saved_selection: PaletteSelection::default(),
            chaos_cursor: PaletteSelection::default(),
            palette_fade: FadeOverlay::new(),
            keybind_fade: FadeOverlay::new(),
        }
    }

    /// Builder: initial motion blur flag
    pub fn with_motion_blur(mut self, enabled: bool) -> Self {
        self.motion_blur = enabled;
        self
    }

    /// Builder: initial fullscreen flag
    pub fn with_fullscreen(mut self, enabled: bool) -> Self {
        self.fullscreen = enabled;
        self
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn menu_cursor(&self) -> MenuItem {
        self.menu_cursor
    }

    pub fn selection(&self) -> PaletteSelection {
        self.selection
    }

    pub fn control(&self) -> ControlMode {
        self.control
    }

    pub fn chaos(&self) -> bool {
        self.chaos
    }

    pub fn motion_blur(&self) -> bool {
        self.motion_blur
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn palette_fade(&self) -> &FadeOverlay {
        &self.palette_fade
    }

    pub fn keybind_fade(&self) -> &FadeOverlay {
        &self.keybind_fade
    }

    /// Apply one action, returning the effects to carry out
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();

        // Fullscreen works everywhere and changes nothing else
        if action == Action::ToggleFullscreen {
            self.fullscreen = !self.fullscreen;
            effects.push(Effect::ToggleFullscreen);
            return effects;
        }

        match self.mode {
            UiMode::Menu => self.apply_menu(action, &mut effects),
            UiMode::Visualization => self.apply_visualization(action, &mut effects),
            UiMode::PaletteSelect => self.apply_palette_select(action, &mut effects),
            UiMode::KeybindOverlay => self.apply_keybind_overlay(action, &mut effects),
        }
        effects
    }

    fn apply_menu(&mut self, action: Action, effects: &mut Vec<Effect>) {
        match action {
            Action::SelectSet(set) if !self.chaos => {
                self.select(PaletteSelection::first_of_set(set));
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Up => {
                self.menu_cursor = self.menu_cursor.prev();
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Down => {
                self.menu_cursor = self.menu_cursor.next();
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Left if self.menu_cursor == MenuItem::PaletteSet => {
                self.select(self.selection.step_set(-1));
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Right if self.menu_cursor == MenuItem::PaletteSet => {
                self.select(self.selection.step_set(1));
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Confirm => {
                effects.push(Effect::Play(Tone::Startup));
                match self.menu_cursor {
                    MenuItem::ControlStyle => {
                        self.control = self.control.toggled();
                        log::info!("Control style: {}", self.control.label());
                    }
                    MenuItem::PaletteSet => {}
                    MenuItem::Start => {
                        self.mode = UiMode::Visualization;
                        effects.push(Effect::StartMusic);
                        log::info!("Entering visualization");
                    }
                    MenuItem::Quit => effects.push(Effect::Quit),
                }
            }
            _ => {}
        }
    }

    fn apply_visualization(&mut self, action: Action, effects: &mut Vec<Effect>) {
        match action {
            Action::Back => self.return_to_menu(effects),
            Action::CyclePalette if !self.chaos => {
                self.select(self.selection.next_slot());
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::ToggleMotionBlur => {
                self.motion_blur = !self.motion_blur;
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::ToggleKeybinds => {
                self.mode = UiMode::KeybindOverlay;
                self.keybind_fade.fade_in();
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::TogglePaletteMenu if !self.chaos => {
                self.mode = UiMode::PaletteSelect;
                self.palette_fade.fade_in();
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::ToggleChaos => {
                self.set_chaos(!self.chaos);
                self.motion_blur = true;
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::SelectSet(set) if !self.chaos => {
                self.select(PaletteSelection::first_of_set(set));
                effects.push(Effect::Play(Tone::Beep));
            }
            _ => {}
        }
    }

    fn apply_palette_select(&mut self, action: Action, effects: &mut Vec<Effect>) {
        if self.chaos {
            return;
        }
        match action {
            Action::Left => {
                self.select(self.selection.step_set(-1));
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Right => {
                self.select(self.selection.step_set(1));
                effects.push(Effect::Play(Tone::Beep));
            }
            // Digits pick a slot here whether or not the modifier is held
            Action::SelectSlot(slot) | Action::SelectSet(slot) => {
                self.select(PaletteSelection::new(self.selection.set, slot));
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::TogglePaletteMenu => {
                self.palette_fade.fade_out();
                self.mode = UiMode::Visualization;
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Back => {
                self.palette_fade.fade_out();
                self.return_to_menu(effects);
            }
            _ => {}
        }
    }

    fn apply_keybind_overlay(&mut self, action: Action, effects: &mut Vec<Effect>) {
        match action {
            Action::ToggleKeybinds => {
                self.keybind_fade.fade_out();
                self.mode = UiMode::Visualization;
                effects.push(Effect::Play(Tone::Beep));
            }
            Action::Back => {
                self.keybind_fade.fade_out();
                self.return_to_menu(effects);
            }
            _ => {}
        }
    }

    fn return_to_menu(&mut self, effects: &mut Vec<Effect>) {
        if self.chaos {
            self.set_chaos(false);
        }
        self.mode = UiMode::Menu;
        effects.push(Effect::Play(Tone::Escape));
        effects.push(Effect::StopMusic);
        log::info!("Returning to main menu");
    }

    fn set_chaos(&mut self, on: bool) {
        if on == self.chaos {
            return;
        }
        self.chaos = on;
        if on {
            self.saved_selection = self.selection;
            self.chaos_cursor = self.selection;
            log::info!("Chaos mode on");
        } else {
            self.selection = self.saved_selection;
            log::info!(
                "Chaos mode off, palette restored to set {} slot {}",
                self.selection.set + 1,
                self.selection.slot + 1
            );
        }
    }

    fn select(&mut self, selection: PaletteSelection) {
        self.selection = selection;
        log::info!("Palette set {} slot {}", selection.set + 1, selection.slot + 1);
    }

    /// Chaos palette cycling: move the cursor one slot and make it current
    pub fn advance_chaos_cursor(&mut self) {
        if !self.chaos {
            return;
        }
        self.chaos_cursor = self.chaos_cursor.advance();
        self.selection = self.chaos_cursor;
    }

    /// Advance overlay fades by one frame
    pub fn tick_fades(&mut self) {
        self.palette_fade.update();
        self.keybind_fade.update();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
