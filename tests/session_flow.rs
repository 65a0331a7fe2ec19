//! End-to-end session scenarios driven through the visualizer

use std::time::{Duration, Instant};

use penteract::audio::{AudioSystem, Sound, SoundBank, SilentBackend, MUSIC_TRACK};
use penteract::config::AppConfig;
use penteract::Visualizer;
use penteract_core::{Action, MenuItem, PaletteSelection, UiMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn wav(name: &str) -> Sound {
    Sound::from_bytes(name, b"RIFF\0\0\0\0WAVEfmt ".to_vec()).unwrap()
}

fn session() -> Visualizer {
    let bank = SoundBank::new(None, None, Vec::new(), Some(wav(MUSIC_TRACK)));
    Visualizer::new(
        &AppConfig::default(),
        AudioSystem::new(bank, Box::new(SilentBackend), true),
        StdRng::seed_from_u64(42),
        Instant::now(),
    )
}

fn start(v: &mut Visualizer) {
    while v.state().menu_cursor() != MenuItem::Start {
        v.handle_action(Action::Down);
    }
    v.handle_action(Action::Confirm);
}

#[test]
fn test_start_ticks_escape() {
    let mut v = session();
    let t0 = Instant::now();

    start(&mut v);
    assert_eq!(v.state().mode(), UiMode::Visualization);
    assert!(v.is_music_playing());

    let before = *v.rotation().angles();
    for i in 0..10 {
        v.update([0; 3], t0 + Duration::from_millis(16 * i));
        v.draw();
    }
    assert_ne!(*v.rotation().angles(), before);

    v.handle_action(Action::Back);
    assert_eq!(v.state().mode(), UiMode::Menu);
    assert!(!v.is_music_playing());
}

#[test]
fn test_chaos_session_restores_palette_on_escape() {
    let mut v = session();
    let t0 = Instant::now();
    start(&mut v);

    v.handle_action(Action::SelectSet(3));
    let chosen = v.state().selection();
    assert_eq!(chosen, PaletteSelection::new(3, 0));

    v.handle_action(Action::ToggleChaos);
    for i in 1..=5 {
        v.update([0; 3], t0 + Duration::from_millis(30 * i));
        v.draw();
    }
    assert_ne!(v.state().selection(), chosen);

    v.handle_action(Action::Back);
    assert!(!v.state().chaos());
    assert_eq!(v.state().selection(), chosen);
}

#[test]
fn test_palette_menu_round_trip() {
    let mut v = session();
    start(&mut v);

    v.handle_action(Action::TogglePaletteMenu);
    assert_eq!(v.state().mode(), UiMode::PaletteSelect);
    v.handle_action(Action::Right);
    v.handle_action(Action::SelectSlot(4));
    for _ in 0..15 {
        v.update([0; 3], Instant::now());
        v.draw();
    }
    v.handle_action(Action::TogglePaletteMenu);

    assert_eq!(v.state().mode(), UiMode::Visualization);
    assert_eq!(v.state().selection(), PaletteSelection::new(1, 4));
    assert!(v.state().palette_fade().is_visible());
}
