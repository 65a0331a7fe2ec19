//! Audio cues and background music
//!
//! Sounds are loaded once at startup from the asset directory. A missing or
//! malformed file is logged and that cue stays silent; audio never stops
//! the application. Playback goes through an [`AudioBackend`] so the rest
//! of the application only ever deals in [`Tone`]s and music on/off.
//!
//! With the `audio` feature, [`open_backend`] plays through the default
//! output device; without it, or without a device, cues are dropped.

#[cfg(feature = "audio")]
mod rodio_backend;

#[cfg(feature = "audio")]
pub use rodio_backend::RodioBackend;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use penteract_core::{AssetError, Tone};
use rand::seq::SliceRandom;
use rand::Rng;

pub const STARTUP_SOUND: &str = "startup_sound.wav";
pub const ESCAPE_SOUND: &str = "escape_sound.wav";
pub const BEEP_SOUNDS: [&str; 3] = ["beep1.wav", "beep2.wav", "beep3.wav"];
pub const MUSIC_TRACK: &str = "cell_to_singularity.wav";

/// A loaded WAV file
#[derive(Clone, Debug)]
pub struct Sound {
    name: String,
    data: Arc<[u8]>,
}

impl Sound {
    /// Wrap WAV bytes, checking the RIFF/WAVE header
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, AssetError> {
        let name = name.into();
        let is_wave = data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE";
        if !is_wave {
            return Err(AssetError::Parse(format!("{} is not a RIFF/WAVE file", name)));
        }
        Ok(Self {
            name,
            data: data.into(),
        })
    }

    /// Read `name` from `dir`
    pub fn load(dir: &Path, name: &str) -> Result<Self, AssetError> {
        let path = dir.join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }
        let data = fs::read(&path)?;
        Self::from_bytes(name, data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Something that can make noise
pub trait AudioBackend {
    /// Play a sound once, mixing with anything already playing
    fn play(&mut self, sound: &Sound);
    /// Start looping a music track, replacing any current one
    fn play_looped(&mut self, sound: &Sound);
    /// Stop the music track
    fn stop_looped(&mut self);
}

/// Backend for the default output device, or [`SilentBackend`] if none opens
#[cfg(feature = "audio")]
pub fn open_backend() -> Box<dyn AudioBackend> {
    or_silent(RodioBackend::open())
}

/// Built without sound output
#[cfg(not(feature = "audio"))]
pub fn open_backend() -> Box<dyn AudioBackend> {
    log::info!("Built without audio output; sound cues are silent");
    Box::new(SilentBackend)
}

#[cfg_attr(not(feature = "audio"), allow(dead_code))]
fn or_silent<B, E>(opened: Result<B, E>) -> Box<dyn AudioBackend>
where
    B: AudioBackend + 'static,
    E: std::fmt::Display,
{
    match opened {
        Ok(backend) => {
            log::info!("Audio output opened");
            Box::new(backend)
        }
        Err(e) => {
            log::warn!("No audio output device ({}); sound cues are silent", e);
            Box::new(SilentBackend)
        }
    }
}

/// Backend that only logs what would be played
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play(&mut self, sound: &Sound) {
        log::debug!("Sound: {} ({} bytes)", sound.name(), sound.data().len());
    }

    fn play_looped(&mut self, sound: &Sound) {
        log::debug!("Music loop: {}", sound.name());
    }

    fn stop_looped(&mut self) {
        log::debug!("Music stopped");
    }
}

/// Every sound the application uses
#[derive(Clone, Debug, Default)]
pub struct SoundBank {
    startup: Option<Sound>,
    escape: Option<Sound>,
    beeps: Vec<Sound>,
    music: Option<Sound>,
}

impl SoundBank {
    pub fn new(
        startup: Option<Sound>,
        escape: Option<Sound>,
        beeps: Vec<Sound>,
        music: Option<Sound>,
    ) -> Self {
        Self {
            startup,
            escape,
            beeps,
            music,
        }
    }

    /// Load every sound from `dir`, skipping the ones that fail
    pub fn load(dir: &Path) -> Self {
        let beeps = BEEP_SOUNDS
            .iter()
            .filter_map(|name| load_optional(dir, name))
            .collect();
        let bank = Self {
            startup: load_optional(dir, STARTUP_SOUND),
            escape: load_optional(dir, ESCAPE_SOUND),
            beeps,
            music: load_optional(dir, MUSIC_TRACK),
        };
        log::info!(
            "Loaded {} of {} sounds from {}",
            bank.loaded_count(),
            BEEP_SOUNDS.len() + 3,
            dir.display()
        );
        bank
    }

    /// The sound for a tone; beeps are picked at random
    pub fn tone<R: Rng + ?Sized>(&self, tone: Tone, rng: &mut R) -> Option<&Sound> {
        match tone {
            Tone::Beep => self.beeps.choose(rng),
            Tone::Startup => self.startup.as_ref(),
            Tone::Escape => self.escape.as_ref(),
        }
    }

    pub fn music(&self) -> Option<&Sound> {
        self.music.as_ref()
    }

    pub fn loaded_count(&self) -> usize {
        self.beeps.len()
            + self.startup.is_some() as usize
            + self.escape.is_some() as usize
            + self.music.is_some() as usize
    }
}

fn load_optional(dir: &Path, name: &str) -> Option<Sound> {
    match Sound::load(dir, name) {
        Ok(sound) => Some(sound),
        Err(e) => {
            log::warn!("Could not load sound {}: {}", name, e);
            None
        }
    }
}

/// Plays cues and tracks whether music is running
pub struct AudioSystem {
    bank: SoundBank,
    backend: Box<dyn AudioBackend>,
    enabled: bool,
    music_playing: bool,
}

impl AudioSystem {
    pub fn new(bank: SoundBank, backend: Box<dyn AudioBackend>, enabled: bool) -> Self {
        Self {
            bank,
            backend,
            enabled,
            music_playing: false,
        }
    }

    /// No sounds and no output
    pub fn disabled() -> Self {
        Self::new(SoundBank::default(), Box::new(SilentBackend), false)
    }

    /// Play a cue; missing sounds are silently skipped
    pub fn play<R: Rng + ?Sized>(&mut self, tone: Tone, rng: &mut R) {
        if !self.enabled {
            return;
        }
        log::debug!("Audio cue: {:?}", tone);
        if let Some(sound) = self.bank.tone(tone, rng) {
            self.backend.play(sound);
        }
    }

    /// Start the background loop (restarting it if already playing)
    pub fn start_music(&mut self) {
        if !self.enabled {
            return;
        }
        match self.bank.music() {
            Some(track) => {
                self.backend.play_looped(track);
                self.music_playing = true;
            }
            None => log::debug!("No music track loaded"),
        }
    }

    pub fn stop_music(&mut self) {
        if self.music_playing {
            self.backend.stop_looped();
        }
        self.music_playing = false;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }
}
