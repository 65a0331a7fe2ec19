//! Sound output through the default audio device

use std::io::Cursor;
use std::sync::Arc;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, StreamError};

use super::{AudioBackend, Sound};

/// Plays cues on the default output device
///
/// Cues are fire-and-forget; the music track owns a [`Sink`] so it can be
/// stopped.
pub struct RodioBackend {
    // Dropping the stream closes the device
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

impl RodioBackend {
    /// Open the default output device
    pub fn open() -> Result<Self, StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            music: None,
        })
    }
}

/// Decode a sound's WAV bytes into a playable source
pub fn decode(sound: &Sound) -> Result<Decoder<Cursor<Arc<[u8]>>>, DecoderError> {
    Decoder::new(Cursor::new(sound.data.clone()))
}

impl AudioBackend for RodioBackend {
    fn play(&mut self, sound: &Sound) {
        let source = match decode(sound) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("Could not decode {}: {}", sound.name(), e);
                return;
            }
        };
        if let Err(e) = self.handle.play_raw(source.convert_samples()) {
            log::warn!("Could not play {}: {}", sound.name(), e);
        }
    }

    fn play_looped(&mut self, sound: &Sound) {
        self.stop_looped();

        let source = match decode(sound) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("Could not decode {}: {}", sound.name(), e);
                return;
            }
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(source.repeat_infinite());
                self.music = Some(sink);
            }
            Err(e) => log::warn!("Could not start music {}: {}", sound.name(), e),
        }
    }

    fn stop_looped(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 16-bit mono PCM at 8 kHz
    fn pcm_wav(samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&8000u32.to_le_bytes());
        bytes.extend_from_slice(&16000u32.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decodes_pcm_wav() {
        let samples = [0i16, 1000, -1000, 32767, -32768, 5];
        let sound = Sound::from_bytes("tone.wav", pcm_wav(&samples)).unwrap();
        let source = decode(&sound).unwrap();
        assert_eq!(source.channels(), 1);
        assert_eq!(source.sample_rate(), 8000);
        assert_eq!(source.count(), samples.len());
    }

    #[test]
    fn test_truncated_wav_fails_to_decode() {
        let mut bytes = b"RIFF\0\0\0\0WAVE".to_vec();
        bytes.extend_from_slice(b"fmt ");
        let sound = Sound::from_bytes("short.wav", bytes).unwrap();
        assert!(decode(&sound).is_err());
    }
}
