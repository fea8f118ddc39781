use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::{debug, warn};

use super::Notifier;
use crate::config::SoundConfig;
use crate::timer::Phase;

/// Plays the notification sound on a detached thread at each phase boundary.
pub struct Chime {
    sound: SoundConfig,
}

impl Chime {
    pub fn new(sound: SoundConfig) -> Self {
        Self { sound }
    }
}

impl Notifier for Chime {
    fn phase_ended(&self, next: Phase) {
        debug!(next = next.label(), "playing phase chime");
        let sound = self.sound.clone();

        // Fire and forget. The handle is dropped so the tick never joins it.
        let spawned = std::thread::Builder::new()
            .name("chime".into())
            .spawn(move || {
                if let Err(e) = play_blocking(&sound) {
                    warn!("notification sound failed: {e:#}");
                }
            });

        if let Err(e) = spawned {
            warn!("could not start chime thread: {e}");
        }
    }
}

/// Play the notification sound and wait for it to finish.
///
/// Uses the configured WAV file if there is one, otherwise a short sine tone.
pub fn play_blocking(sound: &SoundConfig) -> Result<()> {
    // `_stream` must outlive playback: dropping it closes the device.
    let (_stream, stream_handle) =
        OutputStream::try_default().context("Failed to open audio output device")?;
    let sink = Sink::try_new(&stream_handle).context("Failed to create audio sink")?;
    sink.set_volume(sound.volume.clamp(0.0, 1.0));

    match &sound.file {
        Some(path) => sink.append(decode_file(path)?),
        None => sink.append(tone(sound.frequency_hz, sound.duration_ms)),
    }

    sink.sleep_until_end();
    Ok(())
}

fn decode_file(path: &Path) -> Result<Decoder<BufReader<File>>> {
    if !path.exists() {
        anyhow::bail!("Sound file not found: {}", path.display());
    }
    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    Decoder::new(BufReader::new(file))
        .with_context(|| format!("Failed to decode: {}", path.display()))
}

/// A sine tone of the given pitch and length.
fn tone(frequency_hz: f32, duration_ms: u64) -> impl Source<Item = f32> + Send {
    SineWave::new(frequency_hz.max(1.0)).take_duration(Duration::from_millis(duration_ms))
}
