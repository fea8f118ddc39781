pub mod playback;

use tracing::debug;

use crate::config::SoundConfig;
use crate::timer::Phase;

/// Side effect fired when a phase runs out.
///
/// Implementations must return promptly and must never fail: the tick that
/// triggers them cannot wait on, or be interrupted by, the notification.
pub trait Notifier {
    fn phase_ended(&self, next: Phase);
}

/// Notifier used when sound is muted or disabled.
pub struct Silent;

impl Notifier for Silent {
    fn phase_ended(&self, next: Phase) {
        debug!(next = next.label(), "phase ended (muted)");
    }
}

/// Pick the notifier for the configured sound settings.
pub fn notifier_for(sound: &SoundConfig, mute: bool) -> Box<dyn Notifier> {
    if mute || !sound.enabled {
        Box::new(Silent)
    } else {
        Box::new(playback::Chime::new(sound.clone()))
    }
}
