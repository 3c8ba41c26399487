//! Fire-and-forget audio cues.
//!
//! The update step emits [`Cue`]s through an injected [`AudioSink`] and
//! never waits on playback, so the core loop carries no dependency on a
//! specific output mechanism and tests can assert which cues were emitted.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};

/// The three one-shot sounds the game produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Player fired a projectile.
    Shot,
    /// A projectile destroyed an enemy. Overlapping hits may overlap in sound.
    Hit,
    /// Entered game-over; emitted once per transition.
    GameOver,
}

pub trait AudioSink {
    /// Start playing `cue`. Must return immediately; failures are the
    /// sink's problem and never interrupt the game loop.
    fn play(&mut self, cue: Cue);
}

/// Sink that drops every cue. Used when no output device is available.
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: Cue) {}
}

/// Default sink: short synthesized blips through the system output device.
/// No sound assets are shipped; each cue is a sine burst.
pub struct Speaker {
    // The stream must outlive every queued source.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Speaker {
    /// `None` when no output device can be opened; callers fall back to
    /// [`NullSink`] and the game plays silently.
    pub fn try_new() -> Option<Speaker> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Speaker {
            _stream: stream,
            handle,
        })
    }
}

impl AudioSink for Speaker {
    fn play(&mut self, cue: Cue) {
        let (freq, millis, gain) = match cue {
            Cue::Shot => (880.0, 60, 0.15),
            Cue::Hit => (220.0, 120, 0.20),
            Cue::GameOver => (110.0, 600, 0.25),
        };
        let source = SineWave::new(freq)
            .take_duration(Duration::from_millis(millis))
            .amplify(gain);
        // Best effort: rejected playback is silently ignored.
        let _ = self.handle.play_raw(source);
    }
}
