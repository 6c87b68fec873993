use std::sync::Mutex;

use crate::gen::WaveformGenerator;
use crate::platform::AudioSink;
use crate::sequencer::{MelodySequencer, PlaybackRequest};

/// Ties the sequencer to an audio sink and serializes playback.
///
/// Playback is synchronous: `play` renders the melody, hands the buffer to
/// the sink, and blocks until the sink is done. A `play` arriving from
/// another thread while one is in flight is rejected, not queued.
pub struct Player<G: WaveformGenerator, S: AudioSink> {
    sequencer: MelodySequencer<G>,
    sink: Mutex<S>,
}

impl<G: WaveformGenerator, S: AudioSink> Player<G, S> {
    pub fn new(sequencer: MelodySequencer<G>, sink: S) -> Self {
        Self {
            sequencer,
            sink: Mutex::new(sink),
        }
    }

    pub fn sequencer(&self) -> &MelodySequencer<G> {
        &self.sequencer
    }

    /// Render the request and play it, blocking until playback finishes.
    ///
    /// Returns an error if another playback is already in progress or if
    /// the sink fails.
    pub fn play(&self, request: &PlaybackRequest) -> Result<(), anyhow::Error> {
        let mut sink = self
            .sink
            .try_lock()
            .map_err(|_| anyhow::anyhow!("playback already in progress"))?;

        let buffer = self.sequencer.render_request(request);
        let sample_rate = self.sequencer.config().sample_rate;
        log::info!(
            "playing {} samples ({:.2}s) at {} Hz",
            buffer.len(),
            buffer.duration_secs(sample_rate),
            sample_rate
        );

        sink.play(&buffer, sample_rate)
    }
}

#[cfg(feature = "native")]
impl Player<crate::gen::Oscillator, crate::platform::CpalSink> {
    /// Player wired to the default note table, the phase oscillator, and
    /// the system's default output device.
    pub fn with_defaults(config: crate::config::AudioConfig) -> Result<Self, anyhow::Error> {
        let sequencer = MelodySequencer::new(
            crate::notes::NoteTable::default(),
            crate::gen::Oscillator::new(config),
            config,
        );
        let sink = crate::platform::CpalSink::new()?;
        Ok(Self::new(sequencer, sink))
    }
}
