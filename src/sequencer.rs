use crate::buffer::SampleBuffer;
use crate::config::AudioConfig;
use crate::gen::{Waveform, WaveformGenerator};
use crate::notes::NoteTable;

/// One playback interaction's worth of parameters, as collected by the
/// form: melody text, waveform selector, duration slider, tempo slider.
///
/// `tempo_bpm` is carried along but reserved: it is not yet part of the
/// timing math (see `MelodySequencer::render`).
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackRequest {
    pub melody: String,
    pub shape: Waveform,
    pub note_duration_secs: f32,
    pub tempo_bpm: f32,
}

impl PlaybackRequest {
    pub const MIN_NOTE_DURATION_SECS: f32 = 0.1;
    pub const MAX_NOTE_DURATION_SECS: f32 = 1.0;
    pub const MIN_TEMPO_BPM: f32 = 60.0;
    pub const MAX_TEMPO_BPM: f32 = 200.0;

    /// Build a request, clamping duration and tempo to the ranges the
    /// sliders advertise.
    pub fn new(
        melody: impl Into<String>,
        shape: Waveform,
        note_duration_secs: f32,
        tempo_bpm: f32,
    ) -> Self {
        Self {
            melody: melody.into(),
            shape,
            note_duration_secs: note_duration_secs
                .clamp(Self::MIN_NOTE_DURATION_SECS, Self::MAX_NOTE_DURATION_SECS),
            tempo_bpm: tempo_bpm.clamp(Self::MIN_TEMPO_BPM, Self::MAX_TEMPO_BPM),
        }
    }
}

impl Default for PlaybackRequest {
    fn default() -> Self {
        Self {
            melody: "C4 D4 E4".to_string(),
            shape: Waveform::Sine,
            note_duration_secs: 0.5,
            tempo_bpm: 120.0,
        }
    }
}

/// Renders a melody string into one concatenated sample buffer.
///
/// Each known note becomes a generated waveform followed by the config's
/// fixed inter-note gap. Unknown notes contribute nothing at all.
pub struct MelodySequencer<G: WaveformGenerator> {
    table: NoteTable,
    generator: G,
    config: AudioConfig,
}

impl<G: WaveformGenerator> MelodySequencer<G> {
    pub fn new(table: NoteTable, generator: G, config: AudioConfig) -> Self {
        Self {
            table,
            generator,
            config,
        }
    }

    pub fn config(&self) -> AudioConfig {
        self.config
    }

    pub fn table(&self) -> &NoteTable {
        &self.table
    }

    /// Render a space-separated melody string.
    ///
    /// Tokens that aren't in the note table are logged as warnings and
    /// skipped entirely: they add zero samples, not note-length silence.
    /// An empty or all-unknown melody renders an empty buffer; this never
    /// fails.
    ///
    /// `tempo_bpm` is accepted so callers can hand over the full control
    /// state, but it does not affect the output yet: the gap between notes
    /// is the fixed `AudioConfig::note_gap_secs` regardless of tempo.
    pub fn render(
        &self,
        melody: &str,
        shape: Waveform,
        note_duration_secs: f32,
        tempo_bpm: f32,
    ) -> SampleBuffer {
        let _ = tempo_bpm; // reserved, see doc comment

        let gap = SampleBuffer::silence(self.config.gap_samples());
        let mut out = SampleBuffer::new();

        for token in melody.split_whitespace() {
            match self.table.frequency(token) {
                Some(frequency_hz) => {
                    let note = self
                        .generator
                        .generate(shape, frequency_hz, note_duration_secs);
                    out.append(&note);
                    out.append(&gap);
                }
                None => {
                    log::warn!("skipping unknown note '{token}'");
                }
            }
        }

        out
    }

    /// Render from a full request.
    pub fn render_request(&self, request: &PlaybackRequest) -> SampleBuffer {
        self.render(
            &request.melody,
            request.shape,
            request.note_duration_secs,
            request.tempo_bpm,
        )
    }
}
