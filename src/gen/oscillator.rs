use crate::buffer::SampleBuffer;
use crate::config::AudioConfig;
use crate::gen::waveform::Waveform;
use crate::gen::WaveformGenerator;

use std::f32::consts::TAU;

/// Phase-based waveform evaluator.
///
/// Samples are taken at evenly spaced points t = n / sample_rate for
/// n in [0, count), so the first sample always sits at t = 0 and the
/// endpoint is excluded.
pub struct Oscillator {
    config: AudioConfig,
}

impl Oscillator {
    pub fn new(config: AudioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> AudioConfig {
        self.config
    }

    fn sample_at(shape: Waveform, frequency_hz: f32, t: f32) -> f32 {
        // Position within the current cycle, in [0, 1)
        let phase = (frequency_hz * t).fract();
        match shape {
            Waveform::Sine => (TAU * frequency_hz * t).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
            Waveform::Silence => 0.0,
        }
    }
}

impl WaveformGenerator for Oscillator {
    fn generate(&self, shape: Waveform, frequency_hz: f32, duration_secs: f32) -> SampleBuffer {
        let sample_count = self.config.samples_for(duration_secs);
        let sample_rate = self.config.sample_rate as f32;

        let mut buffer = SampleBuffer::with_capacity(sample_count);
        for n in 0..sample_count {
            let t = n as f32 / sample_rate;
            buffer.push(Self::sample_at(shape, frequency_hz, t));
        }
        buffer
    }
}
