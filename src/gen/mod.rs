pub mod oscillator;
pub mod waveform;

pub use self::oscillator::*;
pub use self::waveform::*;

use crate::buffer::SampleBuffer;

/// Trait for waveform generation backends.
///
/// Maps (shape, frequency, duration) to a fixed-length buffer of
/// `floor(sample_rate * duration)` samples. Implementations must be pure:
/// the same inputs always produce the same buffer.
pub trait WaveformGenerator {
    fn generate(&self, shape: Waveform, frequency_hz: f32, duration_secs: f32) -> SampleBuffer;
}
