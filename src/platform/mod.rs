/// Platform abstraction for audio playback.
/// This module provides a single capability interface any output backend
/// (audio library or OS audio API) can satisfy.
use crate::buffer::SampleBuffer;

/// Trait for platform-specific audio playback backends.
pub trait AudioSink {
    /// Play the finished buffer at the given sample rate, blocking until
    /// every sample has been output.
    fn play(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), anyhow::Error>;
}

// Platform-specific implementations
#[cfg(feature = "native")]
pub mod cpal_output;

// Re-export platform-specific types
#[cfg(feature = "native")]
pub use self::cpal_output::CpalSink;
