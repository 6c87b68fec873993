//! Offline bounce of rendered melodies to WAV files.

use std::path::Path;

use crate::buffer::SampleBuffer;

/// Write the buffer as a 16-bit mono WAV file.
pub fn write_wav(
    path: impl AsRef<Path>,
    buffer: &SampleBuffer,
    sample_rate: u32,
) -> Result<(), anyhow::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;

    Ok(())
}
