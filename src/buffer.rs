/// A mono block of audio samples at a fixed sample rate.
///
/// Values are nominally in [-1.0, 1.0]. The buffer has no identity beyond
/// its contents; it is produced, played or written out, and discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(sample_count: usize) -> Self {
        Self {
            samples: Vec::with_capacity(sample_count),
        }
    }

    /// A zero-filled buffer of the given length.
    pub fn silence(sample_count: usize) -> Self {
        Self {
            samples: vec![0.0; sample_count],
        }
    }

    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn push(&mut self, sample: f32) {
        self.samples.push(sample);
    }

    /// Append another buffer's samples to the end of this one.
    pub fn append(&mut self, other: &SampleBuffer) {
        self.samples.extend_from_slice(&other.samples);
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Playback length in seconds at the given sample rate.
    pub fn duration_secs(&self, sample_rate: u32) -> f32 {
        self.samples.len() as f32 / sample_rate as f32
    }
}
