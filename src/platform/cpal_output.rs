#[cfg(feature = "native")]
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, Sample, SizedSample, Stream, StreamConfig,
};

use super::AudioSink;
use crate::buffer::SampleBuffer;

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

#[cfg(feature = "native")]
pub struct CpalSink {
    device: Device,
}

#[cfg(feature = "native")]
impl CpalSink {
    /// Open the system's default output device.
    pub fn new() -> Result<Self, anyhow::Error> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("Default output device is not available"))?;

        log::info!("Output device: {}", device.name()?);

        Ok(Self { device })
    }

    /// Create a typed stream for the given sample format.
    ///
    /// The callback walks `samples` from `position`, duplicating each mono
    /// sample across all output channels, and signals `done_tx` once the
    /// buffer is exhausted.
    fn make_stream<T>(
        device: &Device,
        config: &StreamConfig,
        samples: Arc<Vec<f32>>,
        position: Arc<Mutex<usize>>,
        done_tx: mpsc::Sender<()>,
    ) -> Result<Stream, anyhow::Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let num_channels = config.channels as usize;
        let err_fn = |err| log::error!("Error in output sound stream: {err}");

        let stream = device.build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                let mut position = position.lock().unwrap();

                for frame in output.chunks_mut(num_channels) {
                    let value = if *position < samples.len() {
                        let sample = samples[*position];
                        *position += 1;
                        sample
                    } else {
                        Sample::EQUILIBRIUM
                    };
                    let value: T = T::from_sample(value);

                    // Copy the same value to all channels
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }

                if *position >= samples.len() {
                    let _ = done_tx.send(());
                }
            },
            err_fn,
            None,
        )?;

        Ok(stream)
    }
}

#[cfg(feature = "native")]
impl AudioSink for CpalSink {
    fn play(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), anyhow::Error> {
        if buffer.is_empty() {
            return Ok(());
        }

        let supported_config = self.device.default_output_config()?;
        let config = StreamConfig {
            channels: supported_config.channels(),
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        // Trailing zeros let the device drain the real audio before the
        // stream is dropped.
        let drain_samples = (sample_rate / 10) as usize;
        let mut samples = buffer.samples().to_vec();
        samples.extend(std::iter::repeat(0.0).take(drain_samples));

        let samples = Arc::new(samples);
        let position = Arc::new(Mutex::new(0usize));
        let (done_tx, done_rx) = mpsc::channel();

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::I8 => Self::make_stream::<i8>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::I16 => Self::make_stream::<i16>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::I32 => Self::make_stream::<i32>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::I64 => Self::make_stream::<i64>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::U8 => Self::make_stream::<u8>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::U16 => Self::make_stream::<u16>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::U32 => Self::make_stream::<u32>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::U64 => Self::make_stream::<u64>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::F32 => Self::make_stream::<f32>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            cpal::SampleFormat::F64 => Self::make_stream::<f64>(
                &self.device,
                &config,
                samples.clone(),
                position.clone(),
                done_tx.clone(),
            )?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format '{}'",
                    sample_format
                ))
            }
        };

        stream.play()?;

        // Block until the callback has walked the whole buffer, then let
        // the stream drop and close.
        done_rx.recv()?;

        Ok(())
    }
}
