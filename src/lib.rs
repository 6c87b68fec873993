//! Melody-string synthesis: a note table, a waveform generator, a
//! sequencer that concatenates per-note buffers, and blocking playback
//! through a pluggable audio sink.

pub mod buffer;
pub mod config;
pub mod gen;
pub mod notes;
pub mod player;
pub mod sequencer;

// Platform abstraction layer
pub mod platform;

pub mod utils;

// Offline WAV export
#[cfg(feature = "bounce")]
pub mod bounce;
