// Integration tests for the Player's blocking, serialized playback

use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use notesynth::buffer::SampleBuffer;
use notesynth::config::AudioConfig;
use notesynth::gen::Oscillator;
use notesynth::notes::NoteTable;
use notesynth::platform::AudioSink;
use notesynth::player::Player;
use notesynth::sequencer::{MelodySequencer, PlaybackRequest};

fn player_with<S: AudioSink>(sink: S) -> Player<Oscillator, S> {
    let config = AudioConfig::default();
    let sequencer = MelodySequencer::new(NoteTable::default(), Oscillator::new(config), config);
    Player::new(sequencer, sink)
}

/// Sink that records every (sample count, sample rate) it is asked to play.
struct RecordingSink {
    calls: Arc<Mutex<Vec<(usize, u32)>>>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), anyhow::Error> {
        self.calls.lock().unwrap().push((buffer.len(), sample_rate));
        Ok(())
    }
}

/// Sink that blocks inside `play` until the test releases it, so the test
/// can observe the player mid-playback without sleeping.
struct GatedSink {
    started_tx: mpsc::Sender<()>,
    release_rx: mpsc::Receiver<()>,
}

impl AudioSink for GatedSink {
    fn play(&mut self, _buffer: &SampleBuffer, _sample_rate: u32) -> Result<(), anyhow::Error> {
        self.started_tx.send(()).unwrap();
        self.release_rx.recv().unwrap();
        Ok(())
    }
}

#[test]
fn play_renders_through_the_sink() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let player = player_with(RecordingSink {
        calls: calls.clone(),
    });

    player.play(&PlaybackRequest::default()).unwrap();

    let config = AudioConfig::default();
    let expected_samples = 3 * (config.samples_for(0.5) + config.gap_samples());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (expected_samples, 44_100));
}

#[test]
fn empty_melody_plays_an_empty_buffer() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let player = player_with(RecordingSink {
        calls: calls.clone(),
    });

    let request = PlaybackRequest {
        melody: String::new(),
        ..PlaybackRequest::default()
    };
    player.play(&request).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (0, 44_100));
}

#[test]
fn concurrent_play_is_rejected_not_queued() {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();

    let player = Arc::new(player_with(GatedSink {
        started_tx,
        release_rx,
    }));

    let background = {
        let player = player.clone();
        thread::spawn(move || player.play(&PlaybackRequest::default()))
    };

    // Wait until the first play is inside the sink
    started_rx.recv().unwrap();

    let second = player.play(&PlaybackRequest::default());
    let err = second.expect_err("overlapping play should be rejected");
    assert!(err.to_string().contains("already in progress"));

    release_tx.send(()).unwrap();
    background.join().unwrap().unwrap();

    // Once the first playback has finished the sink is free again.
    // Pre-load the release so the replay returns instead of blocking.
    release_tx.send(()).unwrap();
    player.play(&PlaybackRequest::default()).unwrap();
    started_rx.recv().unwrap();
}
