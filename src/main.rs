/* Interactive melody console.
Type a melody as space-separated note names (C4 D4 E4) and it plays,
blocking, through the default output device. */

#[cfg(feature = "native")]
fn main() -> anyhow::Result<()> {
    use std::io::{self, Write};

    use notesynth::config::AudioConfig;
    use notesynth::gen::Waveform;
    use notesynth::player::Player;
    use notesynth::sequencer::PlaybackRequest;
    use notesynth::utils::init_logger;

    init_logger();

    let config = AudioConfig::default();
    let player = Player::with_defaults(config)?;

    let mut shape = Waveform::Sine;
    let mut note_duration_secs = 0.5;
    let mut tempo_bpm = 120.0;

    println!("Commands:");
    println!("  wave <sine|square|sawtooth>   select waveform");
    println!("  dur <0.1-1.0>                 note duration in seconds");
    println!("  tempo <60-200>                tempo in BPM");
    println!("  q                             quit");
    println!("Anything else is played as a melody, e.g. C4 D4 E4");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ') {
            Some(("wave", arg)) => {
                shape = Waveform::from_name(arg);
                println!("Waveform: {}", shape.name());
            }
            Some(("dur", arg)) => match arg.trim().parse::<f32>() {
                Ok(secs) => {
                    note_duration_secs = secs;
                    println!("Note duration: {note_duration_secs}s");
                }
                Err(_) => println!("Not a duration: {arg}"),
            },
            Some(("tempo", arg)) => match arg.trim().parse::<f32>() {
                Ok(bpm) => {
                    tempo_bpm = bpm;
                    println!("Tempo: {tempo_bpm} BPM");
                }
                Err(_) => println!("Not a tempo: {arg}"),
            },
            _ if line == "q" => {
                println!("Quitting...");
                break;
            }
            _ => {
                let request = PlaybackRequest::new(line, shape, note_duration_secs, tempo_bpm);
                if let Err(err) = player.play(&request) {
                    log::error!("playback failed: {err}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    println!("This binary is only available with the 'native' feature enabled.");
}
