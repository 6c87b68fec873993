/// Periodic signal shapes the generator can produce.
///
/// `Silence` is the fallback for selector values we don't recognize: the
/// generator renders it as a zero-filled buffer of the requested length
/// instead of failing the whole melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Silence,
}

impl Waveform {
    /// Parse a waveform selector value, case-insensitively.
    /// Unrecognized names map to `Silence`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sine" => Waveform::Sine,
            "square" => Waveform::Square,
            "sawtooth" | "saw" => Waveform::Sawtooth,
            _ => Waveform::Silence,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::Silence => "Silence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selector_values() {
        assert_eq!(Waveform::from_name("Sine"), Waveform::Sine);
        assert_eq!(Waveform::from_name("Square"), Waveform::Square);
        assert_eq!(Waveform::from_name("Sawtooth"), Waveform::Sawtooth);
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(Waveform::from_name("  sine "), Waveform::Sine);
        assert_eq!(Waveform::from_name("SAW"), Waveform::Sawtooth);
    }

    #[test]
    fn unrecognized_names_fall_back_to_silence() {
        assert_eq!(Waveform::from_name("Triangle"), Waveform::Silence);
        assert_eq!(Waveform::from_name(""), Waveform::Silence);
    }
}
