use std::collections::HashMap;

/// Default pitch table: two octaves of natural notes, C4 through B5,
/// tuned to A4 = 440 Hz.
const DEFAULT_NOTES: [(&str, f32); 14] = [
    ("C4", 261.63),
    ("D4", 293.66),
    ("E4", 329.63),
    ("F4", 349.23),
    ("G4", 392.00),
    ("A4", 440.00),
    ("B4", 493.88),
    ("C5", 523.25),
    ("D5", 587.33),
    ("E5", 659.25),
    ("F5", 698.46),
    ("G5", 783.99),
    ("A5", 880.00),
    ("B5", 987.77),
];

/// Immutable mapping from note name ("C4") to frequency in Hz.
///
/// Built once and handed to the sequencer; there is no ambient global table.
pub struct NoteTable {
    frequencies: HashMap<String, f32>,
}

impl NoteTable {
    /// Build a table from explicit (name, frequency) pairs.
    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, f32)>,
        N: Into<String>,
    {
        Self {
            frequencies: pairs
                .into_iter()
                .map(|(name, freq)| (name.into(), freq))
                .collect(),
        }
    }

    /// Look up a note's frequency. Unknown names and non-positive
    /// frequencies both come back as `None`.
    pub fn frequency(&self, name: &str) -> Option<f32> {
        self.frequencies
            .get(name)
            .copied()
            .filter(|&freq| freq > 0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frequency(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_NOTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_two_octaves() {
        let table = NoteTable::default();
        assert_eq!(table.len(), 14);
        assert!(table.contains("C4"));
        assert!(table.contains("B5"));
    }

    #[test]
    fn known_frequencies() {
        let table = NoteTable::default();
        assert_eq!(table.frequency("C4"), Some(261.63));
        assert_eq!(table.frequency("A4"), Some(440.0));
        assert_eq!(table.frequency("B5"), Some(987.77));
    }

    #[test]
    fn unknown_name_is_none() {
        let table = NoteTable::default();
        assert_eq!(table.frequency("H4"), None);
        assert_eq!(table.frequency("c4"), None); // names are case-sensitive
        assert_eq!(table.frequency(""), None);
    }

    #[test]
    fn non_positive_frequency_is_treated_as_absent() {
        let table = NoteTable::from_pairs([("X1", 0.0), ("X2", -5.0), ("X3", 100.0)]);
        assert_eq!(table.frequency("X1"), None);
        assert_eq!(table.frequency("X2"), None);
        assert_eq!(table.frequency("X3"), Some(100.0));
    }
}
