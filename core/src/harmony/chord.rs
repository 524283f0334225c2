//! Spells seventh chords from chord symbols like `"Am"`, `"Eb"` or `"F#°"`.

use serde::Serialize;

use super::pitch::{index_of, root_of, PitchClass, Spelling};

/// The seventh-chord shapes found on the circle's chord rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeventhChord {
  /// Major third, perfect fifth, major seventh.
  Major,
  /// Minor third, perfect fifth, minor seventh.
  Minor,
  /// Minor third, diminished fifth, minor seventh (m7b5).
  HalfDiminished,
}

impl SeventhChord {
  /// Classifies a chord symbol: anything containing `°` is half-diminished,
  /// otherwise anything containing `m` is minor, and the rest are major.
  pub fn of_symbol(symbol: &str) -> SeventhChord {
    if symbol.contains('°') {
      SeventhChord::HalfDiminished
    } else if symbol.contains('m') {
      SeventhChord::Minor
    } else {
      SeventhChord::Major
    }
  }

  /// Semitone offsets of root, third, fifth and seventh.
  pub fn intervals(&self) -> [u8; 4] {
    match self {
      SeventhChord::Major => [0, 4, 7, 11],
      SeventhChord::Minor => [0, 3, 7, 10],
      SeventhChord::HalfDiminished => [0, 3, 6, 10],
    }
  }
}

/// A chord symbol together with its spelled tones, in root, third, fifth,
/// seventh order.
///
/// Labels that aren't chords (mode and interval names) produce a `Chord`
/// with no tones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
  pub symbol: String,
  pub pitch_classes: Vec<PitchClass>,
  pub notes: Vec<&'static str>,
}

impl Chord {
  /// A plain text label with no tones.
  pub fn label(symbol: &str) -> Chord {
    Chord {
      symbol: symbol.to_string(),
      pitch_classes: vec![],
      notes: vec![],
    }
  }

  pub fn is_pitched(&self) -> bool {
    !self.pitch_classes.is_empty()
  }
}

/// Spells the seventh chord named by `symbol` using the accidentals of the
/// major key `key`.
///
/// The spelling depends only on the key, never on the chord's own root, so
/// `spell("C#m", "C")` and `spell("Dbm", "C")` give the same notes.
///
/// ```rust
/// use fifths_core::harmony::chord::spell;
///
/// assert_eq!(spell("Am", "C").notes, vec!["A", "C", "E", "G"]);
/// assert_eq!(spell("Fm", "Db").notes, vec!["F", "Ab", "C", "Eb"]);
/// assert!(spell("Lydian", "C").notes.is_empty());
/// ```
pub fn spell(symbol: &str, key: &str) -> Chord {
  let root = match index_of(root_of(symbol)) {
    Some(pc) => pc,
    None => return Chord::label(symbol),
  };

  let spelling = Spelling::for_key(key);
  let pitch_classes: Vec<PitchClass> = SeventhChord::of_symbol(symbol)
    .intervals()
    .iter()
    .map(|i| root.transpose(*i))
    .collect();
  let notes = pitch_classes.iter().map(|pc| pc.name(spelling)).collect();

  Chord {
    symbol: symbol.to_string(),
    pitch_classes,
    notes,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classifies_symbols() {
    assert_eq!(SeventhChord::of_symbol("C"), SeventhChord::Major);
    assert_eq!(SeventhChord::of_symbol("Bb"), SeventhChord::Major);
    assert_eq!(SeventhChord::of_symbol("Ebm"), SeventhChord::Minor);
    assert_eq!(SeventhChord::of_symbol("F#°"), SeventhChord::HalfDiminished);
  }

  #[test]
  fn spells_in_sharp_keys() {
    assert_eq!(spell("Em", "G").notes, vec!["E", "G", "B", "D"]);
    assert_eq!(spell("D", "G").notes, vec!["D", "F#", "A", "C#"]);
    assert_eq!(spell("F#°", "G").notes, vec!["F#", "A", "C", "E"]);
    assert_eq!(spell("B°", "C").notes, vec!["B", "D", "F", "A"]);
  }

  #[test]
  fn spells_in_flat_keys() {
    assert_eq!(spell("Bbm", "Db").notes, vec!["Bb", "Db", "F", "Ab"]);
    assert_eq!(spell("C°", "Db").notes, vec!["C", "Eb", "Gb", "Bb"]);
    assert_eq!(spell("Eb", "Bb").notes, vec!["Eb", "G", "Bb", "D"]);
  }

  #[test]
  fn spelling_ignores_the_chords_own_root() {
    // a flat-rooted chord in a sharp key still comes out with sharps
    assert_eq!(spell("Db", "C").notes, vec!["C#", "F", "G#", "C"]);
    assert_eq!(spell("Dbm", "C"), Chord { symbol: "Dbm".to_string(), ..spell("C#m", "C") });
  }

  #[test]
  fn pitch_classes_are_in_chord_tone_order() {
    let chord = spell("A", "A");
    let indices: Vec<u8> = chord.pitch_classes.iter().map(|pc| pc.index()).collect();
    assert_eq!(indices, vec![9, 1, 4, 8]);
  }

  #[test]
  fn non_chord_labels_have_no_tones() {
    let chord = spell("Tonic", "C");
    assert_eq!(chord.symbol, "Tonic");
    assert!(!chord.is_pitched());
    assert!(chord.notes.is_empty());
    assert!(!spell("", "C").is_pitched());
  }

  #[test]
  fn every_tonic_chord_has_four_distinct_tones() {
    for p in crate::circle::CIRCLE_POSITIONS {
      let mut pcs = spell(p.major, p.major).pitch_classes;
      assert_eq!(pcs.len(), 4, "{}", p.major);
      pcs.sort();
      pcs.dedup();
      assert_eq!(pcs.len(), 4, "{}", p.major);
    }
  }

  #[test]
  fn spelling_is_pure() {
    assert_eq!(spell("G#m", "E"), spell("G#m", "E"));
  }
}
