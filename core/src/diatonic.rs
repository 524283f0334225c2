//! The seven diatonic chords of each major key.
//!
//! These are curated data rather than something derived from key signature
//! rules, so the core only consumes them through [DiatonicChordSource] and
//! passes them along unchanged. [CuratedDiatonicChords] is the built-in table.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::circle::Ring;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiatonicChord {
  pub numeral: String,
  pub symbol: String,
  pub quality: Ring,
}

impl DiatonicChord {
  pub fn new(numeral: &str, symbol: &str, quality: Ring) -> DiatonicChord {
    DiatonicChord {
      numeral: numeral.to_string(),
      symbol: symbol.to_string(),
      quality,
    }
  }
}

/// Supplies the ordered diatonic chords for a key name like `"Eb"`.
pub trait DiatonicChordSource {
  fn diatonic_chords(&self, key: &str) -> Option<&[DiatonicChord]>;
}

/// Degrees I, ii, iii, IV, V, vi, vii° for each of the twelve keys on the circle.
const CURATED: [(&str, [&str; 7]); 12] = [
  ("C", ["C", "Dm", "Em", "F", "G", "Am", "B°"]),
  ("G", ["G", "Am", "Bm", "C", "D", "Em", "F#°"]),
  ("D", ["D", "Em", "F#m", "G", "A", "Bm", "C#°"]),
  ("A", ["A", "Bm", "C#m", "D", "E", "F#m", "G#°"]),
  ("E", ["E", "F#m", "G#m", "A", "B", "C#m", "D#°"]),
  ("B", ["B", "C#m", "D#m", "E", "F#", "G#m", "A#°"]),
  ("F#", ["F#", "G#m", "A#m", "B", "C#", "D#m", "E#°"]),
  ("Db", ["Db", "Ebm", "Fm", "Gb", "Ab", "Bbm", "C°"]),
  ("Ab", ["Ab", "Bbm", "Cm", "Db", "Eb", "Fm", "G°"]),
  ("Eb", ["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "D°"]),
  ("Bb", ["Bb", "Cm", "Dm", "Eb", "F", "Gm", "A°"]),
  ("F", ["F", "Gm", "Am", "Bb", "C", "Dm", "E°"]),
];

const DEGREES: [(&str, Ring); 7] = [
  ("I", Ring::Major),
  ("ii", Ring::Minor),
  ("iii", Ring::Minor),
  ("IV", Ring::Major),
  ("V", Ring::Major),
  ("vi", Ring::Minor),
  ("vii°", Ring::Diminished),
];

lazy_static! {
  static ref CURATED_TABLE: HashMap<&'static str, Vec<DiatonicChord>> = CURATED
    .iter()
    .map(|(key, symbols)| {
      let chords = DEGREES
        .iter()
        .zip(symbols.iter())
        .map(|((numeral, quality), symbol)| DiatonicChord::new(numeral, symbol, *quality))
        .collect();
      (*key, chords)
    })
    .collect();
}

/// The built-in diatonic chord table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedDiatonicChords;

impl DiatonicChordSource for CuratedDiatonicChords {
  fn diatonic_chords(&self, key: &str) -> Option<&[DiatonicChord]> {
    CURATED_TABLE.get(key).map(Vec::as_slice)
  }
}
