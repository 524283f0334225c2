//! Static labels that are tied to absolute slot positions: Roman numerals,
//! mode names and interval names. None of these rotate with the key.

use super::ring::{Ring, SlotPosition};

/// Roman-numeral degrees for the three chord rings at one absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numerals {
  pub major: &'static str,
  pub minor: &'static str,
  pub diminished: &'static str,
}

const fn numerals(major: &'static str, minor: &'static str, diminished: &'static str) -> Numerals {
  Numerals {
    major,
    minor,
    diminished,
  }
}

/// Indexed by absolute position, clockwise from the tonic.
pub const ROMAN_NUMERALS: [Numerals; 12] = [
  numerals("I", "vi", "vii°"),
  numerals("V", "iii", "#iv°"),
  numerals("II", "vii", "#i°"),
  numerals("VI", "#iv", "#v°"),
  numerals("III", "#i", "#ii°"),
  numerals("vii", "#v", "#vi°"),
  // the tritone major chord is labelled by its diminished function in the tonic key
  numerals("#iv°", "biii", "iii°"),
  numerals("bII", "bvii", "i°"),
  numerals("bVI", "iv", "v°"),
  numerals("bIII", "i", "ii°"),
  numerals("bVII", "v", "vi°"),
  numerals("IV", "ii", "iii°"),
];

/// The seven modes of the major scale and the absolute position each one is
/// printed at. The remaining five positions of the mode ring are blank.
pub const MODES: [(&str, u8); 7] = [
  ("Ionian", 0),
  ("Lydian", 1),
  ("Mixolydian", 11),
  ("Dorian", 10),
  ("Aeolian", 9),
  ("Phrygian", 8),
  ("Locrian", 7),
];

/// Interval of each absolute position above the tonic.
pub const INTERVAL_NAMES: [&str; 12] = [
  "Tonic",
  "Perfect 5th",
  "Major 2nd",
  "Major 6th",
  "Major 3rd",
  "Major 7th",
  "Tritone",
  "Minor 2nd",
  "Minor 6th",
  "Minor 3rd",
  "Minor 7th",
  "Perfect 4th",
];

pub fn roman_numeral(ring: Ring, position: SlotPosition) -> Option<&'static str> {
  let n = &ROMAN_NUMERALS[position.get() as usize];
  match ring {
    Ring::Major => Some(n.major),
    Ring::Minor => Some(n.minor),
    Ring::Diminished => Some(n.diminished),
    Ring::Mode | Ring::Interval => None,
  }
}

pub fn mode_at(position: SlotPosition) -> Option<&'static str> {
  MODES
    .iter()
    .find(|(_, p)| *p == position.get())
    .map(|(name, _)| *name)
}

/// The text of a static-ring slot. Blank mode slots give an empty string;
/// chord rings give `None`.
pub fn static_label(ring: Ring, position: SlotPosition) -> Option<&'static str> {
  match ring {
    Ring::Mode => Some(mode_at(position).unwrap_or("")),
    Ring::Interval => Some(INTERVAL_NAMES[position.get() as usize]),
    Ring::Major | Ring::Minor | Ring::Diminished => None,
  }
}
