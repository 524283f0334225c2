use std::fmt::Display;

use error_stack::{Report, report};
use serde::Serialize;

use super::ring::Ring;
use crate::error::CircleError;

/// What one absolute slot of the circle holds, for the key whose tonic sits in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CirclePosition {
  pub major: &'static str,
  pub minor: &'static str,
  pub diminished: &'static str,
  pub sharp_count: u8,
  pub flat_count: u8,
}

impl CirclePosition {
  /// The chord this position contributes to a chord ring, or `None` for the
  /// static rings.
  pub fn chord(&self, ring: Ring) -> Option<&'static str> {
    match ring {
      Ring::Major => Some(self.major),
      Ring::Minor => Some(self.minor),
      Ring::Diminished => Some(self.diminished),
      Ring::Mode | Ring::Interval => None,
    }
  }

  pub fn signature(&self) -> KeySignature {
    if self.sharp_count > 0 {
      KeySignature::Sharps(self.sharp_count)
    } else if self.flat_count > 0 {
      KeySignature::Flats(self.flat_count)
    } else {
      KeySignature::Natural
    }
  }
}

const fn pos(
  major: &'static str,
  minor: &'static str,
  diminished: &'static str,
  sharp_count: u8,
  flat_count: u8,
) -> CirclePosition {
  CirclePosition {
    major,
    minor,
    diminished,
    sharp_count,
    flat_count,
  }
}

/// The twelve keys in ascending fifths, starting from C.
pub static CIRCLE_POSITIONS: [CirclePosition; 12] = [
  pos("C", "Am", "B°", 0, 0),
  pos("G", "Em", "F#°", 1, 0),
  pos("D", "Bm", "C#°", 2, 0),
  pos("A", "F#m", "G#°", 3, 0),
  pos("E", "C#m", "D#°", 4, 0),
  pos("B", "G#m", "A#°", 5, 0),
  pos("F#", "D#m", "E#°", 6, 0),
  pos("Db", "Bbm", "C°", 0, 5),
  pos("Ab", "Fm", "G°", 0, 4),
  pos("Eb", "Cm", "D°", 0, 3),
  pos("Bb", "Gm", "A°", 0, 2),
  pos("F", "Dm", "E°", 0, 1),
];

/// Finds the circle index of the major key named `key`.
pub fn position_of_key(key: &str) -> Result<usize, Report<CircleError>> {
  CIRCLE_POSITIONS
    .iter()
    .position(|p| p.major == key)
    .ok_or_else(|| report!(CircleError::UnknownKey(key.to_string())))
}

/// How many sharps or flats a key signature carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeySignature {
  Natural,
  Sharps(u8),
  Flats(u8),
}

impl Display for KeySignature {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use KeySignature::*;
    match self {
      Natural => write!(f, "No Sharps or Flats"),
      Sharps(1) => write!(f, "1 Sharp"),
      Sharps(n) => write!(f, "{n} Sharps"),
      Flats(1) => write!(f, "1 Flat"),
      Flats(n) => write!(f, "{n} Flats"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_kind_of_accidental_per_key() {
    for p in CIRCLE_POSITIONS {
      assert!(p.sharp_count == 0 || p.flat_count == 0, "{}", p.major);
    }
    assert_eq!(CIRCLE_POSITIONS[0].signature(), KeySignature::Natural);
  }

  #[test]
  fn signatures() {
    assert_eq!(CIRCLE_POSITIONS[1].signature(), KeySignature::Sharps(1));
    assert_eq!(CIRCLE_POSITIONS[7].signature(), KeySignature::Flats(5));
    assert_eq!(KeySignature::Natural.to_string(), "No Sharps or Flats");
    assert_eq!(KeySignature::Sharps(1).to_string(), "1 Sharp");
    assert_eq!(KeySignature::Sharps(6).to_string(), "6 Sharps");
    assert_eq!(KeySignature::Flats(1).to_string(), "1 Flat");
    assert_eq!(KeySignature::Flats(3).to_string(), "3 Flats");
  }

  #[test]
  fn key_lookup() {
    assert_eq!(position_of_key("C").unwrap(), 0);
    assert_eq!(position_of_key("Db").unwrap(), 7);
    assert_eq!(position_of_key("F").unwrap(), 11);

    let err = position_of_key("C#").unwrap_err();
    assert_eq!(err.current_context(), &CircleError::UnknownKey("C#".to_string()));
  }

  #[test]
  fn chord_by_ring() {
    let g = CIRCLE_POSITIONS[1];
    assert_eq!(g.chord(Ring::Major), Some("G"));
    assert_eq!(g.chord(Ring::Minor), Some("Em"));
    assert_eq!(g.chord(Ring::Diminished), Some("F#°"));
    assert_eq!(g.chord(Ring::Mode), None);
  }
}
