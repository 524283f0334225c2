//! Pitch classes in 12-tone equal temperament, and the rules for spelling them.

use std::fmt::Display;
use std::str::FromStr;

use error_stack::{Report, report};
use serde::{Deserialize, Serialize};

use crate::error::CircleError;

/// Number of pitch classes in an octave.
pub const DIVISIONS: u8 = 12;

const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
const FLAT_NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// The six major keys whose notes are spelled with flats. Every other key,
/// C included, is spelled with sharps.
pub const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];

/// One of the twelve chromatic steps, with `0` being C.
///
/// A `PitchClass` carries no spelling; use [PitchClass::name] with a [Spelling]
/// to get a letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
  /// Wraps any number of semitones above C into a pitch class.
  pub fn new(semitones: usize) -> PitchClass {
    PitchClass((semitones % DIVISIONS as usize) as u8)
  }

  pub fn index(&self) -> u8 {
    self.0
  }

  /// Returns the pitch class `semitones` steps above this one.
  pub fn transpose(self, semitones: u8) -> PitchClass {
    PitchClass::new(self.0 as usize + semitones as usize)
  }

  pub fn name(&self, spelling: Spelling) -> &'static str {
    name_of(*self, spelling.uses_sharps())
  }

  /// All twelve pitch classes, starting from C.
  pub fn all() -> impl Iterator<Item = PitchClass> {
    (0..DIVISIONS).map(PitchClass)
  }
}

impl TryFrom<u8> for PitchClass {
  type Error = CircleError;

  fn try_from(index: u8) -> Result<Self, Self::Error> {
    if index < DIVISIONS {
      Ok(PitchClass(index))
    } else {
      Err(CircleError::InvalidPitchClass(index))
    }
  }
}

impl FromStr for PitchClass {
  type Err = Report<CircleError>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    index_of(s).ok_or_else(|| report!(CircleError::UnknownNote(s.to_string())))
  }
}

impl Display for PitchClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", name_of(*self, true))
  }
}

/// Whether notes are written with sharps or with flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spelling {
  Sharps,
  Flats,
}

impl Spelling {
  /// The spelling used for every note while `key` is the selected major key.
  ///
  /// ```rust
  /// use fifths_core::harmony::pitch::Spelling;
  ///
  /// assert_eq!(Spelling::for_key("Db"), Spelling::Flats);
  /// assert_eq!(Spelling::for_key("C"), Spelling::Sharps);
  /// ```
  pub fn for_key(key: &str) -> Spelling {
    if FLAT_KEYS.contains(&key) {
      Spelling::Flats
    } else {
      Spelling::Sharps
    }
  }

  pub fn uses_sharps(&self) -> bool {
    *self == Spelling::Sharps
  }
}

fn letter_index(letter: char) -> Option<i8> {
  match letter {
    'C' => Some(0),
    'D' => Some(2),
    'E' => Some(4),
    'F' => Some(5),
    'G' => Some(7),
    'A' => Some(9),
    'B' => Some(11),
    _ => None,
  }
}

fn accidental_offset(c: char) -> Option<i8> {
  match c {
    '#' | '♯' => Some(1),
    'b' | '♭' => Some(-1),
    _ => None,
  }
}

/// Parses a note name into its pitch class.
///
/// Accepts a letter `A` through `G` followed by at most two accidentals of the
/// same kind, so enharmonic names land on the same index (`C#` and `Db` are
/// both 1, `B#` is 0, `Ebb` is 2). Returns `None` for anything else.
///
/// ```rust
/// use fifths_core::harmony::pitch::index_of;
///
/// assert_eq!(index_of("Db"), index_of("C#"));
/// assert_eq!(index_of("Cb").map(|pc| pc.index()), Some(11));
/// assert_eq!(index_of("H"), None);
/// ```
pub fn index_of(name: &str) -> Option<PitchClass> {
  let mut chars = name.chars();
  let base = letter_index(chars.next()?)?;

  let mut offset = 0;
  let mut count = 0;
  for c in chars {
    let step = accidental_offset(c)?;
    if count > 0 && step != offset / count {
      return None;
    }
    offset += step;
    count += 1;
  }

  if count > 2 {
    return None;
  }

  Some(PitchClass::new((base + offset).rem_euclid(DIVISIONS as i8) as usize))
}

/// Returns the canonical name of a pitch class with the given sharp / flat preference.
pub fn name_of(pitch_class: PitchClass, use_sharps: bool) -> &'static str {
  let i = pitch_class.index() as usize;
  if use_sharps {
    SHARP_NAMES[i]
  } else {
    FLAT_NAMES[i]
  }
}

/// Returns the root note of a chord symbol: its first character, plus the
/// second character if that is a `#` or `b`.
///
/// ```rust
/// use fifths_core::harmony::pitch::root_of;
///
/// assert_eq!(root_of("F#m"), "F#");
/// assert_eq!(root_of("Bb"), "Bb");
/// assert_eq!(root_of("C"), "C");
/// ```
pub fn root_of(symbol: &str) -> &str {
  let mut indices = symbol.char_indices();
  let end = match (indices.next(), indices.next()) {
    (None, _) => 0,
    (Some((_, first)), None) => first.len_utf8(),
    (Some(_), Some((i, second))) => {
      if second == '#' || second == 'b' {
        i + second.len_utf8()
      } else {
        i
      }
    }
  };
  &symbol[..end]
}
