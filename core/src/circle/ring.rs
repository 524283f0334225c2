use std::fmt::Display;

use bounded_integer::BoundedU8;
use error_stack::{Report, report};
use serde::{Deserialize, Serialize};

use crate::error::CircleError;
use crate::harmony::SeventhChord;

/// Number of slots in each ring.
pub const SLOT_COUNT: usize = 12;

/// The fixed angular index of a slot on the circle, `0 ..= 11`, counted
/// clockwise from the tonic slot at the top. It never changes with the
/// selected key.
pub type SlotPosition = BoundedU8<0, 11>;

/// Checks an absolute position coming from outside the crate.
pub fn slot_position(position: usize) -> Result<SlotPosition, Report<CircleError>> {
  u8::try_from(position)
    .ok()
    .and_then(SlotPosition::new)
    .ok_or_else(|| report!(CircleError::InvalidSlotPosition(position)))
}

/// Every slot position in clockwise order.
pub fn all_positions() -> impl Iterator<Item = SlotPosition> {
  (0..SLOT_COUNT as u8).filter_map(SlotPosition::new)
}

/// One of the five concentric rings of the diagram.
///
/// The three chord rings rotate with the selected key; the interval and mode
/// rings are static labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
  Interval,
  Major,
  Minor,
  Diminished,
  Mode,
}

impl Ring {
  /// All rings, from the center outward.
  pub const ALL: [Ring; 5] = [
    Ring::Interval,
    Ring::Major,
    Ring::Minor,
    Ring::Diminished,
    Ring::Mode,
  ];

  pub fn is_chord_ring(&self) -> bool {
    matches!(self, Ring::Major | Ring::Minor | Ring::Diminished)
  }

  /// Only major chords can be clicked to select their key.
  pub fn is_clickable(&self) -> bool {
    *self == Ring::Major
  }

  /// The chord ring a chord symbol belongs on.
  pub fn of_symbol(symbol: &str) -> Ring {
    match SeventhChord::of_symbol(symbol) {
      SeventhChord::Major => Ring::Major,
      SeventhChord::Minor => Ring::Minor,
      SeventhChord::HalfDiminished => Ring::Diminished,
    }
  }
}

impl Display for Ring {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Ring::*;
    match self {
      Interval => write!(f, "Interval"),
      Major => write!(f, "Major"),
      Minor => write!(f, "Minor"),
      Diminished => write!(f, "Diminished"),
      Mode => write!(f, "Mode"),
    }
  }
}
