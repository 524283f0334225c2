//! Resolves what each of the 60 cells of the diagram shows for the current
//! rotation.
//!
//! A cell is addressed by its ring and its *absolute* position. Chord content
//! is looked up at the *rotated* index `(position + selected) % 12`, while
//! Roman numerals and diatonic highlighting stay keyed to the absolute
//! position, because they describe the tonic slot at the top of the diagram
//! and its neighbors.

use serde::Serialize;

use super::labels::{roman_numeral, static_label};
use super::positions::CIRCLE_POSITIONS;
use super::ring::{all_positions, Ring, SlotPosition, SLOT_COUNT};
use super::rotation::RotationState;
use crate::geometry::{slot_rotation, Angle};
use crate::harmony::{spell, Chord, PitchClass};

/// Everything the presentation layer needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
  pub ring: Ring,
  pub position: u8,
  /// Index into the circle table used for this cell's content.
  pub rotated_index: u8,
  pub symbol: String,
  pub pitch_classes: Vec<PitchClass>,
  pub notes: Vec<&'static str>,
  pub roman_numeral: Option<&'static str>,
  pub is_diatonic: bool,
  pub is_tonic: bool,
  pub is_clickable: bool,
  /// Clockwise rotation of the cell from twelve o'clock.
  pub rotation: Angle,
}

impl SlotView {
  /// Blank cells (the five unlabeled mode slots) have nothing to draw.
  pub fn is_blank(&self) -> bool {
    self.symbol.is_empty()
  }
}

/// The table index a cell's content comes from.
pub fn rotated_index(ring: Ring, position: SlotPosition, selected: usize) -> usize {
  let p = position.get() as usize;
  if ring.is_chord_ring() {
    (p + selected) % SLOT_COUNT
  } else {
    p
  }
}

/// The tonic and its two neighbors on the circle (IV and V, ii and iii, vi
/// and the single vii°) are in key whatever the rotation.
pub fn is_diatonic(ring: Ring, position: SlotPosition) -> bool {
  let p = position.get();
  match ring {
    Ring::Major | Ring::Minor => matches!(p, 0 | 1 | 11),
    Ring::Diminished => p == 0,
    Ring::Mode | Ring::Interval => false,
  }
}

pub fn is_tonic(ring: Ring, position: SlotPosition) -> bool {
  ring == Ring::Major && position.get() == 0
}

pub fn resolve_slot(ring: Ring, position: SlotPosition, rotation: &RotationState) -> SlotView {
  let index = rotated_index(ring, position, rotation.selected_index());

  let chord = match CIRCLE_POSITIONS[index].chord(ring) {
    Some(symbol) => spell(symbol, rotation.key_name()),
    // mode names like "Aeolian" would otherwise parse as a chord root
    None => Chord::label(static_label(ring, position).unwrap_or("")),
  };

  SlotView {
    ring,
    position: position.get(),
    rotated_index: index as u8,
    symbol: chord.symbol,
    pitch_classes: chord.pitch_classes,
    notes: chord.notes,
    roman_numeral: roman_numeral(ring, position),
    is_diatonic: is_diatonic(ring, position),
    is_tonic: is_tonic(ring, position),
    is_clickable: ring.is_clickable(),
    rotation: slot_rotation(position.get() as usize),
  }
}

/// Re-derives every cell, rings from the center outward.
pub fn resolve_all(rotation: &RotationState) -> Vec<SlotView> {
  Ring::ALL
    .iter()
    .flat_map(|ring| all_positions().map(move |p| resolve_slot(*ring, p, rotation)))
    .collect()
}
