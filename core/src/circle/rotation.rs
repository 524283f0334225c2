use std::fmt::Display;

use log::debug;

use super::positions::CIRCLE_POSITIONS;
use super::ring::SLOT_COUNT;

/// Inputs that move the selected key around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAction {
  /// Counter-clockwise: the key a fifth below moves into the tonic slot.
  RotateLeft,

  /// Clockwise: the key a fifth above moves into the tonic slot.
  RotateRight,

  /// Jump straight to a circle index. Wrapped into range.
  Select(usize),
}

impl Display for RotationAction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use RotationAction::*;
    match self {
      RotateLeft => write!(f, "RotateLeft"),
      RotateRight => write!(f, "RotateRight"),
      Select(i) => write!(f, "Select({i})"),
    }
  }
}

/// The selected key, as an index into [CIRCLE_POSITIONS].
///
/// This is the only mutable state behind the diagram; everything displayed is
/// derived from it. It starts at C (index 0) and every transition stays in
/// `0 .. 12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
  selected: usize,
}

impl RotationState {
  pub fn new() -> RotationState {
    RotationState::default()
  }

  pub fn selected_index(&self) -> usize {
    self.selected
  }

  /// Name of the selected major key, e.g. `"Eb"`.
  pub fn key_name(&self) -> &'static str {
    CIRCLE_POSITIONS[self.selected].major
  }

  pub fn rotate_left(&mut self) {
    self.apply(RotationAction::RotateLeft);
  }

  pub fn rotate_right(&mut self) {
    self.apply(RotationAction::RotateRight);
  }

  pub fn select_index(&mut self, index: usize) {
    self.apply(RotationAction::Select(index));
  }

  /// Applies an action and returns whether the selected index changed.
  pub fn apply(&mut self, action: RotationAction) -> bool {
    use RotationAction::*;
    let prev = self.selected;
    self.selected = match action {
      RotateLeft => (prev + SLOT_COUNT - 1) % SLOT_COUNT,
      RotateRight => (prev + 1) % SLOT_COUNT,
      Select(i) => i % SLOT_COUNT,
    };

    debug!(
      "{action}: {} ({prev}) -> {} ({})",
      CIRCLE_POSITIONS[prev].major,
      self.key_name(),
      self.selected
    );
    prev != self.selected
  }
}
