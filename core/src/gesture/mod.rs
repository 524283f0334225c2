//! Turns a free-form drag around the diagram into whole-slot rotations.
//!
//! Modelled as a small state machine: [DragState::Idle] until a pointer goes
//! down, then [DragState::Dragging] while it moves, then back to idle when it
//! is released or the gesture is cancelled.
//!
//! ```text
//!            Down                 Move
//!  ┌──────┐ ──────► ┌──────────┐ ◄────┐
//!  │ Idle │         │ Dragging │ ─────┘
//!  └──────┘ ◄────── └──────────┘
//!           Up / Cancel
//! ```
//!
//! Every move folds the pointer's angular change around the drag center into
//! an accumulator. Each time the accumulator crosses one slot width (30°) a
//! [RotationAction] is emitted and the width is taken back out, so a fast
//! sweep across several slots emits one action per slot.

use std::f64::consts::PI;
use std::fmt::Display;

use log::{debug, trace, warn};

use crate::circle::RotationAction;
use crate::geometry::{angle_from, normalize_delta, Float, Point};

/// Angular distance the pointer has to travel to move the circle by one slot.
pub const ROTATION_THRESHOLD: Float = PI / 6.0;

/// Slack on the threshold comparison, so that sweeping exactly `k` slot widths
/// yields `k` rotations despite `atan2` rounding.
pub const ANGLE_TOLERANCE: Float = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
  /// A pointer went down on the diagram. `center` is the point the drag
  /// revolves around.
  Down { center: Point, pointer: Point },

  /// The pointer moved while held down.
  Move(Point),

  /// The pointer was released.
  Up,

  /// The gesture was abandoned, e.g. the pointer left the tracked area or
  /// another interaction took over.
  Cancel,
}

impl Display for PointerInput {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use PointerInput::*;
    match self {
      Down { center, pointer } => write!(
        f,
        "Down(center: ({}, {}), pointer: ({}, {}))",
        center.x, center.y, pointer.x, pointer.y
      ),
      Move(p) => write!(f, "Move({}, {})", p.x, p.y),
      Up => write!(f, "Up"),
      Cancel => write!(f, "Cancel"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
  #[default]
  Idle,

  Dragging {
    center: Point,
    /// Pointer angle around `center` at the last event, in radians.
    previous_angle: Float,
    /// Net angle swept since the last emitted rotation.
    accumulated_angle: Float,
  },
}

impl DragState {
  /// Applies a pointer input, returning the new state and any rotations it
  /// triggers. Inputs that don't fit the current state are ignored.
  pub fn next(self, input: PointerInput) -> (DragState, Vec<RotationAction>) {
    use DragState::*;
    use PointerInput::*;

    match (input, self) {
      (Down { center, pointer }, Idle) => {
        let state = Dragging {
          center,
          previous_angle: angle_from(center, pointer),
          accumulated_angle: 0.0,
        };
        (state, vec![])
      }

      // only one drag at a time. keep the running one intact.
      (Down { .. }, dragging @ Dragging { .. }) => {
        warn!("ignoring pointer down while a drag is already in progress");
        (dragging, vec![])
      }

      (
        Move(pointer),
        Dragging {
          center,
          previous_angle,
          accumulated_angle,
        },
      ) => {
        let current_angle = angle_from(center, pointer);
        let delta = normalize_delta(current_angle - previous_angle);
        let mut accumulated_angle = accumulated_angle + delta;
        trace!("drag delta {delta:.4} rad, accumulated {accumulated_angle:.4} rad");

        let mut actions = vec![];
        while accumulated_angle >= ROTATION_THRESHOLD - ANGLE_TOLERANCE {
          actions.push(RotationAction::RotateLeft);
          accumulated_angle -= ROTATION_THRESHOLD;
        }
        while accumulated_angle <= -ROTATION_THRESHOLD + ANGLE_TOLERANCE {
          actions.push(RotationAction::RotateRight);
          accumulated_angle += ROTATION_THRESHOLD;
        }

        if !actions.is_empty() {
          debug!("drag emitted {} rotation(s): {:?}", actions.len(), actions);
        }

        let state = Dragging {
          center,
          previous_angle: current_angle,
          accumulated_angle,
        };
        (state, actions)
      }

      (Up, Dragging { accumulated_angle, .. }) | (Cancel, Dragging { accumulated_angle, .. }) => {
        debug!("drag finished ({input}), discarding {accumulated_angle:.4} rad");
        (Idle, vec![])
      }

      // moves and releases without a preceding pointer down
      (_, Idle) => (Idle, vec![]),
    }
  }
}

/// Owns the drag state for one diagram.
#[derive(Debug, Default)]
pub struct GestureTracker {
  state: DragState,
}

impl GestureTracker {
  pub fn new() -> GestureTracker {
    GestureTracker::default()
  }

  pub fn state(&self) -> DragState {
    self.state
  }

  pub fn is_dragging(&self) -> bool {
    matches!(self.state, DragState::Dragging { .. })
  }

  /// Angle swept since the last emitted rotation, or `None` when idle.
  pub fn accumulated_angle(&self) -> Option<Float> {
    match self.state {
      DragState::Dragging {
        accumulated_angle, ..
      } => Some(accumulated_angle),
      DragState::Idle => None,
    }
  }

  pub fn handle(&mut self, input: PointerInput) -> Vec<RotationAction> {
    let (state, actions) = self.state.next(input);
    self.state = state;
    actions
  }

  /// Starts a drag. Returns `false` if one was already running.
  pub fn pointer_down(&mut self, center: Point, pointer: Point) -> bool {
    let was_dragging = self.is_dragging();
    self.handle(PointerInput::Down { center, pointer });
    !was_dragging
  }

  pub fn pointer_move(&mut self, pointer: Point) -> Vec<RotationAction> {
    self.handle(PointerInput::Move(pointer))
  }

  pub fn pointer_up(&mut self) {
    self.handle(PointerInput::Up);
  }

  pub fn cancel(&mut self) {
    self.handle(PointerInput::Cancel);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::circle::RotationAction::*;

  const EPSILON: Float = 1e-9;

  fn on_circle(angle: Float) -> Point {
    Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
  }

  fn start_at(angle: Float) -> GestureTracker {
    let mut tracker = GestureTracker::new();
    assert!(tracker.pointer_down(Point::default(), on_circle(angle)));
    tracker
  }

  #[test]
  fn sixty_degrees_is_two_rotations() {
    let mut tracker = start_at(0.0);
    let actions = tracker.pointer_move(on_circle(PI / 3.0));
    assert_eq!(actions, vec![RotateLeft, RotateLeft]);
    assert!(tracker.accumulated_angle().unwrap().abs() < EPSILON);
  }

  #[test]
  fn sixty_degrees_in_small_steps() {
    let mut tracker = start_at(0.0);
    let mut actions = vec![];
    for i in 1..=20 {
      actions.extend(tracker.pointer_move(on_circle(PI / 60.0 * i as Float)));
    }
    assert_eq!(actions, vec![RotateLeft, RotateLeft]);
    assert!(tracker.accumulated_angle().unwrap().abs() < EPSILON);
  }

  #[test]
  fn just_over_one_slot_leaves_a_remainder() {
    let mut tracker = start_at(0.0);
    let actions = tracker.pointer_move(on_circle(PI / 6.0 + 0.01));
    assert_eq!(actions, vec![RotateLeft]);
    assert!((tracker.accumulated_angle().unwrap() - 0.01).abs() < EPSILON);
  }

  #[test]
  fn less_than_one_slot_emits_nothing() {
    let mut tracker = start_at(0.0);
    assert!(tracker.pointer_move(on_circle(0.4)).is_empty());
    assert!((tracker.accumulated_angle().unwrap() - 0.4).abs() < EPSILON);
  }

  #[test]
  fn negative_sweep_rotates_right() {
    let mut tracker = start_at(0.0);
    let actions = tracker.pointer_move(on_circle(-PI / 2.0));
    assert_eq!(actions, vec![RotateRight, RotateRight, RotateRight]);
  }

  #[test]
  fn back_and_forth_cancels_out() {
    let mut tracker = start_at(0.0);
    assert!(tracker.pointer_move(on_circle(0.3)).is_empty());
    assert!(tracker.pointer_move(on_circle(-0.2)).is_empty());
    assert!((tracker.accumulated_angle().unwrap() + 0.2).abs() < EPSILON);
  }

  #[test]
  fn crossing_the_atan2_seam() {
    // from 170° to -170° is a 20° step, not -340°
    let mut tracker = start_at(PI - 0.17);
    assert!(tracker.pointer_move(on_circle(-PI + 0.17)).is_empty());
    assert!((tracker.accumulated_angle().unwrap() - 0.34).abs() < EPSILON);

    let actions = tracker.pointer_move(on_circle(-PI + 0.6));
    assert_eq!(actions, vec![RotateLeft]);
  }

  #[test]
  fn release_discards_the_remainder() {
    let mut tracker = start_at(0.0);
    tracker.pointer_move(on_circle(0.4));
    tracker.pointer_up();
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.accumulated_angle(), None);
    assert!(tracker.pointer_move(on_circle(2.0)).is_empty());
  }

  #[test]
  fn cancel_acts_like_release() {
    let mut tracker = start_at(0.0);
    tracker.pointer_move(on_circle(0.4));
    tracker.cancel();
    assert_eq!(tracker.state(), DragState::Idle);

    // a fresh drag starts from zero
    assert!(tracker.pointer_down(Point::default(), on_circle(1.0)));
    assert_eq!(tracker.accumulated_angle(), Some(0.0));
  }

  #[test]
  fn second_pointer_down_is_ignored() {
    let mut tracker = start_at(0.0);
    tracker.pointer_move(on_circle(0.4));
    let before = tracker.state();

    assert!(!tracker.pointer_down(Point::new(50.0, 50.0), on_circle(2.0)));
    assert_eq!(tracker.state(), before);
  }

  #[test]
  fn events_without_a_drag_are_no_ops() {
    let mut tracker = GestureTracker::new();
    assert!(tracker.pointer_move(on_circle(1.0)).is_empty());
    tracker.pointer_up();
    tracker.cancel();
    assert_eq!(tracker.state(), DragState::Idle);
  }

  #[test]
  fn drag_around_an_offset_center() {
    let center = Point::new(320.0, 240.0);
    let mut tracker = GestureTracker::new();
    tracker.pointer_down(center, Point::new(420.0, 240.0));
    // straight below the center on screen is +90°
    let actions = tracker.pointer_move(Point::new(320.0, 340.0));
    assert_eq!(actions, vec![RotateLeft, RotateLeft, RotateLeft]);
  }
}
