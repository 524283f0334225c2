//! The interactive session behind one circle-of-fifths diagram.
//!
//! [CircleOfFifths] owns the selected key, the drag state and the diatonic
//! chord source. The presentation layer feeds it clicks, button presses and
//! pointer events (either through the methods or as [Event]s via
//! [`update`](CircleOfFifths::update)) and redraws from
//! [`slot_views`](CircleOfFifths::slot_views) whenever the selection changes.

use std::fmt::Display;

use error_stack::Report;
use log::debug;

use crate::circle::slots::rotated_index;
use crate::circle::{
  position_of_key, resolve_all, resolve_slot, slot_position, CirclePosition, Ring,
  RotationAction, RotationState, SlotView, CIRCLE_POSITIONS,
};
use crate::diatonic::{CuratedDiatonicChords, DiatonicChord, DiatonicChordSource};
use crate::error::CircleError;
use crate::gesture::GestureTracker;
use crate::geometry::Point;
use crate::info::KeySummary;

/// Inputs from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
  /// A major-ring slot at this absolute position was clicked.
  SelectKey(usize),

  /// Any slot was clicked. Only major-ring slots react.
  ActivateSlot(Ring, usize),

  RotateLeft,
  RotateRight,

  /// The diagram moved or was resized, and drags now revolve around this point.
  SetDiagramCenter(Point),

  PointerDown(Point),
  PointerMove(Point),
  PointerUp,
  PointerCancel,
}

impl Display for Event {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Event::*;
    match self {
      SelectKey(p) => write!(f, "SelectKey({p})"),
      ActivateSlot(ring, p) => write!(f, "ActivateSlot({ring}, {p})"),
      RotateLeft => write!(f, "RotateLeft"),
      RotateRight => write!(f, "RotateRight"),
      SetDiagramCenter(c) => write!(f, "SetDiagramCenter({}, {})", c.x, c.y),
      PointerDown(p) => write!(f, "PointerDown({}, {})", p.x, p.y),
      PointerMove(p) => write!(f, "PointerMove({}, {})", p.x, p.y),
      PointerUp => write!(f, "PointerUp"),
      PointerCancel => write!(f, "PointerCancel"),
    }
  }
}

pub struct CircleOfFifths<S: DiatonicChordSource = CuratedDiatonicChords> {
  rotation: RotationState,
  gesture: GestureTracker,
  center: Point,
  source: S,
}

impl CircleOfFifths {
  /// A session starting on C major, using the built-in diatonic chord table.
  pub fn new() -> CircleOfFifths {
    CircleOfFifths::with_source(CuratedDiatonicChords)
  }
}

impl Default for CircleOfFifths {
  fn default() -> Self {
    CircleOfFifths::new()
  }
}

impl<S: DiatonicChordSource> CircleOfFifths<S> {
  pub fn with_source(source: S) -> CircleOfFifths<S> {
    CircleOfFifths {
      rotation: RotationState::new(),
      gesture: GestureTracker::new(),
      center: Point::default(),
      source,
    }
  }

  pub fn selected_index(&self) -> usize {
    self.rotation.selected_index()
  }

  pub fn selected_position(&self) -> &'static CirclePosition {
    &CIRCLE_POSITIONS[self.rotation.selected_index()]
  }

  pub fn key_name(&self) -> &'static str {
    self.rotation.key_name()
  }

  pub fn key_summary(&self) -> KeySummary {
    KeySummary::of(self.selected_position())
  }

  pub fn slot_view(&self, ring: Ring, position: usize) -> Result<SlotView, Report<CircleError>> {
    let position = slot_position(position)?;
    Ok(resolve_slot(ring, position, &self.rotation))
  }

  /// All 60 cells, freshly derived from the current selection.
  pub fn slot_views(&self) -> Vec<SlotView> {
    resolve_all(&self.rotation)
  }

  /// The curated diatonic chords of `key`, or nothing for a key the source
  /// doesn't know.
  pub fn diatonic_chords_for_key(&self, key: &str) -> &[DiatonicChord] {
    self.source.diatonic_chords(key).unwrap_or(&[])
  }

  pub fn diatonic_chords(&self) -> &[DiatonicChord] {
    self.diatonic_chords_for_key(self.key_name())
  }

  /// Handles a click on any slot. Clicking a major chord selects that chord's
  /// own key; every other ring ignores clicks. Returns whether the selected
  /// key changed.
  pub fn activate_slot(&mut self, ring: Ring, position: usize) -> Result<bool, Report<CircleError>> {
    let position = slot_position(position)
      .map_err(|e| e.attach_printable(format!("while activating a {ring} slot")))?;
    if !ring.is_clickable() {
      return Ok(false);
    }

    let index = rotated_index(ring, position, self.rotation.selected_index());
    Ok(self.rotation.apply(RotationAction::Select(index)))
  }

  /// Handles a click on the major-ring slot at `position`.
  pub fn select_key(&mut self, position: usize) -> Result<bool, Report<CircleError>> {
    self.activate_slot(Ring::Major, position)
  }

  /// Selects a key by name, e.g. `"F#"`.
  pub fn select_key_named(&mut self, key: &str) -> Result<bool, Report<CircleError>> {
    let index = position_of_key(key)?;
    Ok(self.rotation.apply(RotationAction::Select(index)))
  }

  pub fn rotate_left(&mut self) -> bool {
    self.rotation.apply(RotationAction::RotateLeft)
  }

  pub fn rotate_right(&mut self) -> bool {
    self.rotation.apply(RotationAction::RotateRight)
  }

  pub fn diagram_center(&self) -> Point {
    self.center
  }

  pub fn set_diagram_center(&mut self, center: Point) {
    self.center = center;
  }

  pub fn is_dragging(&self) -> bool {
    self.gesture.is_dragging()
  }

  /// Starts a drag around the diagram center. Returns `false` (and leaves the
  /// running drag alone) if a drag was already in progress.
  pub fn on_pointer_down(&mut self, pointer: Point) -> bool {
    self.gesture.pointer_down(self.center, pointer)
  }

  /// Feeds a drag movement, applying any whole-slot rotations it completes.
  /// Returns whether the selected key changed.
  pub fn on_pointer_move(&mut self, pointer: Point) -> bool {
    let before = self.rotation.selected_index();
    for action in self.gesture.pointer_move(pointer) {
      self.rotation.apply(action);
    }
    before != self.rotation.selected_index()
  }

  pub fn on_pointer_up(&mut self) {
    self.gesture.pointer_up();
  }

  pub fn cancel_gesture(&mut self) {
    self.gesture.cancel();
  }

  /// Dispatches an [Event] and returns whether the selected key changed.
  pub fn update(&mut self, event: Event) -> Result<bool, Report<CircleError>> {
    use Event::*;
    debug!("handling event {event}");

    let changed = match event {
      SelectKey(p) => self.select_key(p)?,
      ActivateSlot(ring, p) => self.activate_slot(ring, p)?,
      RotateLeft => self.rotate_left(),
      RotateRight => self.rotate_right(),
      SetDiagramCenter(c) => {
        self.set_diagram_center(c);
        false
      }
      PointerDown(p) => {
        self.on_pointer_down(p);
        false
      }
      PointerMove(p) => self.on_pointer_move(p),
      PointerUp => {
        self.on_pointer_up();
        false
      }
      PointerCancel => {
        self.cancel_gesture();
        false
      }
    };
    Ok(changed)
  }
}

#[cfg(test)]
mod tests {
  use std::f64::consts::PI;

  use super::*;
  use crate::harmony::spell;

  #[test]
  fn clicking_g_selects_g() {
    let mut app = CircleOfFifths::new();
    assert_eq!(app.key_name(), "C");
    assert_eq!(spell("Am", app.key_name()).notes, vec!["A", "C", "E", "G"]);

    assert!(app.select_key(1).unwrap());
    assert_eq!(app.selected_index(), 1);
    assert_eq!(spell("Em", app.key_name()).notes, vec!["E", "G", "B", "D"]);
    assert_eq!(app.slot_view(Ring::Major, 1).unwrap().symbol, "D");
  }

  #[test]
  fn clicking_a_rotated_chord_selects_its_own_key() {
    let mut app = CircleOfFifths::new();
    app.select_key(1).unwrap(); // G
    // position 1 now shows D, so clicking it moves to D rather than G
    app.select_key(1).unwrap();
    assert_eq!(app.key_name(), "D");
    assert_eq!(app.selected_index(), 2);
  }

  #[test]
  fn flat_key_spelling() {
    let mut app = CircleOfFifths::new();
    app.select_key(7).unwrap();
    assert_eq!(app.key_name(), "Db");
    assert_eq!(spell("Fm", app.key_name()).notes, vec!["F", "Ab", "C", "Eb"]);
    assert_eq!(app.slot_view(Ring::Minor, 1).unwrap().notes, vec!["F", "Ab", "C", "Eb"]);
  }

  #[test]
  fn only_major_slots_are_clickable() {
    let mut app = CircleOfFifths::new();
    assert!(!app.activate_slot(Ring::Minor, 3).unwrap());
    assert!(!app.activate_slot(Ring::Mode, 0).unwrap());
    assert_eq!(app.selected_index(), 0);

    assert!(app.activate_slot(Ring::Major, 11).unwrap());
    assert_eq!(app.key_name(), "F");
  }

  #[test]
  fn out_of_range_positions_fail() {
    let mut app = CircleOfFifths::new();
    let err = app.slot_view(Ring::Major, 12).unwrap_err();
    assert_eq!(err.current_context(), &CircleError::InvalidSlotPosition(12));

    assert!(app.select_key(40).is_err());
    assert!(app.activate_slot(Ring::Mode, 12).is_err());
    assert_eq!(app.selected_index(), 0);
  }

  #[test]
  fn select_by_name() {
    let mut app = CircleOfFifths::new();
    assert!(app.select_key_named("Ab").unwrap());
    assert_eq!(app.selected_index(), 8);
    assert!(!app.select_key_named("Ab").unwrap());

    let err = app.select_key_named("G#").unwrap_err();
    assert_eq!(err.current_context(), &CircleError::UnknownKey("G#".to_string()));
  }

  #[test]
  fn rotate_buttons() {
    let mut app = CircleOfFifths::new();
    assert!(app.rotate_left());
    assert_eq!(app.key_name(), "F");
    assert!(app.rotate_right());
    assert!(app.rotate_right());
    assert_eq!(app.key_name(), "G");
  }

  #[test]
  fn diatonic_chords_follow_selection() {
    let mut app = CircleOfFifths::new();
    app.select_key_named("A").unwrap();
    let symbols: Vec<&str> = app.diatonic_chords().iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["A", "Bm", "C#m", "D", "E", "F#m", "G#°"]);
    assert!(app.diatonic_chords_for_key("nope").is_empty());
  }

  #[test]
  fn custom_source_is_used() {
    struct OnlyC(Vec<DiatonicChord>);
    impl DiatonicChordSource for OnlyC {
      fn diatonic_chords(&self, key: &str) -> Option<&[DiatonicChord]> {
        (key == "C").then(|| self.0.as_slice())
      }
    }

    let app = CircleOfFifths::with_source(OnlyC(vec![DiatonicChord::new("I", "C", Ring::Major)]));
    assert_eq!(app.diatonic_chords().len(), 1);
    assert!(app.diatonic_chords_for_key("G").is_empty());
  }

  #[test]
  fn dragging_rotates_the_key() {
    let mut app = CircleOfFifths::new();
    app.set_diagram_center(Point::new(200.0, 200.0));
    assert!(app.on_pointer_down(Point::new(300.0, 200.0)));

    let angle = PI / 3.0;
    let p = Point::new(200.0 + 100.0 * angle.cos(), 200.0 + 100.0 * angle.sin());
    assert!(app.on_pointer_move(p));
    assert_eq!(app.selected_index(), 10);

    app.on_pointer_up();
    assert!(!app.is_dragging());
    assert!(!app.on_pointer_move(Point::new(200.0, 300.0)));
    assert_eq!(app.selected_index(), 10);
  }

  #[test]
  fn events_drive_the_session() {
    let mut app = CircleOfFifths::new();
    let events = [
      Event::SetDiagramCenter(Point::new(0.0, 0.0)),
      Event::PointerDown(Point::new(10.0, 0.0)),
      Event::PointerMove(Point::new(0.0, -10.0)),
      Event::PointerUp,
      Event::RotateRight,
    ];
    for e in events {
      app.update(e).unwrap();
    }
    // -90° is three steps right, plus the button
    assert_eq!(app.selected_index(), 4);

    assert!(!app.update(Event::SelectKey(0)).unwrap());
    assert!(app.update(Event::ActivateSlot(Ring::Major, 12)).is_err());
  }

  #[test]
  fn key_summary_tracks_selection() {
    let mut app = CircleOfFifths::new();
    app.select_key_named("Eb").unwrap();
    let summary = app.key_summary();
    assert_eq!(summary.display_name, "E♭");
    assert_eq!(summary.relative_minor, "Cm");
    assert_eq!(summary.signature.to_string(), "3 Flats");
  }
}
