use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircleError {
  /// A slot position outside of `0 ..= 11` was handed to the slot resolver.
  InvalidSlotPosition(usize),

  /// A raw pitch class index outside of `0 ..= 11`.
  InvalidPitchClass(u8),

  /// A note name whose letter isn't one of `A` through `G`.
  UnknownNote(String),

  /// A key name that doesn't match any major chord on the circle.
  UnknownKey(String),

  /// An externally supplied diatonic chord table couldn't be used.
  InvalidChordTable(String),
}

impl Context for CircleError {}

impl Display for CircleError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use CircleError::*;
    match self {
      InvalidSlotPosition(n) => write!(f, "invalid slot position {n}. Valid range is 0 ..= 11"),

      InvalidPitchClass(n) => write!(f, "invalid pitch class {n}. Valid range is 0 ..= 11"),

      UnknownNote(name) => write!(f, "unrecognized note name: {name:?}"),

      UnknownKey(name) => write!(f, "no major key named {name:?} on the circle"),

      InvalidChordTable(msg) => write!(f, "invalid diatonic chord table: {msg}"),
    }
  }
}
