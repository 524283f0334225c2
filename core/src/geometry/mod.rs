use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Just a typedef for the floating point type used for coordinates, angles, etc.
/// This only exists to make it a bit easier to change to f32 if that's ever
/// needed.
pub type Float = f64;

/// A point in the coordinate space of the pointer events fed to the diagram.
/// Screen coordinates are assumed, so `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: Float,
  pub y: Float,
}

impl Point {
  pub fn new(x: Float, y: Float) -> Point {
    Point { x, y }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Angle {
  Degrees(Float),
  Radians(Float),
}

impl Angle {
  pub fn as_degrees(&self) -> Float {
    match self {
      Angle::Degrees(d) => *d,
      Angle::Radians(r) => r.to_degrees(),
    }
  }

  pub fn as_radians(&self) -> Float {
    match self {
      Angle::Degrees(d) => d.to_radians(),
      Angle::Radians(r) => *r,
    }
  }
}

/// The angular width of one of the twelve slots on the circle (30°).
pub const SLOT_ARC: Angle = Angle::Radians(PI / 6.0);

/// Returns the rotation of the slot at the given absolute position, measured
/// clockwise from twelve o'clock.
pub fn slot_rotation(position: usize) -> Angle {
  Angle::Degrees(30.0 * (position as Float))
}

/// Signed angle (in radians, `-π ..= π`) of `p` as seen from `center`.
pub fn angle_from(center: Point, p: Point) -> Float {
  (p.y - center.y).atan2(p.x - center.x)
}

/// Folds the difference between two `atan2` results back into `-π ..= π`,
/// so that crossing the ±π seam reads as a small step instead of a full turn.
pub fn normalize_delta(delta: Float) -> Float {
  if delta > PI {
    delta - 2.0 * PI
  } else if delta < -PI {
    delta + 2.0 * PI
  } else {
    delta
  }
}
