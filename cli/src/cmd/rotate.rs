use error_stack::{Report, ResultExt};
use fifths_core::CircleOfFifths;
use log::debug;

use crate::error::CliError;

pub fn run_rotate(steps: i32, key: &str) -> Result<(), Report<CliError>> {
  let mut app = CircleOfFifths::new();
  app.select_key_named(key).change_context(CliError::Circle)?;

  for _ in 0..rotation_steps(steps) {
    app.rotate_right();
  }
  debug!("rotated {steps} step(s) from {key}");

  let summary = app.key_summary();
  println!("{} {} ({})", summary.display_name, summary.mode, summary.signature);
  Ok(())
}

/// Clockwise steps equivalent to `steps`, so a huge count still takes at most
/// eleven turns.
fn rotation_steps(steps: i32) -> i32 {
  steps.rem_euclid(12)
}

#[cfg(test)]
mod tests {
  use super::rotation_steps;

  #[test]
  fn steps_wrap_to_one_turn() {
    assert_eq!(rotation_steps(3), 3);
    assert_eq!(rotation_steps(-1), 11);
    assert_eq!(rotation_steps(24), 0);
    assert_eq!(rotation_steps(i32::MIN), 4);
    assert_eq!(rotation_steps(i32::MAX), 7);
  }
}
