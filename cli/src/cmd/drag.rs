use error_stack::{Report, ResultExt};
use fifths_core::geometry::Point;
use fifths_core::CircleOfFifths;

use crate::error::CliError;

pub fn run_drag(key: &str, points: &[Point]) -> Result<(), Report<CliError>> {
  let mut app = CircleOfFifths::new();
  app.select_key_named(key).change_context(CliError::Circle)?;

  let (first, moves) = match points.split_first() {
    Some(split) => split,
    None => return Ok(()),
  };

  app.on_pointer_down(*first);
  println!("down at ({}, {}) in {}", first.x, first.y, app.key_name());
  for p in moves {
    let before = app.key_name();
    if app.on_pointer_move(*p) {
      println!("move to ({}, {}): {} -> {}", p.x, p.y, before, app.key_name());
    } else {
      println!("move to ({}, {})", p.x, p.y);
    }
  }
  app.on_pointer_up();

  println!("{}", app.key_summary().display_name);
  Ok(())
}
