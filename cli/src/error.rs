use error_stack::Context;
use std::fmt::Display;

#[derive(Debug)]
pub enum CliError {
  /// The circle engine rejected an argument.
  Circle,

  /// Writing the result to stdout failed.
  Output,
}

impl Context for CliError {}

impl Display for CliError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use CliError::*;
    match self {
      Circle => write!(f, "invalid input for the circle of fifths"),
      Output => write!(f, "failed to write output"),
    }
  }
}
