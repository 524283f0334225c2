use serde::Serialize;

use crate::circle::{CirclePosition, KeySignature};

/// Renders a flat root accidental as `♭`, e.g. `"Bbm"` becomes `"B♭m"`.
///
/// ```rust
/// use fifths_core::info::pretty_symbol;
///
/// assert_eq!(pretty_symbol("Eb"), "E♭");
/// assert_eq!(pretty_symbol("F#m"), "F#m");
/// ```
pub fn pretty_symbol(symbol: &str) -> String {
  let mut chars = symbol.chars();
  match (chars.next(), chars.next()) {
    (Some(root), Some('b')) => format!("{root}♭{}", chars.as_str()),
    _ => symbol.to_string(),
  }
}

/// What the side panel says about the selected key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySummary {
  pub key: &'static str,
  pub display_name: String,
  pub mode: &'static str,
  pub relative_minor: &'static str,
  pub signature: KeySignature,
}

impl KeySummary {
  pub fn of(position: &CirclePosition) -> KeySummary {
    KeySummary {
      key: position.major,
      display_name: pretty_symbol(position.major),
      mode: "Ionian",
      relative_minor: position.minor,
      signature: position.signature(),
    }
  }
}
