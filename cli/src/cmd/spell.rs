use error_stack::Report;
use fifths_core::harmony::spell;
use fifths_core::info::pretty_symbol;

use crate::error::CliError;

pub fn run_spell(chord: &str, key: &str) -> Result<(), Report<CliError>> {
  let spelled = spell(chord, key);
  if spelled.is_pitched() {
    println!("{}: {}", pretty_symbol(chord), spelled.notes.join(" "));
  } else {
    println!("{chord} is not a chord symbol");
  }
  Ok(())
}
