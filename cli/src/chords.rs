//! Loads a replacement diatonic chord table from an INI file.
//!
//! Each section names a key and lists its chords as `numeral = symbol` in
//! degree order:
//!
//! ```text
//! [Eb]
//! I = Eb
//! ii = Fm
//! ...
//! ```

use std::collections::HashMap;
use std::path::Path;

use error_stack::{bail, IntoReport, Report, ResultExt};
use fifths_core::circle::Ring;
use fifths_core::diatonic::{DiatonicChord, DiatonicChordSource};
use fifths_core::CircleError;
use ini::Ini;
use log::debug;

pub struct IniChordTable {
  keys: HashMap<String, Vec<DiatonicChord>>,
}

impl IniChordTable {
  pub fn load(path: &Path) -> Result<IniChordTable, Report<CircleError>> {
    let ini = Ini::load_from_file(path)
      .into_report()
      .change_context(CircleError::InvalidChordTable(format!(
        "unable to read {}",
        path.display()
      )))?;

    let table = IniChordTable::from_ini(&ini).attach_printable(format!("in {}", path.display()))?;
    debug!("loaded diatonic chords for {} keys from {}", table.keys.len(), path.display());
    Ok(table)
  }

  pub fn load_from_str(s: &str) -> Result<IniChordTable, Report<CircleError>> {
    let ini = Ini::load_from_str(s)
      .into_report()
      .change_context(CircleError::InvalidChordTable("malformed ini".to_string()))?;
    IniChordTable::from_ini(&ini)
  }

  fn from_ini(ini: &Ini) -> Result<IniChordTable, Report<CircleError>> {
    let mut keys = HashMap::new();

    for (section, props) in ini.iter() {
      let entries: Vec<(&str, &str)> = props.iter().collect();
      let key = match section {
        Some(key) => key,
        None if entries.is_empty() => continue,
        None => bail!(CircleError::InvalidChordTable(
          "chords listed outside of a key section".to_string()
        )),
      };

      if entries.is_empty() {
        bail!(CircleError::InvalidChordTable(format!("no chords listed for {key}")));
      }

      let chords = entries
        .into_iter()
        .map(|(numeral, symbol)| DiatonicChord::new(numeral, symbol, Ring::of_symbol(symbol)))
        .collect();
      keys.insert(key.to_string(), chords);
    }

    if keys.is_empty() {
      bail!(CircleError::InvalidChordTable("no keys defined".to_string()));
    }

    Ok(IniChordTable { keys })
  }
}

impl DiatonicChordSource for IniChordTable {
  fn diatonic_chords(&self, key: &str) -> Option<&[DiatonicChord]> {
    self.keys.get(key).map(Vec::as_slice)
  }
}
