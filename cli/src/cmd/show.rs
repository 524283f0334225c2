use std::path::Path;

use error_stack::{IntoReport, Report, ResultExt};
use fifths_core::circle::{Ring, SlotView};
use fifths_core::diatonic::DiatonicChordSource;
use fifths_core::harmony::{spell, Chord};
use fifths_core::info::{pretty_symbol, KeySummary};
use fifths_core::CircleOfFifths;
use serde::Serialize;

use crate::chords::IniChordTable;
use crate::error::CliError;

#[derive(Serialize)]
struct ShowOutput<'a> {
  summary: KeySummary,
  diatonic_chords: Vec<DiatonicEntry<'a>>,
  slots: Vec<SlotView>,
}

#[derive(Serialize)]
struct DiatonicEntry<'a> {
  numeral: &'a str,
  chord: Chord,
}

pub fn run_show(key: &str, chords: Option<&Path>, json: bool) -> Result<(), Report<CliError>> {
  match chords {
    Some(path) => {
      let table = IniChordTable::load(path).change_context(CliError::Circle)?;
      show(CircleOfFifths::with_source(table), key, json)
    }
    None => show(CircleOfFifths::new(), key, json),
  }
}

fn show<S: DiatonicChordSource>(
  mut app: CircleOfFifths<S>,
  key: &str,
  json: bool,
) -> Result<(), Report<CliError>> {
  app.select_key_named(key).change_context(CliError::Circle)?;

  let diatonic_chords: Vec<DiatonicEntry> = app
    .diatonic_chords()
    .iter()
    .map(|c| DiatonicEntry {
      numeral: &c.numeral,
      chord: spell(&c.symbol, app.key_name()),
    })
    .collect();
  let slots: Vec<SlotView> = app
    .slot_views()
    .into_iter()
    .filter(|v| v.ring.is_chord_ring())
    .collect();
  let output = ShowOutput {
    summary: app.key_summary(),
    diatonic_chords,
    slots,
  };

  if json {
    let text = serde_json::to_string_pretty(&output)
      .into_report()
      .change_context(CliError::Output)?;
    println!("{text}");
  } else {
    print_text(&output);
  }
  Ok(())
}

fn print_text(output: &ShowOutput) {
  let summary = &output.summary;
  println!("{} {}", summary.display_name, summary.mode);
  println!("{} is the relative minor", pretty_symbol(summary.relative_minor));
  println!("{}", summary.signature);

  println!();
  println!("Diatonic Chords");
  for entry in &output.diatonic_chords {
    println!(
      "  {:<5} {:<5} {}",
      entry.numeral,
      pretty_symbol(&entry.chord.symbol),
      entry.chord.notes.join(" ")
    );
  }

  println!();
  for ring in [Ring::Major, Ring::Minor, Ring::Diminished] {
    let cells: Vec<String> = output
      .slots
      .iter()
      .filter(|v| v.ring == ring)
      .map(|v| {
        let marker = if v.is_diatonic { "*" } else { "" };
        format!("{}{}", pretty_symbol(&v.symbol), marker)
      })
      .collect();
    println!("{:<11} {}", ring.to_string(), cells.join(" "));
  }
}
