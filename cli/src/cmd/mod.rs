mod drag;
mod rotate;
mod show;
mod spell;

use std::path::PathBuf;

use clap::Subcommand;
use error_stack::Report;
use fifths_core::geometry::Point;

use crate::error::CliError;

use self::{drag::run_drag, rotate::run_rotate, show::run_show, spell::run_spell};

#[derive(Subcommand)]
pub enum CliCommand {
  /// Describes a key: its signature, relative minor, diatonic chords and chord rings
  Show {
    /// Major key to describe, e.g. Eb
    #[clap(short, long, default_value = "C")]
    key: String,

    /// INI file to read the diatonic chord table from
    #[clap(long, value_parser)]
    chords: Option<PathBuf>,

    /// Print JSON instead of text
    #[clap(long)]
    json: bool,
  },

  /// Spells the seventh chord for a chord symbol
  Spell {
    /// Chord symbol, e.g. F#m or B°
    #[clap(value_parser)]
    chord: String,

    /// Major key whose sharps or flats are used
    #[clap(short, long, default_value = "C")]
    key: String,
  },

  /// Rotates the circle by a number of steps (positive is clockwise)
  Rotate {
    #[clap(value_parser, allow_hyphen_values = true)]
    steps: i32,

    /// Key to start from
    #[clap(short, long, default_value = "C")]
    key: String,
  },

  /// Simulates dragging the circle around (0,0) through a list of x,y points
  Drag {
    /// Key to start from
    #[clap(short, long, default_value = "C")]
    key: String,

    /// The first point is where the pointer goes down, the rest are moves
    #[clap(value_parser = parse_point, allow_hyphen_values = true, required = true)]
    points: Vec<Point>,
  },
}

impl CliCommand {
  pub fn run(&self) -> Result<(), Report<CliError>> {
    match self {
      Self::Show { key, chords, json } => run_show(key, chords.as_deref(), *json),

      Self::Spell { chord, key } => run_spell(chord, key),

      Self::Rotate { steps, key } => run_rotate(*steps, key),

      Self::Drag { key, points } => run_drag(key, points),
    }
  }
}

fn parse_point(s: &str) -> Result<Point, String> {
  let (x, y) = s
    .split_once(',')
    .ok_or_else(|| format!("expected a point like 10,-4 but got {s:?}"))?;
  let coord = |v: &str| {
    v.trim()
      .parse::<f64>()
      .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
  };
  Ok(Point::new(coord(x)?, coord(y)?))
}
