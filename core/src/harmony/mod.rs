//! The pitch and chord model behind the circle: pitch classes, note spelling
//! and seventh-chord construction.

pub mod chord;
pub mod pitch;

pub use chord::{spell, Chord, SeventhChord};
pub use pitch::{index_of, name_of, root_of, PitchClass, Spelling};
