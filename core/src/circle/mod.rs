//! The circular position model: which chord sits in which slot for the
//! selected key, and how that selection moves.

pub mod labels;
pub mod positions;
pub mod ring;
pub mod rotation;
pub mod slots;

pub use positions::{position_of_key, CirclePosition, KeySignature, CIRCLE_POSITIONS};
pub use ring::{all_positions, slot_position, Ring, SlotPosition, SLOT_COUNT};
pub use rotation::{RotationAction, RotationState};
pub use slots::{resolve_all, resolve_slot, SlotView};
