//! Board model: stones, pits and the ring.
//!
//! ## Key Types
//!
//! - `Stone`: identity plus optional `(pit, slot)` placement
//! - `Pit`: slot grid with disabled corners; stacking allowed
//! - `Board`: the ring of pits, the stone list and the target lookup
//!
//! Placement is bidirectional. A stone names its slot and the slot lists
//! the stone; `Board::check_consistency` verifies both directions.

pub mod stone;
pub mod pit;
pub mod ring;

pub use stone::{Placement, Stone, Tint};
pub use pit::{Pit, SlotStack};
pub use ring::Board;
