//! # bao-engine
//!
//! Rule engine for a two-player sowing game in the mancala family.
//!
//! ## Design Principles
//!
//! 1. **Stones Are Entities**: Every stone has an id and a recorded slot in
//!    a pit. The board keeps both sides of that relation in agreement and
//!    reports any disagreement as an `IntegrityError`.
//!
//! 2. **Rejected Moves Change Nothing**: A move the rules refuse returns
//!    `InvalidMove` before any stone is lifted.
//!
//! 3. **Deterministic Given a Seed**: Slot placement and random play draw
//!    from seeded `GameRng` streams, so a seed and a move list reproduce a
//!    game exactly.
//!
//! ## Board
//!
//! `2N + 2` pits in a ring. Pits `0..N` are player one's, pit `N` is
//! player one's target; pits `N+1..2N+1` are player two's, pit `2N + 1`
//! is player two's target. Play runs in increasing pit order.
//!
//! ## Modules
//!
//! - `core`: Ids, players and scores, RNG, configuration, errors
//! - `board`: Stones, slotted pits, and the ring
//! - `rules`: Sowing, captures, turn passing, and the endgame sweep
//! - `game`: The `Session` state machine and recorded-game tooling
//! - `policy`: Move choosers for self-play

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    PitId, SlotId, StoneId,
    Player, Score,
    GameRng,
    GameConfig,
    ConfigError, IntegrityError, InvalidMove, PlayError, ReplayError,
};

pub use crate::board::{Board, Pit, Placement, Stone, Tint};

pub use crate::rules::{Capture, Sow, Sweep, TurnPhase};

pub use crate::game::{PlayOutcome, Session, TestVector};

pub use crate::policy::{Greedy, MovePolicy, UniformRandom};
