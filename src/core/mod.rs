//! Core engine types: identifiers, players, RNG, configuration, errors.
//!
//! Everything here is independent of the board model and the rules.

pub mod ids;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{PitId, SlotId, StoneId};
pub use player::{Player, Score};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, IntegrityError, InvalidMove, PlayError, ReplayError};
