//! Error types.
//!
//! Two families matter during play:
//!
//! - `InvalidMove`: the caller asked for something the rules forbid.
//!   State is untouched and the caller may simply try another pit.
//! - `IntegrityError`: the board model contradicts itself. This is a
//!   defect in the engine, never a user error, and is never retried.

use std::path::PathBuf;

use super::ids::{PitId, SlotId, StoneId};
use super::player::{Player, Score};

/// A move rejected by the rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("pit {pit} is not on a ring of {ring_len} pits")]
    NoSuchPit { pit: PitId, ring_len: usize },

    #[error("the game is over")]
    GameOver,

    #[error("captures from the sow ending in {last_pit} have not been resolved")]
    CapturePending { last_pit: PitId },

    #[error("{pit} belongs to {owner}, but it is {current}'s turn")]
    NotYourPit { pit: PitId, owner: Player, current: Player },

    #[error("{0} has no stones")]
    EmptyPit(PitId),

    #[error("{0} is a target pit and cannot be sown")]
    TargetPit(PitId),
}

/// The board model violated one of its own invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("tried to add {stone} to {pit}, but it is already placed in {placed_in}")]
    AlreadyPlaced { stone: StoneId, pit: PitId, placed_in: PitId },

    #[error("{stone} was found in {pit} but records {recorded:?}")]
    MisplacedStone { stone: StoneId, pit: PitId, recorded: Option<PitId> },

    #[error("pickup left {residual} stones behind in {pit}")]
    ResidualStones { pit: PitId, residual: usize },

    #[error("{pit} has no enabled slots")]
    NoEnabledSlots { pit: PitId },

    #[error("{stone} is not part of this game")]
    UnknownStone { stone: StoneId },

    #[error("{slot} of {pit} is disabled or out of range")]
    BadSlot { pit: PitId, slot: SlotId },
}

/// Any failure of a state-changing session call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("invalid move: {0}")]
    Invalid(#[from] InvalidMove),

    #[error("board integrity violated: {0}")]
    Integrity(#[from] IntegrityError),
}

impl PlayError {
    /// True if the move was rejected and state is unchanged.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, PlayError::Invalid(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from replaying or persisting recorded games.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to access test vectors at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("game became inconsistent: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("policy chose an illegal move: {0}")]
    IllegalMove(InvalidMove),

    #[error("game {index}: replayed score {actual} != recorded {expected} for moves {moves:?}")]
    ScoreMismatch {
        index: usize,
        expected: Score,
        actual: Score,
        moves: Vec<PitId>,
    },

    #[error("finished game scored {score}, but {n_stones} stones are in play")]
    Unbalanced { score: Score, n_stones: usize },

    #[error("{player} has no legal move but the game is not over")]
    Stuck { player: Player },

    #[error("game did not finish within {limit} moves")]
    MoveLimit { limit: usize },
}

impl From<PlayError> for ReplayError {
    fn from(err: PlayError) -> Self {
        match err {
            PlayError::Invalid(invalid) => ReplayError::IllegalMove(invalid),
            PlayError::Integrity(integrity) => ReplayError::Integrity(integrity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove::NotYourPit {
            pit: PitId(9),
            owner: Player::Two,
            current: Player::One,
        };
        assert_eq!(err.to_string(), "Pit(9) belongs to Player 2, but it is Player 1's turn");
        assert_eq!(InvalidMove::EmptyPit(PitId(2)).to_string(), "Pit(2) has no stones");
    }

    #[test]
    fn test_play_error_classification() {
        let rejected: PlayError = InvalidMove::TargetPit(PitId(6)).into();
        assert!(rejected.is_rejection());

        let broken: PlayError = IntegrityError::ResidualStones { pit: PitId(1), residual: 2 }.into();
        assert!(!broken.is_rejection());
        assert_eq!(
            broken.to_string(),
            "board integrity violated: pickup left 2 stones behind in Pit(1)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("n_pits must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: n_pits must be > 0");
    }

    #[test]
    fn test_score_mismatch_display() {
        let err = ReplayError::ScoreMismatch {
            index: 0,
            expected: Score::new(20, 16),
            actual: Score::new(19, 17),
            moves: vec![PitId(1), PitId(9)],
        };
        assert_eq!(
            err.to_string(),
            "game 0: replayed score [19, 17] != recorded [20, 16] for moves [PitId(1), PitId(9)]"
        );
    }
}
