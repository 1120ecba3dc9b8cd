//! Player identification and per-player scores.
//!
//! ## Player
//!
//! The game always has exactly two players. Turn order is a pure toggle
//! (`Player::other`); there is no alternator state to carry around.
//!
//! ## Score
//!
//! Stone counts in each player's target pit, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One of the two players.
///
/// Player one owns the first half of the ring and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player.
    ///
    /// ```
    /// use bao_engine::core::Player;
    ///
    /// assert_eq!(Player::One.other(), Player::Two);
    /// assert_eq!(Player::Two.other(), Player::One);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Conventional player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Stones in each player's target pit.
///
/// Serializes as a `[p1, p2]` pair, the layout used by test-vector files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Score {
    pub p1: usize,
    pub p2: usize,
}

impl Score {
    #[must_use]
    pub const fn new(p1: usize, p2: usize) -> Self {
        Self { p1, p2 }
    }

    /// Sum of both players' scores.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.p1 + self.p2
    }

    /// The player with more stones, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        match self.p1.cmp(&self.p2) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl From<[usize; 2]> for Score {
    fn from([p1, p2]: [usize; 2]) -> Self {
        Self { p1, p2 }
    }
}

impl From<Score> for [usize; 2] {
    fn from(score: Score) -> Self {
        [score.p1, score.p2]
    }
}

impl Index<Player> for Score {
    type Output = usize;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::One => &self.p1,
            Player::Two => &self.p2,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.p1, self.p2)
    }
}
