//! Game session: the single entry point for play.
//!
//! ## Usage
//!
//! ```
//! use bao_engine::core::{PitId, Player};
//! use bao_engine::game::Session;
//!
//! let mut session = Session::new_game(36, 6).unwrap();
//! assert!(session.is_game_over()); // nothing dealt yet
//!
//! session.initial_place().unwrap();
//! let outcome = session.play(PitId(1)).unwrap();
//!
//! assert!(!outcome.game_over);
//! assert_eq!(outcome.current_player, Player::Two);
//! assert_eq!(session.board().total_count(), 36);
//! ```
//!
//! `play` runs a whole move. The same move can be driven one phase at a
//! time with `sow`, `perform_captures` and `handle_endgame`; a second sow
//! is refused until the first one's captures are resolved.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::{Board, Stone, Tint};
use crate::core::{
    ConfigError, GameConfig, GameRng, IntegrityError, InvalidMove, PitId, PlayError, Player, Score,
};
use crate::rules::{capture, endgame, next_to_move, sowing, Capture, Sow, Sweep, TurnPhase};

/// Result of one accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub game_over: bool,
    /// Player to move next (the sweeping player once the game is over).
    pub current_player: Player,
    /// Every stone with its new placement, for renderers to animate.
    pub stones: Vec<Stone>,
    pub sow: Sow,
    pub capture: Option<Capture>,
    pub sweep: Option<Sweep>,
}

impl PlayOutcome {
    /// True if the mover keeps the turn.
    #[must_use]
    pub fn extra_turn(&self, mover: Player) -> bool {
        !self.game_over && self.current_player == mover
    }
}

/// One game of bao.
///
/// Cloning is cheap enough for playouts: the move record is a persistent
/// vector and the board is a few hundred bytes.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    phase: TurnPhase,
    rng: GameRng,
    moves: Vector<PitId>,
}

impl Session {
    /// Create a session with nothing dealt. It reports game over until
    /// `initial_place` runs.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let board = Board::new(&config)?;
        let rng = GameRng::new(config.seed).for_context("slots");
        Ok(Self {
            board,
            phase: TurnPhase::GameOver(Player::One),
            rng,
            moves: Vector::new(),
            config,
        })
    }

    /// Create a session with default geometry and seed.
    pub fn new_game(n_stones: usize, n_pits: usize) -> Result<Self, ConfigError> {
        Self::new(GameConfig::new(n_stones, n_pits))
    }

    // === Setup ===

    /// Deal every stone round-robin into the sowable pits.
    ///
    /// Does nothing and returns `false` while a game is in progress.
    /// Otherwise clears the board, deals, colours each stone after the
    /// owner of the pit it lands in, hands the first move to player one,
    /// and clears the move record.
    #[instrument(skip(self))]
    pub fn initial_place(&mut self) -> Result<bool, IntegrityError> {
        if !self.phase.is_game_over() {
            debug!("game in progress, not dealing");
            return Ok(false);
        }

        self.board.pickup_all()?;
        let stones = self.board.unplaced();
        let ring_len = self.board.ring_len();
        let mut pit = PitId(0);

        for &stone in &stones {
            if self.board.pit(pit).is_some_and(|p| p.is_target()) {
                pit = pit.next(ring_len);
            }
            self.board.add(pit, stone, &mut self.rng)?;
            let owner = self.board.pit(pit).map(|p| p.owner());
            if let (Some(owner), Some(s)) = (owner, self.board.stone_mut(stone)) {
                s.set_tint(Tint::Player(owner));
            }
            pit = pit.next(ring_len);
        }

        self.phase = TurnPhase::PlayerTurn(Player::One);
        self.moves.clear();
        debug!(stones = stones.len(), "dealt");
        Ok(true)
    }

    // === Play ===

    /// Play one move: sow `pit`, resolve captures, pass the turn, and check
    /// for the end of the game.
    ///
    /// A rejected move returns `PlayError::Invalid` and leaves the session
    /// unchanged.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play(&mut self, pit: PitId) -> Result<PlayOutcome, PlayError> {
        let sow = self.sow(pit)?;
        let capture = self.perform_captures()?;
        let sweep = self.handle_endgame()?;

        Ok(PlayOutcome {
            game_over: self.is_game_over(),
            current_player: self.current_player(),
            stones: self.board.stones().to_vec(),
            sow,
            capture,
            sweep,
        })
    }

    /// Sow `pit` for the current player, leaving captures pending.
    pub fn sow(&mut self, pit: PitId) -> Result<Sow, PlayError> {
        let result = self.try_sow(pit);
        if let Err(PlayError::Invalid(reason)) = &result {
            warn!(%pit, %reason, "move rejected");
        }
        result
    }

    fn try_sow(&mut self, pit: PitId) -> Result<Sow, PlayError> {
        if !self.board.contains(pit) {
            return Err(InvalidMove::NoSuchPit {
                pit,
                ring_len: self.board.ring_len(),
            }
            .into());
        }

        let mover = match self.phase {
            TurnPhase::GameOver(_) => return Err(InvalidMove::GameOver.into()),
            TurnPhase::PlayerTurn(player) | TurnPhase::EndgameCheck(player) => player,
            TurnPhase::CaptureResolution { mover, last_pit } => {
                sowing::validate(&self.board, mover, pit)?;
                return Err(InvalidMove::CapturePending { last_pit }.into());
            }
        };

        if let TurnPhase::EndgameCheck(_) = self.phase {
            // The previous move has not been checked for an ending yet.
            if endgame::is_exhausted(&self.board, mover) {
                return Err(InvalidMove::GameOver.into());
            }
        }

        let sow = sowing::sow(&mut self.board, mover, pit, &mut self.rng)?;
        self.moves.push_back(pit);
        self.phase = TurnPhase::CaptureResolution {
            mover,
            last_pit: sow.last_pit,
        };
        Ok(sow)
    }

    /// Resolve captures for the pending sow and pass the turn.
    ///
    /// Landing in the mover's own target skips the capture check and keeps
    /// the turn. Returns `Ok(None)` with no effect if no sow is pending.
    pub fn perform_captures(&mut self) -> Result<Option<Capture>, PlayError> {
        let TurnPhase::CaptureResolution { mover, last_pit } = self.phase else {
            return Ok(None);
        };

        let own_target = self.board.is_target_of(last_pit, mover);
        let capture = if own_target {
            None
        } else {
            capture::resolve(&mut self.board, mover, last_pit, &mut self.rng)?
        };

        let to_move = next_to_move(mover, own_target);
        debug!(%mover, %to_move, extra_turn = own_target, "turn passed");
        self.phase = TurnPhase::EndgameCheck(to_move);
        Ok(capture)
    }

    /// End the game if the player to move has nothing to sow.
    ///
    /// Refused while captures are pending. A no-op once the game is over.
    pub fn handle_endgame(&mut self) -> Result<Option<Sweep>, PlayError> {
        let to_move = match self.phase {
            TurnPhase::GameOver(_) => return Ok(None),
            TurnPhase::CaptureResolution { last_pit, .. } => {
                return Err(InvalidMove::CapturePending { last_pit }.into())
            }
            TurnPhase::PlayerTurn(player) | TurnPhase::EndgameCheck(player) => player,
        };

        match endgame::check(&mut self.board, to_move, &mut self.rng)? {
            Some(sweep) => {
                self.phase = TurnPhase::GameOver(sweep.player);
                Ok(Some(sweep))
            }
            None => {
                self.phase = TurnPhase::PlayerTurn(to_move);
                Ok(None)
            }
        }
    }

    // === Queries ===

    /// Pits the current player may sow, in ring order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<PitId> {
        match self.phase {
            TurnPhase::PlayerTurn(player) | TurnPhase::EndgameCheck(player) => self
                .board
                .sowable_pits(player)
                .filter(|p| !p.is_empty())
                .map(|p| p.id())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// A uniformly random legal move, or `None` if there is none.
    #[must_use]
    pub fn random_move(&self, rng: &mut GameRng) -> Option<PitId> {
        rng.choose(&self.legal_moves()).copied()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.phase.current_player()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    /// False between `sow` and `perform_captures`.
    #[must_use]
    pub fn captures_done(&self) -> bool {
        self.phase.captures_done()
    }

    /// Landing pit of the sow whose captures are pending.
    #[must_use]
    pub fn last_pit(&self) -> Option<PitId> {
        self.phase.last_pit()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All stones in id order.
    #[must_use]
    pub fn stones(&self) -> &[Stone] {
        self.board.stones()
    }

    #[must_use]
    pub fn n_stones(&self) -> usize {
        self.board.n_stones()
    }

    /// Moves accepted since the deal, in order.
    #[must_use]
    pub fn moves(&self) -> &Vector<PitId> {
        &self.moves
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(
            f,
            "Next: {} \tGame State: {}\t Captures done: {}\t Last pit: {}",
            self.current_player(),
            if self.is_game_over() { "Game Over" } else { "Playing" },
            self.captures_done(),
            self.last_pit().map_or_else(|| "None".to_string(), |p| p.0.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt() -> Session {
        let mut session = Session::new_game(36, 6).unwrap();
        assert!(session.initial_place().unwrap());
        session
    }

    #[test]
    fn test_new_session_is_over_until_dealt() {
        let mut session = Session::new_game(36, 6).unwrap();

        assert!(session.is_game_over());
        assert_eq!(session.board().ring_len(), 14);
        assert_eq!(session.board().total_count(), 0);
        assert_eq!(session.play(PitId(0)), Err(InvalidMove::GameOver.into()));
    }

    #[test]
    fn test_initial_place_deals_round_robin() {
        let session = dealt();

        assert!(!session.is_game_over());
        assert_eq!(session.current_player(), Player::One);
        for pit in session.board().pits() {
            let expected = if pit.is_target() { 0 } else { 3 };
            assert_eq!(pit.count(), expected, "{}", pit);
        }
        for stone in session.stones() {
            let owner = session.board().pit(stone.pit().unwrap()).unwrap().owner();
            assert_eq!(stone.tint(), Tint::Player(owner));
        }
        session.board().check_consistency().unwrap();
    }

    #[test]
    fn test_initial_place_uneven_deal() {
        let mut session = Session::new_game(14, 6).unwrap();
        session.initial_place().unwrap();

        // 12 sowable pits: pits 0 and 1 get a second stone
        assert_eq!(session.board().count(PitId(0)), 2);
        assert_eq!(session.board().count(PitId(1)), 2);
        assert_eq!(session.board().count(PitId(2)), 1);
        assert_eq!(session.board().count(PitId(6)), 0);
    }

    #[test]
    fn test_initial_place_is_noop_mid_game() {
        let mut session = dealt();
        session.play(PitId(1)).unwrap();
        let before = session.board().count(PitId(1));

        assert!(!session.initial_place().unwrap());
        assert_eq!(session.board().count(PitId(1)), before);
        assert_eq!(session.moves().len(), 1);
    }

    #[test]
    fn test_first_move() {
        let mut session = dealt();

        let outcome = session.play(PitId(1)).unwrap();

        assert_eq!(outcome.sow.last_pit, PitId(4));
        assert_eq!(outcome.capture, None);
        assert_eq!(outcome.current_player, Player::Two);
        assert!(!outcome.extra_turn(Player::One));
        assert_eq!(outcome.stones.len(), 36);
        assert_eq!(session.board().count(PitId(1)), 0);
        assert_eq!(session.board().count(PitId(2)), 4);
        assert_eq!(session.moves().iter().copied().collect::<Vec<_>>(), vec![PitId(1)]);
    }

    #[test]
    fn test_extra_turn_in_own_target() {
        let mut session = dealt();

        // Pit 3 holds 3 stones: 4, 5, 6 (target)
        let outcome = session.play(PitId(3)).unwrap();

        assert_eq!(outcome.sow.last_pit, PitId(6));
        assert_eq!(outcome.current_player, Player::One);
        assert!(outcome.extra_turn(Player::One));
        assert_eq!(session.score(), Score::new(1, 0));
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut session = dealt();

        let cases = [
            (PitId(9), InvalidMove::NotYourPit {
                pit: PitId(9),
                owner: Player::Two,
                current: Player::One,
            }),
            // Targets start empty, so emptiness is reported first
            (PitId(6), InvalidMove::EmptyPit(PitId(6))),
            (PitId(40), InvalidMove::NoSuchPit {
                pit: PitId(40),
                ring_len: 14,
            }),
        ];
        for (pit, expected) in cases {
            assert_eq!(session.play(pit), Err(PlayError::Invalid(expected)));
        }

        session.play(PitId(1)).unwrap();
        session.play(PitId(9)).unwrap();
        assert_eq!(session.play(PitId(1)), Err(InvalidMove::EmptyPit(PitId(1)).into()));
        assert_eq!(session.moves().len(), 2);
        assert_eq!(session.board().total_count(), 36);
    }

    #[test]
    fn test_target_pit_rejected_once_filled() {
        let mut session = dealt();

        // 3 -> 4, 5, 6: one stone in the target and player one moves again
        session.play(PitId(3)).unwrap();
        assert_eq!(session.board().count(PitId(6)), 1);

        assert_eq!(session.play(PitId(6)), Err(InvalidMove::TargetPit(PitId(6)).into()));
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().count(PitId(6)), 1);
        assert_eq!(session.moves().len(), 1);
        assert_eq!(session.phase(), TurnPhase::PlayerTurn(Player::One));
    }

    #[test]
    fn test_split_phase_blocks_resow() {
        let mut session = dealt();

        let sow = session.sow(PitId(0)).unwrap();
        assert!(!session.captures_done());
        assert_eq!(session.last_pit(), Some(sow.last_pit));

        assert_eq!(
            session.sow(PitId(2)),
            Err(InvalidMove::CapturePending { last_pit: sow.last_pit }.into())
        );
        assert_eq!(
            session.handle_endgame(),
            Err(InvalidMove::CapturePending { last_pit: sow.last_pit }.into())
        );

        session.perform_captures().unwrap();
        assert!(session.captures_done());
        assert_eq!(session.last_pit(), None);
        assert_eq!(session.handle_endgame().unwrap(), None);
        assert_eq!(session.phase(), TurnPhase::PlayerTurn(Player::Two));

        // Nothing pending: a second resolution is a no-op
        assert_eq!(session.perform_captures().unwrap(), None);
    }

    #[test]
    fn test_capture_through_play() {
        let mut session = dealt();

        // 3 -> 4, 5, 6: extra turn. Then 0 -> 1, 2, 3 lands alone in 3,
        // facing pit 9.
        session.play(PitId(3)).unwrap();
        let outcome = session.play(PitId(0)).unwrap();

        assert_eq!(
            outcome.capture,
            Some(Capture {
                pit: PitId(3),
                opposite: PitId(9),
                stones: 4,
            })
        );
        assert_eq!(outcome.current_player, Player::Two);
        assert_eq!(session.score(), Score::new(5, 0));
        assert_eq!(session.board().count(PitId(9)), 0);
        assert_eq!(session.board().total_count(), 36);
        session.board().check_consistency().unwrap();
    }

    #[test]
    fn test_display() {
        let session = dealt();
        let text = format!("{}", session);
        assert!(text.contains("Next: Player 1"));
        assert!(text.contains("Game State: Playing"));
        assert!(text.contains("Last pit: None"));
    }
}
