//! Recorded games: replay, random self-play, and test-vector files.
//!
//! A test vector is a move list with the score it produced, stored in JSON
//! as `[[moves...], [p1, p2]]`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{GameConfig, PitId, ReplayError, Score};
use crate::policy::{MovePolicy, UniformRandom};

use super::Session;

/// Moves a random game may take before it is declared runaway.
pub const MOVE_LIMIT: usize = 10_000;

/// A move list and the score it should produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Vec<PitId>, Score)", into = "(Vec<PitId>, Score)")]
pub struct TestVector {
    pub moves: Vec<PitId>,
    pub score: Score,
}

impl From<(Vec<PitId>, Score)> for TestVector {
    fn from((moves, score): (Vec<PitId>, Score)) -> Self {
        Self { moves, score }
    }
}

impl From<TestVector> for (Vec<PitId>, Score) {
    fn from(tv: TestVector) -> Self {
        (tv.moves, tv.score)
    }
}

/// Deal a fresh game and play `moves` in order.
///
/// Moves the rules reject are skipped, so recordings made against an
/// older rule set still replay. Integrity failures abort.
pub fn play_game(config: GameConfig, moves: &[PitId]) -> Result<Session, ReplayError> {
    let mut session = Session::new(config)?;
    session.initial_place()?;

    for &pit in moves {
        match session.play(pit) {
            Ok(_) => {}
            Err(e) if e.is_rejection() => debug!(%pit, "skipping rejected move"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(session)
}

/// Deal a fresh game and let `policy` play both sides to the end.
#[instrument(skip(config, policy), fields(policy = policy.name()))]
pub fn random_game(config: GameConfig, policy: &mut dyn MovePolicy) -> Result<Session, ReplayError> {
    let mut session = Session::new(config)?;
    session.initial_place()?;
    continue_game(&mut session, policy)?;
    Ok(session)
}

/// Play `session` to the end with `policy`.
pub fn continue_game(session: &mut Session, policy: &mut dyn MovePolicy) -> Result<(), ReplayError> {
    while !session.is_game_over() {
        if session.moves().len() >= MOVE_LIMIT {
            return Err(ReplayError::MoveLimit { limit: MOVE_LIMIT });
        }
        let pit = policy.choose_move(session).ok_or(ReplayError::Stuck {
            player: session.current_player(),
        })?;
        session.play(pit)?;
    }
    debug!(moves = session.moves().len(), score = %session.score(), "game finished");
    Ok(())
}

/// Consistency checks on a session: the board agrees with itself, and a
/// finished game has every stone in a target.
pub fn check_game(session: &Session) -> Result<(), ReplayError> {
    session.board().check_consistency()?;
    if session.is_game_over() {
        let score = session.score();
        if score.total() != session.n_stones() {
            return Err(ReplayError::Unbalanced {
                score,
                n_stones: session.n_stones(),
            });
        }
    }
    Ok(())
}

/// The test vector for a session's moves so far.
#[must_use]
pub fn record(session: &Session) -> TestVector {
    TestVector {
        moves: session.moves().iter().copied().collect(),
        score: session.score(),
    }
}

pub fn load_test_vectors(path: &Path) -> Result<Vec<TestVector>, ReplayError> {
    let file = File::open(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn save_test_vectors(path: &Path, vectors: &[TestVector]) -> Result<(), ReplayError> {
    let file = File::create(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer(BufWriter::new(file), vectors)?;
    Ok(())
}

/// Play `n` random games and write their move lists and scores to `path`.
///
/// Game `i` uses move seed `seed + i`.
pub fn generate_test_vectors(
    config: &GameConfig,
    n: usize,
    seed: u64,
    path: &Path,
) -> Result<Vec<TestVector>, ReplayError> {
    let mut vectors = Vec::with_capacity(n);
    for i in 0..n {
        let mut policy = UniformRandom::new(seed.wrapping_add(i as u64));
        let session = random_game(config.clone(), &mut policy)?;
        check_game(&session)?;
        vectors.push(record(&session));
    }
    save_test_vectors(path, &vectors)?;
    info!(count = n, path = %path.display(), "wrote test vectors");
    Ok(vectors)
}

/// Replay every vector in `path` and require the recorded score.
///
/// Returns the number of vectors checked.
pub fn verify_test_vectors(config: &GameConfig, path: &Path) -> Result<usize, ReplayError> {
    let vectors = load_test_vectors(path)?;
    for (index, tv) in vectors.iter().enumerate() {
        let session = play_game(config.clone(), &tv.moves)?;
        check_game(&session)?;
        let actual = session.score();
        if actual != tv.score {
            return Err(ReplayError::ScoreMismatch {
                index,
                expected: tv.score,
                actual,
                moves: tv.moves.clone(),
            });
        }
    }
    info!(count = vectors.len(), path = %path.display(), "test vectors verified");
    Ok(vectors.len())
}
