use crate::core::PitId;
use crate::game::Session;

use super::MovePolicy;

/// One-ply lookahead: picks the move that leaves the mover furthest ahead.
///
/// Ties go to an extra turn, then to the lowest pit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Greedy {
    fn evaluate(session: &Session, pit: PitId) -> Option<(i64, bool)> {
        let mover = session.current_player();
        let mut trial = session.clone();
        let outcome = trial.play(pit).ok()?;
        let score = trial.score();
        let margin = score[mover] as i64 - score[mover.other()] as i64;
        Some((margin, outcome.extra_turn(mover)))
    }
}

impl MovePolicy for Greedy {
    fn choose_move(&mut self, session: &Session) -> Option<PitId> {
        let mut best: Option<(PitId, (i64, bool))> = None;
        for pit in session.legal_moves() {
            let Some(value) = Self::evaluate(session, pit) else {
                continue;
            };
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((pit, value));
            }
        }
        best.map(|(pit, _)| pit)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
