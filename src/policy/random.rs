use crate::core::{GameRng, PitId};
use crate::game::Session;

use super::MovePolicy;

/// Picks uniformly among legal moves.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("moves"),
        }
    }
}

impl MovePolicy for UniformRandom {
    fn choose_move(&mut self, session: &Session) -> Option<PitId> {
        session.random_move(&mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_moves() {
        let mut session = Session::new_game(36, 6).unwrap();
        session.initial_place().unwrap();
        let mut policy = UniformRandom::new(3);

        for _ in 0..20 {
            let legal = session.legal_moves();
            let pit = policy.choose_move(&session).unwrap();
            assert!(legal.contains(&pit), "{} is not legal", pit);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut session = Session::new_game(36, 6).unwrap();
        session.initial_place().unwrap();

        let mut a = UniformRandom::new(77);
        let mut b = UniformRandom::new(77);
        for _ in 0..10 {
            let pit = a.choose_move(&session).unwrap();
            assert_eq!(Some(pit), b.choose_move(&session));
            session.play(pit).unwrap();
            if session.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_no_move_when_over() {
        let session = Session::new_game(36, 6).unwrap();
        assert_eq!(UniformRandom::new(0).choose_move(&session), None);
    }
}
