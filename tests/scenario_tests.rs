//! Recorded games and long-standing regressions.
//!
//! The move lists here were captured from real play and cover:
//! - A game where a pit's slots are all full and stones stack
//! - A game that ends while a pit is stacked
//! - A game that ends with stones left on the sweeping player's side

use std::path::Path;

use bao_engine::board::stone::make_stones;
use bao_engine::game::replay::{self, check_game, continue_game, play_game};
use bao_engine::{GameConfig, GameRng, Pit, PitId, Player, Score, UniformRandom};

const SCENARIO_A: [u16; 26] = [
    1, 9, 2, 0, 7, 3, 11, 0, 10, 1, 11, 4, 7, 5, 11, 8, 0, 7, 3, 11, 2, 5, 4, 9, 1, 11,
];
const SCENARIO_B: [u16; 36] = [
    2, 9, 0, 12, 0, 11, 0, 7, 2, 12, 9, 5, 9, 4, 7, 5, 1, 9, 2, 10, 0, 7, 2, 12, 4, 0, 11, 8, 2,
    10, 1, 9, 4, 11, 12, 1,
];
const SCENARIO_C: [u16; 37] = [
    4, 9, 2, 7, 1, 12, 3, 10, 5, 12, 10, 2, 8, 1, 12, 7, 2, 8, 4, 10, 0, 3, 7, 1, 9, 0, 10, 4, 1,
    12, 8, 3, 9, 4, 10, 5, 9,
];

fn pits(moves: &[u16]) -> Vec<PitId> {
    moves.iter().copied().map(PitId).collect()
}

/// Scenario A stops mid-game: player one still has stones to sow. Finishing
/// it with random play must still end balanced.
#[test]
fn test_scenario_full_pit_then_finish() {
    let mut session = play_game(GameConfig::default(), &pits(&SCENARIO_A)).unwrap();

    check_game(&session).unwrap();
    assert!(!session.is_game_over());
    assert_eq!(session.current_player(), Player::One);
    assert_eq!(session.score(), Score::new(8, 5));
    assert_eq!(session.board().total_count(), 36);

    let mut policy = UniformRandom::new(2024);
    continue_game(&mut session, &mut policy).unwrap();

    assert!(session.is_game_over());
    check_game(&session).unwrap();
    assert_eq!(session.score().total(), 36);
}

#[test]
fn test_scenario_ends_with_stacked_pit() {
    let session = play_game(GameConfig::default(), &pits(&SCENARIO_B)).unwrap();

    assert!(session.is_game_over());
    check_game(&session).unwrap();
    assert_eq!(session.score(), Score::new(25, 11));
    assert_eq!(session.current_player(), Player::One);
}

#[test]
fn test_scenario_ends_with_stones_on_board() {
    let session = play_game(GameConfig::default(), &pits(&SCENARIO_C)).unwrap();

    assert!(session.is_game_over());
    check_game(&session).unwrap();
    assert_eq!(session.score(), Score::new(8, 28));
    assert_eq!(session.current_player(), Player::Two);
    // Everything has been swept into the targets
    for pit in session.board().pits().iter().filter(|p| !p.is_target()) {
        assert!(pit.is_empty(), "{} still holds stones", pit);
    }
}

/// Slot choice is random but never changes the score.
#[test]
fn test_scenario_score_independent_of_slot_seed() {
    for seed in [0, 1, 99, 12345] {
        let config = GameConfig::default().with_seed(seed);
        let session = play_game(config, &pits(&SCENARIO_B)).unwrap();
        assert_eq!(session.score(), Score::new(25, 11), "seed {}", seed);
    }
}

#[test]
fn test_recorded_vectors_verify() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenarios.json");
    let count = replay::verify_test_vectors(&GameConfig::default(), &path).unwrap();
    assert_eq!(count, 3);
}

/// Lifting a pit must take every stone, including stacked ones, so that a
/// second fill and lift leaves nothing behind.
#[test]
fn test_pickup_readd_pickup_leaves_nothing() {
    let mut pit = Pit::sowable(PitId(1), Player::One, 4).unwrap();
    let mut stones = make_stones(16);
    let mut rng = GameRng::new(0);

    for stone in stones.iter_mut() {
        pit.add(stone, &mut rng).unwrap();
    }
    assert_eq!(pit.count(), 16);
    assert_eq!(pit.pickup(&mut stones).unwrap().len(), 16);

    for stone in stones.iter_mut() {
        pit.add(stone, &mut rng).unwrap();
    }
    pit.pickup(&mut stones).unwrap();

    assert_eq!(pit.count(), 0);
    assert!(stones.iter().all(|s| !s.is_placed()));
}

/// Landing in one's own target keeps the turn, and nothing else does.
#[test]
fn test_extra_turn_only_from_own_target() {
    for seed in 0..20 {
        let mut session = bao_engine::Session::new(GameConfig::default()).unwrap();
        session.initial_place().unwrap();
        let mut rng = GameRng::new(seed);

        while !session.is_game_over() {
            let mover = session.current_player();
            let pit = session.random_move(&mut rng).unwrap();
            let outcome = session.play(pit).unwrap();
            if outcome.game_over {
                break;
            }
            let landed_home = session.board().is_target_of(outcome.sow.last_pit, mover);
            assert_eq!(outcome.extra_turn(mover), landed_home, "seed {} pit {}", seed, pit);
            if landed_home {
                assert_eq!(outcome.capture, None);
            }
        }
    }
}
