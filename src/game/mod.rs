//! Playing games: the session state machine and recorded-game tooling.

mod session;
pub mod replay;

pub use session::{PlayOutcome, Session};
pub use replay::{
    check_game, continue_game, generate_test_vectors, play_game, random_game, verify_test_vectors,
    TestVector,
};
