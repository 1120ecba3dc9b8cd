//! The board: a ring of pits and the stones that move around it.
//!
//! ## Layout
//!
//! With `N` pits per player the ring has `2N + 2` pits:
//!
//! ```text
//!        0  1  2  3  4  5  6(T)         player 1 →
//! 13(T) 12 11 10  9  8  7               ← player 2
//! ```
//!
//! Indices `0..N` are player one's sowable pits and `N` is their target.
//! `N+1..=2N` belong to player two and `2N+1` is their target. Facing
//! pits always sum to `2N`, which is how `opposite` finds them.
//!
//! The board owns both the pits and the stones, so every move keeps the
//! two sides of a placement in step: a stone records `(pit, slot)` and that
//! slot lists the stone.

use rustc_hash::FxHashMap;

use super::pit::Pit;
use super::stone::{make_stones, Stone};
use crate::core::{ConfigError, GameConfig, GameRng, IntegrityError, PitId, Player, Score, SlotId, StoneId};

/// Ring of pits plus the stone list.
#[derive(Clone, Debug)]
pub struct Board {
    n_pits: usize,
    pits: Vec<Pit>,
    stones: Vec<Stone>,
    targets: FxHashMap<Player, PitId>,
}

impl Board {
    /// Build an empty ring and `config.n_stones` unplaced stones.
    ///
    /// Fails if the config does not pass `GameConfig::validate`.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let n = config.n_pits;
        let pits = (0..config.ring_len())
            .map(|i| {
                let id = PitId(i as u16);
                let owner = if i <= n { Player::One } else { Player::Two };
                if i % (n + 1) == n {
                    Pit::target(id, owner, config.grid, config.target_slots)
                } else {
                    Pit::sowable(id, owner, config.grid)
                }
            })
            .collect::<Result<Vec<Pit>, IntegrityError>>()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let targets = pits
            .iter()
            .filter(|p| p.is_target())
            .map(|p| (p.owner(), p.id()))
            .collect();

        Ok(Self {
            n_pits: n,
            pits,
            stones: make_stones(config.n_stones),
            targets,
        })
    }

    /// Sowable pits per player.
    #[must_use]
    pub fn n_pits(&self) -> usize {
        self.n_pits
    }

    /// Number of pits on the ring.
    #[must_use]
    pub fn ring_len(&self) -> usize {
        self.pits.len()
    }

    /// Number of stones in play.
    #[must_use]
    pub fn n_stones(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn contains(&self, pit: PitId) -> bool {
        pit.index() < self.pits.len()
    }

    /// Get a pit by id.
    #[must_use]
    pub fn pit(&self, pit: PitId) -> Option<&Pit> {
        self.pits.get(pit.index())
    }

    /// All pits in ring order.
    #[must_use]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    /// All stones in id order.
    #[must_use]
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    #[must_use]
    pub fn stone(&self, stone: StoneId) -> Option<&Stone> {
        self.stones.get(stone.index())
    }

    /// Target pit of a player.
    #[must_use]
    pub fn target(&self, player: Player) -> PitId {
        self.targets[&player]
    }

    /// The player → target pit lookup.
    #[must_use]
    pub fn targets(&self) -> &FxHashMap<Player, PitId> {
        &self.targets
    }

    /// True if `pit` is `player`'s target.
    #[must_use]
    pub fn is_target_of(&self, pit: PitId, player: Player) -> bool {
        self.target(player) == pit
    }

    /// Pit facing `pit` across the board, or `None` for targets.
    #[must_use]
    pub fn opposite(&self, pit: PitId) -> Option<PitId> {
        let p = self.pit(pit)?;
        if p.is_target() {
            return None;
        }
        Some(PitId((2 * self.n_pits() - pit.index()) as u16))
    }

    /// A player's sowable pits, in ring order.
    pub fn sowable_pits(&self, player: Player) -> impl Iterator<Item = &Pit> + '_ {
        self.pits
            .iter()
            .filter(move |p| p.owner() == player && !p.is_target())
    }

    /// Stones in one pit.
    ///
    /// Panics if `pit` is not on the ring.
    #[must_use]
    pub fn count(&self, pit: PitId) -> usize {
        self.pits[pit.index()].count()
    }

    /// Stones across a player's sowable pits.
    #[must_use]
    pub fn side_count(&self, player: Player) -> usize {
        self.sowable_pits(player).map(Pit::count).sum()
    }

    /// Stones across every pit.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.pits.iter().map(Pit::count).sum()
    }

    /// Candidate slots in `pit` (see `Pit::free_slots`).
    ///
    /// Panics if `pit` is not on the ring.
    #[must_use]
    pub fn free_slots(&self, pit: PitId, reuse: bool) -> Vec<SlotId> {
        self.pits[pit.index()].free_slots(reuse)
    }

    /// Stones in each target pit.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(
            self.count(self.target(Player::One)),
            self.count(self.target(Player::Two)),
        )
    }

    /// Place an unplaced stone into `pit`.
    ///
    /// Panics if `pit` is not on the ring.
    pub fn add(&mut self, pit: PitId, stone: StoneId, rng: &mut GameRng) -> Result<SlotId, IntegrityError> {
        let stone = self
            .stones
            .get_mut(stone.index())
            .ok_or(IntegrityError::UnknownStone { stone })?;
        self.pits[pit.index()].add(stone, rng)
    }

    /// Place several stones into `pit`, in the order given.
    pub fn add_all(&mut self, pit: PitId, stones: &[StoneId], rng: &mut GameRng) -> Result<(), IntegrityError> {
        for &stone in stones {
            self.add(pit, stone, rng)?;
        }
        Ok(())
    }

    /// Remove every stone from `pit`, returning their ids in ascending order.
    ///
    /// Panics if `pit` is not on the ring.
    pub fn pickup(&mut self, pit: PitId) -> Result<Vec<StoneId>, IntegrityError> {
        self.pits[pit.index()].pickup(&mut self.stones)
    }

    /// Empty every pit on the ring.
    pub fn pickup_all(&mut self) -> Result<(), IntegrityError> {
        for pit in &mut self.pits {
            pit.pickup(&mut self.stones)?;
        }
        Ok(())
    }

    /// Ids of stones that are not in any pit, in ascending order.
    #[must_use]
    pub fn unplaced(&self) -> Vec<StoneId> {
        self.stones
            .iter()
            .filter(|s| !s.is_placed())
            .map(Stone::id)
            .collect()
    }

    pub(crate) fn stone_mut(&mut self, stone: StoneId) -> Option<&mut Stone> {
        self.stones.get_mut(stone.index())
    }

    /// Check that every placement is mirrored exactly once on both sides.
    ///
    /// For each placed stone, its recorded slot must list it exactly once;
    /// every stone listed in a slot must record that slot; and no stone
    /// may appear in two slots.
    pub fn check_consistency(&self) -> Result<(), IntegrityError> {
        let mut seen = vec![false; self.stones.len()];

        for pit in &self.pits {
            let (rows, cols) = pit.dimensions();
            for slot in (0..rows * cols).map(|i| SlotId(i as u16)) {
                for &id in pit.stones_in(slot) {
                    let stone = self.stone(id).ok_or(IntegrityError::UnknownStone { stone: id })?;
                    let placement = stone.placement();
                    if placement.map(|p| (p.pit, p.slot)) != Some((pit.id(), slot)) || seen[id.index()] {
                        return Err(IntegrityError::MisplacedStone {
                            stone: id,
                            pit: pit.id(),
                            recorded: stone.pit(),
                        });
                    }
                    seen[id.index()] = true;
                }
            }
        }

        for stone in &self.stones {
            if let Some(pit) = stone.pit() {
                if !seen[stone.id().index()] {
                    return Err(IntegrityError::MisplacedStone {
                        stone: stone.id(),
                        pit,
                        recorded: Some(pit),
                    });
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\t\t")?;
        let n = self.n_pits();
        for pit in &self.pits[..=n] {
            write!(f, "{}\t", pit)?;
        }
        writeln!(f)?;
        for pit in self.pits[n + 1..].iter().rev() {
            write!(f, "{}\t", pit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_ring_layout() {
        let board = board();

        assert_eq!(board.n_pits(), 6);
        assert_eq!(board.ring_len(), 14);
        assert_eq!(board.target(Player::One), PitId(6));
        assert_eq!(board.target(Player::Two), PitId(13));
        assert_eq!(board.targets().len(), 2);

        for i in 0..=6u16 {
            assert_eq!(board.pit(PitId(i)).unwrap().owner(), Player::One);
        }
        for i in 7..=13u16 {
            assert_eq!(board.pit(PitId(i)).unwrap().owner(), Player::Two);
        }
        assert_eq!(board.sowable_pits(Player::One).count(), 6);
        assert_eq!(board.sowable_pits(Player::Two).count(), 6);
    }

    #[test]
    fn test_opposite_pits() {
        let board = board();

        assert_eq!(board.opposite(PitId(0)), Some(PitId(12)));
        assert_eq!(board.opposite(PitId(5)), Some(PitId(7)));
        assert_eq!(board.opposite(PitId(9)), Some(PitId(3)));
        assert_eq!(board.opposite(PitId(6)), None);
        assert_eq!(board.opposite(PitId(13)), None);
        assert_eq!(board.opposite(PitId(14)), None);
    }

    #[test]
    fn test_add_and_pickup_keep_consistency() {
        let mut board = board();
        let mut rng = GameRng::new(1);

        let all = board.unplaced();
        assert_eq!(all.len(), 36);

        board.add_all(PitId(2), &all[..10], &mut rng).unwrap();
        board.add_all(PitId(6), &all[10..], &mut rng).unwrap();
        board.check_consistency().unwrap();
        assert_eq!(board.count(PitId(2)), 10);
        assert_eq!(board.total_count(), 36);
        assert!(board.unplaced().is_empty());

        let lifted = board.pickup(PitId(2)).unwrap();
        assert_eq!(lifted, all[..10].to_vec());
        assert_eq!(board.unplaced(), lifted);
        board.check_consistency().unwrap();
    }

    #[test]
    fn test_add_unknown_stone() {
        let mut board = board();
        let mut rng = GameRng::new(1);

        let err = board.add(PitId(0), StoneId(99), &mut rng).unwrap_err();
        assert_eq!(err, IntegrityError::UnknownStone { stone: StoneId(99) });
    }

    #[test]
    fn test_consistency_detects_dangling_stone() {
        let mut board = board();
        board.stone_mut(StoneId(0)).unwrap().place(PitId(3), SlotId(5));

        assert!(board.check_consistency().is_err());
    }

    #[test]
    fn test_score_counts_targets() {
        let mut board = board();
        let mut rng = GameRng::new(1);

        board.add_all(PitId(6), &[StoneId(0), StoneId(1)], &mut rng).unwrap();
        board.add(PitId(13), StoneId(2), &mut rng).unwrap();
        board.add(PitId(4), StoneId(3), &mut rng).unwrap();

        assert_eq!(board.score(), Score::new(2, 1));
        assert_eq!(board.side_count(Player::One), 1);
        assert_eq!(board.side_count(Player::Two), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Board::new(&GameConfig::default().with_geometry(2, 48)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(Board::new(&GameConfig::new(36, 0)).is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::new(&GameConfig::new(4, 2)).unwrap();
        assert_eq!(
            format!("{}", board),
            "\t\t0: 0 \t1: 0 \t2: 0 (T)\t\n5: 0 (T)\t4: 0 \t3: 0 \t"
        );
    }
}
