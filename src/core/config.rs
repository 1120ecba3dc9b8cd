//! Game configuration.
//!
//! A `GameConfig` fixes the board geometry and the number of stones before
//! a session is created. It can be built in code with the `with_*` methods
//! or loaded from a TOML file:
//!
//! ```toml
//! n_stones = 36
//! n_pits = 6
//! seed = 7
//! ```
//!
//! Missing keys fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Default number of stones in play.
pub const DEFAULT_STONES: usize = 36;

/// Default number of sowable pits per player.
pub const DEFAULT_PITS: usize = 6;

/// Default side length of a sowable pit's slot grid.
pub const DEFAULT_GRID: usize = 4;

/// Default number of slots in a target pit (before corners are disabled).
pub const DEFAULT_TARGET_SLOTS: usize = 48;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Stones in play. Conserved for the whole game.
    pub n_stones: usize,

    /// Sowable pits per player. The ring has `2 * n_pits + 2` pits.
    pub n_pits: usize,

    /// Side length of a sowable pit's square slot grid.
    pub grid: usize,

    /// Slots in a target pit, laid out `grid` columns wide.
    pub target_slots: usize,

    /// Seed for slot placement and automated move selection.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            n_stones: DEFAULT_STONES,
            n_pits: DEFAULT_PITS,
            grid: DEFAULT_GRID,
            target_slots: DEFAULT_TARGET_SLOTS,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given stone and pit counts.
    pub fn new(n_stones: usize, n_pits: usize) -> Self {
        Self {
            n_stones,
            n_pits,
            ..Self::default()
        }
    }

    /// Set the number of stones.
    #[must_use]
    pub fn with_stones(mut self, n_stones: usize) -> Self {
        self.n_stones = n_stones;
        self
    }

    /// Set the number of sowable pits per player.
    #[must_use]
    pub fn with_pits(mut self, n_pits: usize) -> Self {
        self.n_pits = n_pits;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the slot geometry of sowable and target pits.
    #[must_use]
    pub fn with_geometry(mut self, grid: usize, target_slots: usize) -> Self {
        self.grid = grid;
        self.target_slots = target_slots;
        self
    }

    /// Number of pits on the ring.
    #[must_use]
    pub fn ring_len(&self) -> usize {
        2 * self.n_pits + 2
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_pits == 0 {
            return Err(ConfigError::Validation("n_pits must be > 0".into()));
        }
        if self.ring_len() > usize::from(u16::MAX) {
            return Err(ConfigError::Validation(format!(
                "n_pits must be < {}",
                usize::from(u16::MAX) / 2
            )));
        }
        if self.n_stones == 0 {
            return Err(ConfigError::Validation("n_stones must be > 0".into()));
        }
        if self.n_stones > u32::MAX as usize {
            return Err(ConfigError::Validation("n_stones does not fit a stone id".into()));
        }
        if self.grid < 3 {
            return Err(ConfigError::Validation(
                "grid must be >= 3 so that a pit has enabled slots".into(),
            ));
        }
        if self.target_slots < 2 * self.grid {
            return Err(ConfigError::Validation(
                "target_slots must be >= 2 * grid".into(),
            ));
        }
        Ok(())
    }
}
