use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Cell, LivingSet, NEIGHBOR_OFFSETS};

/// Smallest visible board the settings surface allows.
pub const MIN_BOARD_SIZE: i32 = 9;
/// Largest visible board the settings surface allows.
pub const MAX_BOARD_SIZE: i32 = 250;

/// Default side length of the visible viewport.
pub const DEFAULT_BOARD_SIZE: i32 = 38;
/// Default bounded-mode candidate horizon, in cells past the viewport edge.
pub const DEFAULT_VIRTUAL_MARGIN: i32 = 20;

/// Population size above which the parallel engine takes over.
const PARALLEL_THRESHOLD: usize = 2048;

/// Errors raised by engine operations when a caller violates a precondition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Wrap-mode edits must be normalized into the board before they reach
    /// the engine; anything else is a caller bug we refuse to mask.
    #[error("cell ({x}, {y}) is outside the wrapped board of size {size}")]
    OutOfBounds { x: i32, y: i32, size: i32 },

    #[error("board size {0} is outside the supported range 9..=250")]
    InvalidBoardSize(i32),

    #[error("step count must be at least 1")]
    InvalidStepCount,
}

/// Tick cadence for auto-advance, as exposed by the settings surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl GameSpeed {
    /// Seconds between auto-advance ticks.
    pub const fn tick_interval(self) -> f32 {
        match self {
            GameSpeed::Slow => 0.2,
            GameSpeed::Normal => 0.1,
            GameSpeed::Fast => 0.05,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GameSpeed::Slow => "Slow",
            GameSpeed::Normal => "Normal",
            GameSpeed::Fast => "Fast",
        }
    }

    pub fn all() -> Vec<GameSpeed> {
        vec![GameSpeed::Slow, GameSpeed::Normal, GameSpeed::Fast]
    }
}

/// Board-level settings the engine reads on every advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Side length of the square visible viewport.
    pub board_size: i32,
    /// Edge policy: toroidal wrap vs. unbounded virtual plane.
    pub wrap: bool,
    /// Generations applied per user-triggered advance.
    pub steps_per_advance: u32,
    /// Bounded-mode candidate horizon. Candidates farther than this outside
    /// the viewport are dropped instead of simulated: off-board structures
    /// past the horizon are genuinely forgotten, trading fidelity for
    /// bounded memory. Ignored under wrap.
    pub virtual_margin: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            wrap: false,
            steps_per_advance: 1,
            virtual_margin: DEFAULT_VIRTUAL_MARGIN,
        }
    }
}

/// Conway's B3/S23 rule: a live cell survives with 2 or 3 live neighbors,
/// a dead cell is born with exactly 3. Everything else dies or stays dead.
const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

fn living_neighbor_count(cell: Cell, living: &LivingSet, config: &BoardConfig) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&offset| {
            living.contains(cell.neighbor(offset, config.board_size, config.wrap))
        })
        .count() as u8
}

/// Whether a bounded-mode candidate is past the virtual horizon and can be
/// skipped. Such a cell cannot re-enter visibility before a resize.
fn past_horizon(cell: Cell, config: &BoardConfig) -> bool {
    !config.wrap
        && (cell.x < -config.virtual_margin
            || cell.x > config.board_size + config.virtual_margin
            || cell.y < -config.virtual_margin
            || cell.y > config.board_size + config.virtual_margin)
}

/// The candidate set: every cell whose state can change this generation.
/// That is each living cell itself plus its eight neighbors: a living cell
/// with no neighbors found by traversal must still be re-evaluated so the
/// underpopulation rule applies to it. Deduplicated so each candidate is
/// evaluated at most once.
fn candidates(living: &LivingSet, config: &BoardConfig) -> Vec<Cell> {
    let mut considered: HashSet<Cell> = HashSet::with_capacity(living.len() * 4);
    let mut out = Vec::with_capacity(living.len() * 4);

    for cell in living.iter() {
        for candidate in std::iter::once(cell).chain(cell.neighbors(config.board_size, config.wrap))
        {
            if past_horizon(candidate, config) {
                continue;
            }
            if considered.insert(candidate) {
                out.push(candidate);
            }
        }
    }

    out
}

/// Compute the next generation of `living` without scanning the board.
///
/// Cost is proportional to the living population, not the board area, so a
/// conceptually unbounded plane stays tractable while the population is
/// small. The input set is untouched; the caller swaps the result in, which
/// keeps multi-step advances atomic from the outside.
pub fn next_generation(living: &LivingSet, config: &BoardConfig) -> LivingSet {
    candidates(living, config)
        .into_iter()
        .filter(|&cell| {
            next_state(
                living.contains(cell),
                living_neighbor_count(cell, living, config),
            )
        })
        .collect()
}

/// Rayon variant of [`next_generation`] for large populations. Candidate
/// evaluation is independent per cell, so the rule applies in parallel over
/// a read-only view of the current set.
pub fn next_generation_parallel(living: &LivingSet, config: &BoardConfig) -> LivingSet {
    let evaluated: HashSet<Cell> = candidates(living, config)
        .into_par_iter()
        .filter(|&cell| {
            next_state(
                living.contains(cell),
                living_neighbor_count(cell, living, config),
            )
        })
        .collect();

    evaluated.into_iter().collect()
}

/// Advance one generation, picking the serial or parallel engine based on
/// population size.
pub fn step(living: &LivingSet, config: &BoardConfig) -> LivingSet {
    if living.len() >= PARALLEL_THRESHOLD {
        next_generation_parallel(living, config)
    } else {
        next_generation(living, config)
    }
}
