mod cell;
mod engine;
mod living_set;
mod patterns;

pub use cell::{Cell, NEIGHBOR_OFFSETS, ParseCellError};
pub use engine::{
    BoardConfig, DEFAULT_BOARD_SIZE, DEFAULT_VIRTUAL_MARGIN, EngineError, GameSpeed,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE, next_generation, next_generation_parallel, step,
};
pub use living_set::LivingSet;
pub use patterns::{Pattern, presets};
