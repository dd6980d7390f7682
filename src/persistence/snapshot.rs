use serde::{Deserialize, Serialize};

use crate::domain::{Cell, DEFAULT_BOARD_SIZE, GameSpeed, LivingSet};

/// Engine settings carried inside a snapshot. Field names match the JSON
/// the save/load collaborator persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardSettings {
    pub board_size: i32,
    pub game_speed: GameSpeed,
    pub wrap_around: bool,
    pub generations_per_advance: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            game_speed: GameSpeed::Normal,
            wrap_around: false,
            generations_per_advance: 1,
        }
    }
}

/// A serializable capture of engine state sufficient to restore a session
/// exactly. This is the boundary contract with the external persistence
/// collaborator; the engine never sees where the snapshot travels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBoardSnapshot {
    /// Opaque identifier assigned by the persistence collaborator;
    /// None for boards that were never saved.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Live coordinates as canonical `"x,y"` keys. Absent in legacy saves.
    #[serde(default)]
    pub living_cells: Option<Vec<String>>,
    /// Deprecated dense row-major grid (`board[y][x]`), kept so old saves
    /// still load. Ignored when `living_cells` is present.
    #[serde(default)]
    pub board: Option<Vec<Vec<bool>>>,
    #[serde(default)]
    pub generations: u64,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub living_cell_count: usize,
    #[serde(default)]
    pub settings: BoardSettings,
}

impl SavedBoardSnapshot {
    /// Decode whichever cell representation this snapshot carries into a
    /// `LivingSet`. Never fails: a snapshot with no usable payload yields an
    /// empty board, and individually unparseable keys are skipped. Returns
    /// the set plus the number of entries dropped so the caller can surface
    /// a recoverable warning.
    pub fn decode_cells(&self) -> (LivingSet, usize) {
        if let Some(keys) = &self.living_cells {
            let mut dropped = 0;
            let living = keys
                .iter()
                .filter_map(|key| match key.parse::<Cell>() {
                    Ok(cell) => Some(cell),
                    Err(_) => {
                        dropped += 1;
                        None
                    }
                })
                .collect();
            return (living, dropped);
        }

        if let Some(rows) = &self.board {
            return (LivingSet::from_dense_rows(rows), 0);
        }

        (LivingSet::new(), 0)
    }
}

/// Serialize a living set as sorted `"x,y"` keys. Sorting keeps snapshots
/// deterministic despite the hash-set storage.
pub fn encode_cells(living: &LivingSet) -> Vec<String> {
    let mut cells: Vec<Cell> = living.iter().collect();
    cells.sort();
    cells.iter().map(Cell::to_string).collect()
}
