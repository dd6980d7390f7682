mod snapshot;

pub use snapshot::{BoardSettings, SavedBoardSnapshot, encode_cells};

use std::fs;
use std::io;
use std::path::Path;

/// Write a snapshot as pretty JSON. This is the whole extent of the local
/// save/load collaborator; the engine itself never touches I/O.
pub fn save_board(path: &Path, snapshot: &SavedBoardSnapshot) -> io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot).map_err(io::Error::other)?;
    fs::write(path, json)
}

/// Read a snapshot back from JSON.
pub fn load_board(path: &Path) -> io::Result<SavedBoardSnapshot> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("life_board_store_test.json");
        let snapshot = SavedBoardSnapshot {
            title: "round trip".into(),
            living_cells: Some(vec!["1,1".into(), "2,1".into()]),
            living_cell_count: 2,
            ..SavedBoardSnapshot::default()
        };

        save_board(&path, &snapshot).unwrap();
        let back = load_board(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("life_board_no_such_file.json");
        assert!(load_board(&path).is_err());
    }
}
