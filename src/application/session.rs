use rand::Rng;

use crate::domain::{
    BoardConfig, Cell, EngineError, GameSpeed, LivingSet, MAX_BOARD_SIZE, MIN_BOARD_SIZE, step,
};
use crate::persistence::{BoardSettings, SavedBoardSnapshot, encode_cells};

/// GameSession owns the living-cell set and the generation counter for the
/// lifetime of a session. The presentation layer holds a read-only view and
/// issues intent-level commands through the methods below; every command
/// runs to completion before the next one is observed.
pub struct GameSession {
    living: LivingSet,
    config: BoardConfig,
    speed: GameSpeed,
    generations: u64,
    living_cell_count: usize,
    is_playing: bool,
    update_timer: f32,
    /// Persistence identity; None until the external collaborator saves us.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            living: LivingSet::new(),
            config: BoardConfig::default(),
            speed: GameSpeed::default(),
            generations: 0,
            living_cell_count: 0,
            is_playing: false,
            update_timer: 0.0,
            id: None,
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn living(&self) -> &LivingSet {
        &self.living
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn speed(&self) -> GameSpeed {
        self.speed
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Live cells inside the visible viewport. Off-board life (bounded mode)
    /// keeps evolving but is not counted.
    pub fn living_cell_count(&self) -> usize {
        self.living_cell_count
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Flip one cell's membership. Under wrap the caller must pass a
    /// normalized coordinate; an out-of-range edit is rejected rather than
    /// silently wrapped so UI bugs surface. Bounded mode accepts any
    /// coordinate, including off-board ones.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        let cell = self.checked_cell(x, y)?;
        let now_alive = self.living.toggle(cell);
        if cell.in_bounds(self.config.board_size) {
            if now_alive {
                self.living_cell_count += 1;
            } else {
                self.living_cell_count -= 1;
            }
        }
        Ok(())
    }

    /// Drive one cell to a specific state; the draw/erase pointer modes are
    /// built on this. A no-op when the cell is already in that state.
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) -> Result<(), EngineError> {
        let cell = self.checked_cell(x, y)?;
        if self.living.contains(cell) != alive {
            self.toggle_cell(x, y)?;
        }
        Ok(())
    }

    fn checked_cell(&self, x: i32, y: i32) -> Result<Cell, EngineError> {
        let cell = Cell::new(x, y);
        if self.config.wrap && !cell.in_bounds(self.config.board_size) {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                size: self.config.board_size,
            });
        }
        Ok(cell)
    }

    /// Advance the board by `steps` generations. The full result is computed
    /// into a fresh set and only then swapped in, so the session never shows
    /// a partially-updated board. The generation counter advances by `steps`
    /// even when the population went extinct partway: the empty set is a
    /// fixed point of the transition.
    pub fn advance(&mut self, steps: u32) -> Result<(), EngineError> {
        if steps == 0 {
            return Err(EngineError::InvalidStepCount);
        }

        let mut next = self.living.clone();
        for _ in 0..steps {
            next = step(&next, &self.config);
        }

        self.living = next;
        self.living_cell_count = self.living.count_visible(self.config.board_size);
        self.generations += u64::from(steps);
        Ok(())
    }

    /// Advance by the configured steps-per-advance.
    pub fn advance_default(&mut self) -> Result<(), EngineError> {
        self.advance(self.config.steps_per_advance)
    }

    /// Change the visible board size, discarding cells outside the new
    /// bounds. Lossy: a later enlargement does not restore them. Resets the
    /// generation counter.
    pub fn resize(&mut self, new_size: i32) -> Result<(), EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&new_size) {
            return Err(EngineError::InvalidBoardSize(new_size));
        }
        self.config.board_size = new_size;
        self.living.trim_to_size(new_size);
        self.living_cell_count = self.living.count_visible(new_size);
        self.generations = 0;
        Ok(())
    }

    /// Switch edge policy; takes effect on the next advance. Off-board cells
    /// accumulated under the bounded policy stay in the set; they simply
    /// become unreachable once wrapping confines the candidate space.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.config.wrap = wrap;
    }

    pub fn set_speed(&mut self, speed: GameSpeed) {
        self.speed = speed;
    }

    pub fn set_steps_per_advance(&mut self, steps: u32) -> Result<(), EngineError> {
        if steps == 0 {
            return Err(EngineError::InvalidStepCount);
        }
        self.config.steps_per_advance = steps;
        Ok(())
    }

    /// Empty the board and reset counters and save identity.
    pub fn clear(&mut self) {
        self.living.clear();
        self.living_cell_count = 0;
        self.generations = 0;
        self.is_playing = false;
        self.id = None;
        self.title.clear();
        self.description.clear();
    }

    /// Fill the visible board randomly (about 30% alive) and reset the
    /// generation counter.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.living.clear();
        for y in 0..self.config.board_size {
            for x in 0..self.config.board_size {
                if rng.random_bool(0.3) {
                    self.living.insert(Cell::new(x, y));
                }
            }
        }
        self.living_cell_count = self.living.len();
        self.generations = 0;
        self.is_playing = false;
    }

    /// Stamp a pattern with its top-left corner at `(x, y)`. Cells go
    /// through the same edit path as manual draws, so wrap-mode bounds
    /// checks apply per cell.
    pub fn place_pattern(
        &mut self,
        pattern: &crate::domain::Pattern,
        x: i32,
        y: i32,
    ) -> Result<(), EngineError> {
        for &(dx, dy) in &pattern.cells {
            self.set_cell(x + dx, y + dy, true)?;
        }
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.stop();
        } else {
            self.is_playing = true;
        }
    }

    /// Stop playback. Clears the accumulated tick timer synchronously, so no
    /// advance scheduled before the stop can fire after it.
    pub fn stop(&mut self) {
        self.is_playing = false;
        self.update_timer = 0.0;
    }

    /// Frame-driven ticker: accumulates elapsed time and applies one
    /// configured advance per speed interval while playing. A failed advance
    /// forces playback to stop and keeps the last valid board.
    pub fn tick(&mut self, delta: f32) {
        if !self.is_playing {
            return;
        }

        self.update_timer += delta;
        if self.update_timer >= self.speed.tick_interval() {
            self.update_timer = 0.0;
            if let Err(err) = self.advance(self.config.steps_per_advance) {
                self.stop();
                log::error!("auto-advance failed, playback stopped: {err}");
            }
        }
    }

    /// Capture the full session state for the persistence collaborator.
    pub fn export_snapshot(&self) -> SavedBoardSnapshot {
        SavedBoardSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            living_cells: Some(encode_cells(&self.living)),
            board: None,
            generations: self.generations,
            is_playing: self.is_playing,
            living_cell_count: self.living_cell_count,
            settings: BoardSettings {
                board_size: self.config.board_size,
                game_speed: self.speed,
                wrap_around: self.config.wrap,
                generations_per_advance: self.config.steps_per_advance,
            },
        }
    }

    /// Replace the whole session state from a snapshot. Never fails:
    /// malformed cell data falls back to an empty board, out-of-range
    /// settings are clamped, and both are reported as warnings.
    pub fn import_snapshot(&mut self, snapshot: &SavedBoardSnapshot) {
        let (living, dropped) = snapshot.decode_cells();
        if dropped > 0 {
            log::warn!("snapshot contained {dropped} unparseable cell keys, skipped");
        }

        let settings = &snapshot.settings;
        let board_size = settings.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        if board_size != settings.board_size {
            log::warn!(
                "snapshot board size {} out of range, clamped to {board_size}",
                settings.board_size
            );
        }

        self.living = living;
        self.config.board_size = board_size;
        self.config.wrap = settings.wrap_around;
        self.config.steps_per_advance = settings.generations_per_advance.max(1);
        self.speed = settings.game_speed;
        self.generations = snapshot.generations;
        self.living_cell_count = self.living.count_visible(board_size);
        self.is_playing = snapshot.is_playing;
        self.update_timer = 0.0;
        self.id = snapshot.id.clone();
        self.title = snapshot.title.clone();
        self.description = snapshot.description.clone();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn session_with(cells: &[(i32, i32)]) -> GameSession {
        let mut session = GameSession::new();
        for &(x, y) in cells {
            session.toggle_cell(x, y).unwrap();
        }
        session
    }

    #[test]
    fn test_extinction_is_a_fixed_point_but_counter_advances() {
        let mut session = GameSession::new();
        session.advance(1).unwrap();
        assert!(session.living().is_empty());
        assert_eq!(session.generations(), 1);

        session.advance(5).unwrap();
        assert!(session.living().is_empty());
        assert_eq!(session.generations(), 6);
    }

    #[test]
    fn test_advance_zero_steps_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.advance(0), Err(EngineError::InvalidStepCount));
        assert_eq!(session.generations(), 0);
    }

    #[test]
    fn test_multi_step_advance_equals_repeated_single_steps() {
        let mut stepped = session_with(&[(10, 10), (11, 10), (12, 10), (12, 11), (11, 12)]);
        let mut batched = session_with(&[(10, 10), (11, 10), (12, 10), (12, 11), (11, 12)]);

        for _ in 0..6 {
            stepped.advance(1).unwrap();
        }
        batched.advance(6).unwrap();

        assert_eq!(stepped.living(), batched.living());
        assert_eq!(stepped.generations(), batched.generations());
    }

    #[test]
    fn test_toggle_involution_restores_set_and_count() {
        let mut session = session_with(&[(3, 3), (4, 4)]);
        let before = session.living().clone();
        assert_eq!(session.living_cell_count(), 2);

        session.toggle_cell(7, 7).unwrap();
        assert_eq!(session.living_cell_count(), 3);
        session.toggle_cell(7, 7).unwrap();

        assert_eq!(session.living(), &before);
        assert_eq!(session.living_cell_count(), 2);
    }

    #[test]
    fn test_off_board_toggle_is_not_counted_in_bounded_mode() {
        let mut session = GameSession::new();
        session.toggle_cell(-5, 100).unwrap();
        assert_eq!(session.living().len(), 1);
        assert_eq!(session.living_cell_count(), 0);
    }

    #[test]
    fn test_wrap_mode_rejects_out_of_range_toggle() {
        let mut session = GameSession::new();
        session.set_wrap(true);
        let size = session.config().board_size;

        assert_eq!(
            session.toggle_cell(-1, 0),
            Err(EngineError::OutOfBounds { x: -1, y: 0, size })
        );
        assert_eq!(
            session.toggle_cell(0, size),
            Err(EngineError::OutOfBounds { x: 0, y: size, size })
        );
        assert!(session.living().is_empty());
    }

    #[test]
    fn test_set_cell_is_idempotent() {
        let mut session = GameSession::new();
        session.set_cell(2, 2, true).unwrap();
        session.set_cell(2, 2, true).unwrap();
        assert_eq!(session.living_cell_count(), 1);
        session.set_cell(2, 2, false).unwrap();
        session.set_cell(2, 2, false).unwrap();
        assert_eq!(session.living_cell_count(), 0);
    }

    #[test]
    fn test_resize_trims_and_resets_generations() {
        // A block inside the new bounds and one outside them.
        let mut session =
            session_with(&[(5, 5), (6, 5), (5, 6), (6, 6), (20, 20), (20, 21), (21, 20), (21, 21)]);
        session.advance(2).unwrap();
        assert_eq!(session.generations(), 2);
        assert_eq!(session.living_cell_count(), 8);

        session.resize(10).unwrap();
        assert_eq!(session.generations(), 0);
        assert_eq!(session.living_cell_count(), 4);
        assert!(session.living().iter().all(|c| c.in_bounds(10)));

        let after_first = session.living().clone();
        session.resize(10).unwrap();
        assert_eq!(session.living(), &after_first);

        // Enlarging afterwards does not restore trimmed cells.
        session.resize(30).unwrap();
        assert_eq!(session.living(), &after_first);
    }

    #[test]
    fn test_resize_rejects_out_of_range_sizes() {
        let mut session = GameSession::new();
        assert_eq!(session.resize(8), Err(EngineError::InvalidBoardSize(8)));
        assert_eq!(session.resize(0), Err(EngineError::InvalidBoardSize(0)));
        assert_eq!(session.resize(251), Err(EngineError::InvalidBoardSize(251)));
        assert!(session.resize(9).is_ok());
        assert!(session.resize(250).is_ok());
    }

    #[test]
    fn test_steps_per_advance_must_be_positive() {
        let mut session = GameSession::new();
        assert_eq!(
            session.set_steps_per_advance(0),
            Err(EngineError::InvalidStepCount)
        );
        session.set_steps_per_advance(4).unwrap();
        session.advance_default().unwrap();
        assert_eq!(session.generations(), 4);
    }

    #[test]
    fn test_clear_resets_board_and_save_identity() {
        let mut session = session_with(&[(1, 1)]);
        session.id = Some("saved".into());
        session.title = "my board".into();
        session.advance(3).unwrap();

        session.clear();
        assert!(session.living().is_empty());
        assert_eq!(session.living_cell_count(), 0);
        assert_eq!(session.generations(), 0);
        assert_eq!(session.id, None);
        assert!(session.title.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip_restores_everything() {
        let mut session = GameSession::new();
        session.place_pattern(&presets::glider(), 10, 10).unwrap();
        session.resize(64).unwrap();
        session.set_wrap(true);
        session.set_speed(GameSpeed::Fast);
        session.set_steps_per_advance(3).unwrap();
        session.advance(3).unwrap();
        session.title = "travelling".into();
        session.description = "glider mid-flight".into();

        let snapshot = session.export_snapshot();

        let mut restored = GameSession::new();
        restored.import_snapshot(&snapshot);

        assert_eq!(restored.living(), session.living());
        assert_eq!(restored.generations(), session.generations());
        assert_eq!(restored.living_cell_count(), session.living_cell_count());
        assert_eq!(restored.config(), session.config());
        assert_eq!(restored.speed(), session.speed());
        assert_eq!(restored.title, session.title);
        assert_eq!(restored.description, session.description);
    }

    #[test]
    fn test_import_clamps_bad_board_size() {
        let mut snapshot = GameSession::new().export_snapshot();
        snapshot.settings.board_size = 3;
        let mut session = GameSession::new();
        session.import_snapshot(&snapshot);
        assert_eq!(session.config().board_size, MIN_BOARD_SIZE);
    }

    #[test]
    fn test_ticker_advances_once_per_interval() {
        let mut session = session_with(&[(10, 10), (10, 11), (10, 12)]);
        session.toggle_play();

        // Normal speed ticks every 0.1s.
        session.tick(0.05);
        assert_eq!(session.generations(), 0);
        session.tick(0.06);
        assert_eq!(session.generations(), 1);
        session.tick(0.2);
        assert_eq!(session.generations(), 2);
    }

    #[test]
    fn test_ticker_is_inert_while_paused() {
        let mut session = session_with(&[(10, 10), (10, 11), (10, 12)]);
        session.tick(10.0);
        assert_eq!(session.generations(), 0);
    }

    #[test]
    fn test_stop_discards_pending_tick_time() {
        let mut session = session_with(&[(10, 10), (10, 11), (10, 12)]);
        session.toggle_play();
        session.tick(0.09);
        session.stop();
        session.toggle_play();
        session.tick(0.02);
        // The pre-stop 0.09s must not combine with the 0.02s.
        assert_eq!(session.generations(), 0);
    }
}
