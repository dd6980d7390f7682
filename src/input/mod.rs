use std::path::Path;

use macroquad::prelude::*;

use crate::application::{Camera, GameSession};
use crate::domain::GameSpeed;
use crate::persistence;
use crate::ui::{CELL_SIZE, board_area_width};

/// What the pointer does to the board. This is a UI-local state machine;
/// the session only ever sees cell-level edit intents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseAction {
    Draw,
    Erase,
    #[default]
    Move,
}

impl MouseAction {
    pub const fn label(self) -> &'static str {
        match self {
            MouseAction::Draw => "Draw",
            MouseAction::Erase => "Erase",
            MouseAction::Move => "Move",
        }
    }
}

/// Per-frame pointer tracking that has to survive across frames.
#[derive(Default)]
pub struct InputState {
    pub mouse_action: MouseAction,
    last_pan_pos: Option<(f32, f32)>,
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan: middle-button drag always pans, left drag pans in Move mode.
pub fn handle_pan(camera: &mut Camera, input: &mut InputState, mouse_pos: (f32, f32)) {
    let panning = is_mouse_button_down(MouseButton::Middle)
        || (input.mouse_action == MouseAction::Move
            && is_mouse_button_down(MouseButton::Left)
            && mouse_pos.0 < board_area_width());

    if panning {
        if let Some(last) = input.last_pan_pos {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        input.last_pan_pos = Some(mouse_pos);
    } else {
        input.last_pan_pos = None;
    }
}

/// Apply the draw/erase pointer modes to the board. Editing is disabled
/// while playing, matching the original interaction model.
pub fn handle_mouse_edit(
    session: &mut GameSession,
    camera: &Camera,
    input: &InputState,
    mouse_pos: (f32, f32),
) {
    if session.is_playing() || mouse_pos.0 >= board_area_width() {
        return;
    }
    let alive = match input.mouse_action {
        MouseAction::Draw => true,
        MouseAction::Erase => false,
        MouseAction::Move => return,
    };
    if !is_mouse_button_down(MouseButton::Left) {
        return;
    }

    let (x, y) = camera.screen_to_board(mouse_pos.0, mouse_pos.1, CELL_SIZE);

    // Under wrap the engine rejects out-of-range edits; filter them here so
    // painting along the border doesn't spam errors.
    if session.config().wrap && !crate::domain::Cell::new(x, y).in_bounds(session.config().board_size)
    {
        return;
    }

    if let Err(err) = session.set_cell(x, y, alive) {
        log::debug!("edit at ({x}, {y}) rejected: {err}");
    }
}

/// Keyboard shortcuts for playback, editing modes, and local save/load.
pub fn process_keyboard(session: &mut GameSession, camera: &mut Camera, input: &mut InputState) {
    if is_key_pressed(KeyCode::Space) {
        session.toggle_play();
    }
    if is_key_pressed(KeyCode::N) && !session.is_playing() {
        if let Err(err) = session.advance_default() {
            log::error!("manual advance failed: {err}");
        }
    }
    if is_key_pressed(KeyCode::C) {
        session.clear();
    }
    if is_key_pressed(KeyCode::R) {
        session.randomize();
    }
    if is_key_pressed(KeyCode::W) {
        let wrap = !session.config().wrap;
        session.set_wrap(wrap);
    }
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    if is_key_pressed(KeyCode::D) {
        input.mouse_action = MouseAction::Draw;
    }
    if is_key_pressed(KeyCode::E) {
        input.mouse_action = MouseAction::Erase;
    }
    if is_key_pressed(KeyCode::M) {
        input.mouse_action = MouseAction::Move;
    }

    if is_key_pressed(KeyCode::Key1) {
        session.set_speed(GameSpeed::Slow);
    }
    if is_key_pressed(KeyCode::Key2) {
        session.set_speed(GameSpeed::Normal);
    }
    if is_key_pressed(KeyCode::Key3) {
        session.set_speed(GameSpeed::Fast);
    }

    if is_key_pressed(KeyCode::S) {
        let path = Path::new("life_board.json");
        match persistence::save_board(path, &session.export_snapshot()) {
            Ok(()) => log::info!("board saved to {}", path.display()),
            Err(err) => log::error!("save failed: {err}"),
        }
    }
    if is_key_pressed(KeyCode::L) {
        let path = Path::new("life_board.json");
        match persistence::load_board(path) {
            Ok(snapshot) => session.import_snapshot(&snapshot),
            Err(err) => log::error!("load failed: {err}"),
        }
    }
}

/// Process clicks on the control buttons; index order matches
/// `ui::create_buttons`.
pub fn process_button_clicks(
    session: &mut GameSession,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32),
) {
    use crate::ui::buttons;

    for (idx, btn) in buttons.iter().enumerate() {
        if !btn.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            buttons::PLAY_PAUSE => session.toggle_play(),
            buttons::STEP => {
                if !session.is_playing() {
                    if let Err(err) = session.advance_default() {
                        log::error!("manual advance failed: {err}");
                    }
                }
            }
            buttons::CLEAR => session.clear(),
            buttons::RANDOM => session.randomize(),
            buttons::WRAP => {
                let wrap = !session.config().wrap;
                session.set_wrap(wrap);
            }
            _ => {}
        }
    }
}
