use life_board::{
    GameSession, GameSpeed,
    application::Camera,
    domain::presets,
    input::{self, InputState},
    rendering,
    ui::{self, BOARD_SIZES, Dropdown, STEP_OPTIONS},
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Board".to_owned(),
        window_width: 1000,
        window_height: 880,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut session = GameSession::new();
    let mut camera = Camera::new();
    let mut input_state = InputState::default();

    // Pattern placement is a transient presentation mode, not engine state.
    let mut pending_pattern: Option<usize> = None;
    let patterns = presets::all_patterns();

    let px = ui::panel_x();
    let size_items: Vec<String> = BOARD_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut size_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Board Size", size_items);
    size_dropdown.set_selected(2); // 38×38 default

    let speed_items: Vec<String> = GameSpeed::all().iter().map(|s| s.label().to_string()).collect();
    let mut speed_dropdown = Dropdown::new(px, 70.0, ui::PANEL_WIDTH, "Speed", speed_items);
    speed_dropdown.set_selected(1); // Normal

    let step_items: Vec<String> = STEP_OPTIONS.iter().map(|s| format!("{s} gen/step")).collect();
    let mut steps_dropdown = Dropdown::new(px, 120.0, ui::PANEL_WIDTH, "Steps", step_items);

    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, 170.0, ui::PANEL_WIDTH, "Pattern", pattern_items);

    loop {
        let mouse_pos = mouse_position();

        // Reposition for responsive layout
        let px = ui::panel_x();
        size_dropdown.set_position(px, 20.0);
        speed_dropdown.set_position(px, 70.0);
        steps_dropdown.set_position(px, 120.0);
        pattern_dropdown.set_position(px, 170.0);

        let buttons = ui::create_buttons(session.is_playing(), session.config().wrap);

        // Only one dropdown may be open at a time.
        if size_dropdown.update(mouse_pos) {
            let (size, _) = BOARD_SIZES[size_dropdown.selected()];
            if let Err(err) = session.resize(size) {
                log::error!("resize rejected: {err}");
            }
            camera.reset();
        }
        if size_dropdown.is_open() {
            speed_dropdown.close();
            steps_dropdown.close();
            pattern_dropdown.close();
        }

        if speed_dropdown.update(mouse_pos) {
            session.set_speed(GameSpeed::all()[speed_dropdown.selected()]);
        }
        if speed_dropdown.is_open() {
            size_dropdown.close();
            steps_dropdown.close();
            pattern_dropdown.close();
        }

        if steps_dropdown.update(mouse_pos) {
            let steps = STEP_OPTIONS[steps_dropdown.selected()];
            if let Err(err) = session.set_steps_per_advance(steps) {
                log::error!("steps rejected: {err}");
            }
        }
        if steps_dropdown.is_open() {
            size_dropdown.close();
            speed_dropdown.close();
            pattern_dropdown.close();
        }

        if pattern_dropdown.update(mouse_pos) {
            pending_pattern = Some(pattern_dropdown.selected());
            session.stop();
        }
        if pattern_dropdown.is_open() {
            size_dropdown.close();
            speed_dropdown.close();
            steps_dropdown.close();
        }

        // Pattern placement mode: left-click stamps, right-click or Escape cancels.
        if let Some(pattern_idx) = pending_pattern {
            let pattern = &patterns[pattern_idx];

            if is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape) {
                pending_pattern = None;
            } else if is_mouse_button_pressed(MouseButton::Left)
                && mouse_pos.0 < ui::board_area_width()
            {
                let (x, y) = camera.screen_to_board(mouse_pos.0, mouse_pos.1, ui::CELL_SIZE);
                let origin_x = x - pattern.width / 2;
                let origin_y = y - pattern.height / 2;
                if let Err(err) = session.place_pattern(pattern, origin_x, origin_y) {
                    log::warn!("pattern placement rejected: {err}");
                }
                pending_pattern = None;
            }
        }

        input::process_button_clicks(&mut session, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, &mut input_state, mouse_pos);
        if pending_pattern.is_none() {
            input::handle_mouse_edit(&mut session, &camera, &input_state, mouse_pos);
        }
        input::process_keyboard(&mut session, &mut camera, &mut input_state);

        // Reflect externally-changed settings (e.g. a loaded snapshot) back
        // into the dropdowns.
        if let Some(i) = BOARD_SIZES
            .iter()
            .position(|(s, _)| *s == session.config().board_size)
        {
            size_dropdown.set_selected(i);
        }
        if let Some(i) = GameSpeed::all().iter().position(|s| *s == session.speed()) {
            speed_dropdown.set_selected(i);
        }
        if let Some(i) = STEP_OPTIONS
            .iter()
            .position(|s| *s == session.config().steps_per_advance)
        {
            steps_dropdown.set_selected(i);
        }

        session.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_board(&session, &camera);
        if let Some(idx) = pending_pattern {
            if mouse_pos.0 < ui::board_area_width() {
                rendering::draw_pattern_preview(&patterns[idx], &camera, mouse_pos);
            }
        }

        let dropdowns = [
            size_dropdown.clone(),
            speed_dropdown.clone(),
            steps_dropdown.clone(),
            pattern_dropdown.clone(),
        ];
        rendering::draw_controls(&session, &camera, &buttons, &dropdowns, &input_state, mouse_pos);

        next_frame().await;
    }
}
