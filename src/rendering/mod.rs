use macroquad::prelude::*;

use crate::application::{Camera, GameSession};
use crate::domain::Pattern;
use crate::input::InputState;
use crate::ui::{Button, CELL_SIZE, Dropdown, PANEL_WIDTH, board_area_height, board_area_width, panel_x};

const ALIVE_COLOR: Color = Color::new(0.51, 0.79, 0.12, 1.0);
const OFF_BOARD_COLOR: Color = Color::new(0.51, 0.79, 0.12, 0.35);
const BOARD_BG: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw the board: visible viewport background, grid lines when zoomed in,
/// then every live cell in view. The sparse set is iterated directly, so
/// drawing cost follows the population, not the board area. Off-board cells
/// (bounded mode) render dimmed so escaping structures stay visible.
pub fn draw_board(session: &GameSession, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let board_size = session.config().board_size;
    let area_width = board_area_width();
    let area_height = board_area_height();

    let (origin_x, origin_y) = camera.board_to_screen(0, 0, CELL_SIZE);
    let board_px = board_size as f32 * cell_size;
    draw_rectangle(origin_x, origin_y, board_px, board_px, BOARD_BG);

    // Grid lines only when cells are big enough to separate.
    if cell_size >= 6.0 {
        for i in 0..=board_size {
            let (x, y) = camera.board_to_screen(i, i, CELL_SIZE);
            draw_line(x, origin_y, x, origin_y + board_px, 1.0, GRID_LINE);
            draw_line(origin_x, y, origin_x + board_px, y, 1.0, GRID_LINE);
        }
    }

    let (min_x, min_y, max_x, max_y) = camera.visible_bounds(area_width, area_height, CELL_SIZE);
    for cell in session.living().iter() {
        if cell.x < min_x || cell.x > max_x || cell.y < min_y || cell.y > max_y {
            continue;
        }
        let (sx, sy) = camera.board_to_screen(cell.x, cell.y, CELL_SIZE);
        let color = if cell.in_bounds(board_size) {
            ALIVE_COLOR
        } else {
            OFF_BOARD_COLOR
        };
        draw_rectangle(sx, sy, cell_size, cell_size, color);
    }

    // Viewport border on top so the visible bounds are unambiguous.
    draw_rectangle_lines(origin_x, origin_y, board_px, board_px, 2.0, LIGHTGRAY);
}

/// Draw a semi-transparent preview of a pattern centered on the cursor.
pub fn draw_pattern_preview(pattern: &Pattern, camera: &Camera, mouse_pos: (f32, f32)) {
    let cell_size = CELL_SIZE * camera.zoom;
    let (board_x, board_y) = camera.screen_to_board(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    let start_x = board_x - pattern.width / 2;
    let start_y = board_y - pattern.height / 2;

    for &(dx, dy) in &pattern.cells {
        let (sx, sy) = camera.board_to_screen(start_x + dx, start_y + dy, CELL_SIZE);
        draw_rectangle(sx, sy, cell_size, cell_size, Color::new(0.51, 0.79, 0.12, 0.45));
        draw_rectangle_lines(sx, sy, cell_size, cell_size, 1.5, Color::new(0.51, 0.79, 0.12, 0.8));
    }

    let (box_x, box_y) = camera.board_to_screen(start_x, start_y, CELL_SIZE);
    draw_rectangle_lines(
        box_x,
        box_y,
        pattern.width as f32 * cell_size,
        pattern.height as f32 * cell_size,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel: buttons, dropdowns, shortcut help, and the
/// session readout (generation, live count, edge policy, pointer mode).
pub fn draw_controls(
    session: &GameSession,
    camera: &Camera,
    buttons: &[Button],
    dropdowns: &[Dropdown],
    input: &InputState,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    let shortcuts = [
        "D/E/M: Draw/Erase/Move",
        "Space: Play  N: Step",
        "W: Wrap  C: Clear  R: Rand",
        "S/L: Save/Load  H: Home",
        "Wheel: Zoom  Drag: Pan",
    ];
    draw_text("Keys:", px, 540.0, 14.0, WHITE);
    for (i, line) in shortcuts.iter().enumerate() {
        draw_text(line, px, 556.0 + i as f32 * 14.0, 12.0, GRAY);
    }

    let config = session.config();
    let readout = [
        (format!("Mode: {}", input.mouse_action.label()), WHITE),
        (
            format!(
                "Edges: {}",
                if config.wrap { "wrap" } else { "bounded" }
            ),
            WHITE,
        ),
        (format!("Board: {0}×{0}", config.board_size), WHITE),
        (
            format!("Speed: {} ×{}", session.speed().label(), config.steps_per_advance),
            WHITE,
        ),
    ];
    for (i, (text, color)) in readout.iter().enumerate() {
        draw_text(text, px, 650.0 + i as f32 * 17.0, 14.0, *color);
    }

    draw_text("Generation:", px, 735.0, 16.0, WHITE);
    draw_text(
        &format!("{}", session.generations()),
        px,
        755.0,
        20.0,
        ALIVE_COLOR,
    );
    draw_text("Alive:", px, 780.0, 16.0, WHITE);
    draw_text(
        &format!("{}", session.living_cell_count()),
        px,
        800.0,
        20.0,
        ALIVE_COLOR,
    );

    let (status, status_color) = if session.is_playing() {
        ("Running", GREEN)
    } else {
        ("Paused", ORANGE)
    };
    draw_text(status, px, 825.0, 16.0, status_color);
    draw_text(&format!("Zoom: {:.1}x", camera.zoom), px, 845.0, 13.0, GRAY);

    // Dropdowns last; the open one on top of everything.
    let mut open_dropdown: Option<&Dropdown> = None;
    for dropdown in dropdowns {
        if dropdown.is_open() {
            open_dropdown = Some(dropdown);
        } else {
            dropdown.draw(mouse_pos);
        }
    }
    if let Some(dd) = open_dropdown {
        dd.draw(mouse_pos);
    }
}
