mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};

// UI constants - functions where the value depends on the window size
pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const CELL_SIZE: f32 = 14.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Visible board sizes offered by the dropdown, within the supported
/// 9..=250 range.
pub const BOARD_SIZES: &[(i32, &str)] = &[
    (9, "9×9"),
    (19, "19×19"),
    (38, "38×38"),
    (64, "64×64"),
    (100, "100×100"),
    (150, "150×150"),
    (250, "250×250"),
];

/// Generations applied per advance, offered by the dropdown.
pub const STEP_OPTIONS: &[u32] = &[1, 2, 5, 10, 25];

/// Indices into the button list built by `create_buttons`.
pub mod buttons {
    pub const PLAY_PAUSE: usize = 0;
    pub const STEP: usize = 1;
    pub const CLEAR: usize = 2;
    pub const RANDOM: usize = 3;
    pub const WRAP: usize = 4;
}

/// Create the control buttons with the standard layout. The wrap button is
/// drawn active while toroidal edges are on.
pub fn create_buttons(playing: bool, wrap: bool) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(
            px,
            300.0,
            PANEL_WIDTH,
            BUTTON_HEIGHT,
            if playing { "Pause" } else { "Play" },
        ),
        Button::new(px, 344.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"),
        Button::new(px, 388.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 432.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(
            px,
            476.0,
            PANEL_WIDTH,
            BUTTON_HEIGHT,
            if wrap { "Wrap: On" } else { "Wrap: Off" },
        )
        .with_active(wrap),
    ]
}
