use macroquad::prelude::*;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw without handling interaction; selection handling lives in
    /// `update` so rendering order can put open menus on top.
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(90, 90, 100, 255)
        } else {
            Color::from_rgba(55, 55, 65, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, LIGHTGRAY);

        draw_text(&self.items[self.selected], self.x + 6.0, self.y + 20.0, 16.0, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, 14.0, WHITE);

        if self.is_open {
            let menu_height = self.items.len() as f32 * self.height;
            draw_rectangle(
                self.x,
                self.y + self.height,
                self.width,
                menu_height,
                Color::from_rgba(30, 30, 34, 255),
            );

            for (i, item) in self.items.iter().enumerate() {
                let item_y = self.y + self.height + i as f32 * self.height;
                let item_color = if self.is_hovered_item(mouse_pos, i) {
                    Color::from_rgba(90, 90, 100, 255)
                } else if i == self.selected {
                    Color::from_rgba(60, 110, 60, 255)
                } else {
                    Color::from_rgba(45, 45, 50, 255)
                };

                draw_rectangle(self.x, item_y, self.width, self.height, item_color);
                draw_rectangle_lines(
                    self.x,
                    item_y,
                    self.width,
                    self.height,
                    1.0,
                    Color::from_rgba(80, 80, 80, 255),
                );
                draw_text(item, self.x + 6.0, item_y + 20.0, 16.0, WHITE);
            }

            draw_rectangle_lines(
                self.x,
                self.y + self.height,
                self.width,
                menu_height,
                2.0,
                LIGHTGRAY,
            );
        }
    }

    /// Handle interaction; returns true if the selection changed this frame.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered_main(mouse_pos) && is_mouse_button_pressed(MouseButton::Left) {
            self.is_open = !self.is_open;
            return false;
        }

        if self.is_open {
            for i in 0..self.items.len() {
                if self.is_hovered_item(mouse_pos, i) && is_mouse_button_pressed(MouseButton::Left)
                {
                    let changed = self.selected != i;
                    self.selected = i;
                    self.is_open = false;
                    return changed;
                }
            }

            if is_mouse_button_pressed(MouseButton::Left) && !self.is_hovered_any(mouse_pos) {
                self.is_open = false;
            }
        }

        false
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.y + self.height + index as f32 * self.height;
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }

    fn is_hovered_any(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i))
    }
}
