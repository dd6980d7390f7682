/// Camera manages viewport pan and zoom for board navigation.
/// Board coordinates are signed: bounded mode can have life just past the
/// viewport edge that is worth panning to.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.25, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.25, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to board coordinates
    pub fn screen_to_board(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> (i32, i32) {
        let scaled = cell_size * self.zoom;
        let board_x = ((screen_x - self.offset_x) / scaled).floor() as i32;
        let board_y = ((screen_y - self.offset_y) / scaled).floor() as i32;
        (board_x, board_y)
    }

    /// Convert board coordinates to screen coordinates
    pub fn board_to_screen(&self, board_x: i32, board_y: i32, cell_size: f32) -> (f32, f32) {
        let scaled = cell_size * self.zoom;
        let screen_x = board_x as f32 * scaled + self.offset_x;
        let screen_y = board_y as f32 * scaled + self.offset_y;
        (screen_x, screen_y)
    }

    /// Get visible board bounds for culling
    pub fn visible_bounds(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        cell_size: f32,
    ) -> (i32, i32, i32, i32) {
        let (min_x, min_y) = self.screen_to_board(0.0, 0.0, cell_size);
        let (max_x, max_y) = self.screen_to_board(viewport_width, viewport_height, cell_size);
        (min_x, min_y, max_x, max_y)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_board_round_trip() {
        let mut camera = Camera::new();
        camera.pan(33.0, -12.0);
        camera.zoom_in(1.5);

        let (sx, sy) = camera.board_to_screen(7, -3, 10.0);
        assert_eq!(camera.screen_to_board(sx, sy, 10.0), (7, -3));
    }

    #[test]
    fn test_negative_coordinates_floor_correctly() {
        let camera = Camera::new();
        // Just left of the origin is cell -1, not cell 0.
        assert_eq!(camera.screen_to_board(-0.5, -0.5, 10.0), (-1, -1));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_in(2.0);
        }
        assert!(camera.zoom <= 10.0);
        for _ in 0..100 {
            camera.zoom_out(2.0);
        }
        assert!(camera.zoom >= 0.25);
    }
}
