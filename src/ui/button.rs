use macroquad::prelude::*;

/// What a control button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play,
    Pause,
    Clear,
}

/// Button UI component with hover, click and disabled states
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    action: Action,
    enabled: bool,
}

impl Button {
    const COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
    const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
    const DISABLED_COLOR: Color = Color::new(0.24, 0.25, 0.26, 1.0);

    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: Action) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
            enabled: true,
        }
    }

    /// Builder: set whether the button reacts to clicks
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn action(&self) -> Action {
        self.action
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (fill, text_color) = match (self.enabled, self.is_hovered(mouse_pos)) {
            (false, _) => (Self::DISABLED_COLOR, GRAY),
            (true, true) => (Self::HOVER_COLOR, WHITE),
            (true, false) => (Self::COLOR, WHITE),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, text_color);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            text_color,
        );
    }

    /// Check if an enabled button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Play", Action::Play);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(!button.is_hovered((111.0, 30.0)));
        assert!(!button.is_hovered((50.0, 19.0)));
    }

    #[test]
    fn test_disabled_builder() {
        let button = Button::new(0.0, 0.0, 10.0, 10.0, "Clear", Action::Clear).with_enabled(false);
        assert!(!button.is_enabled());
        assert_eq!(button.action(), Action::Clear);
    }
}
