//! Hit-testing for the clickable buttons and their fixed layout.

use crate::config::GameConfig;
use crate::entities::{Button, ButtonLayout};
use crate::geometry::{Point, Rect};
use crate::input::{InputEvent, PointerButton};

const BUTTON_W: f32 = 150.0;
const BUTTON_H: f32 = 50.0;

impl Button {
    pub fn new(x: f32, y: f32, w: f32, h: f32, label: &'static str) -> Self {
        Button {
            rect: Rect::new(x, y, w, h),
            label,
        }
    }

    /// A primary-button press inside the rectangle.
    pub fn is_clicked(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click {
                pos,
                button: PointerButton::Primary,
            } => self.rect.contains(*pos),
            _ => false,
        }
    }

    pub fn is_hovered(&self, pointer: Option<Point>) -> bool {
        pointer.is_some_and(|p| self.rect.contains(p))
    }
}

impl ButtonLayout {
    /// Buttons stacked in a column centred on the surface.
    pub fn for_config(config: &GameConfig) -> Self {
        let x = config.width / 2.0 - BUTTON_W / 2.0;
        let mid = config.height / 2.0;
        ButtonLayout {
            start: Button::new(x, mid - 25.0, BUTTON_W, BUTTON_H, "START"),
            restart: Button::new(x, mid + 20.0, BUTTON_W, BUTTON_H, "RESTART"),
            quit: Button::new(x, mid + 90.0, BUTTON_W, BUTTON_H, "QUIT"),
        }
    }
}
