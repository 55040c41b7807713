//! Button widget
//!
//! Buttons are immutable geometry plus a label. They have no input handling:
//! focus and activation belong to the `Navigator`, and the screen renderer
//! just passes `focused` in.

use crate::draw::{fill_rounded_rect, inflate, stroke_rounded_rect};
use crate::palette;
use crate::surface::Surface;
use crate::text::draw_text_centered;
use sdl2::rect::Rect;

/// Corner radius of wide buttons
const LONG_RADIUS: i32 = 10;

/// Corner radius of standard buttons
const STANDARD_RADIUS: i32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    /// Wide button; only changes how it is drawn
    pub long: bool,
}

impl Button {
    /// Creates a standard button
    pub fn new(rect: Rect, label: &str) -> Self {
        Button {
            rect,
            label: label.to_string(),
            long: false,
        }
    }

    /// Creates a wide button
    pub fn long(rect: Rect, label: &str) -> Self {
        Button {
            long: true,
            ..Button::new(rect, label)
        }
    }

    fn radius(&self) -> i32 {
        if self.long { LONG_RADIUS } else { STANDARD_RADIUS }
    }

    /// Rounded brown body, dark border, centered label, and a white
    /// outline just outside the bounds when focused
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, focused: bool) -> Result<(), String> {
        fill_rounded_rect(surface, self.rect, self.radius(), palette::UI_BROWN)?;
        stroke_rounded_rect(surface, self.rect, self.radius(), 6, palette::UI_BROWN_DARK)?;
        draw_text_centered(surface, &self.label, self.rect.center(), palette::WHITE, 2)?;

        if focused {
            stroke_rounded_rect(
                surface,
                inflate(self.rect, 6, 6),
                self.radius() + 2,
                2,
                palette::WHITE,
            )?;
        }

        Ok(())
    }
}
