//! Terminal screen shown after name entry

use crate::palette;
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
use crate::text::draw_text_centered;
use sdl2::rect::Point;

pub fn draw<S: Surface + ?Sized>(surface: &mut S) -> Result<(), String> {
    surface.clear(palette::PLACEHOLDER_BACKGROUND)?;
    draw_text_centered(
        surface,
        "NEXT PAGE PLACEHOLDER",
        Point::new(CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 / 2),
        palette::WHITE,
        2,
    )
}
