//! Shared UI colors

use sdl2::pixels::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b, a: 255 }
}

pub const WHITE: Color = rgb(245, 245, 245);
pub const BLACK: Color = rgb(15, 15, 15);
pub const UI_BROWN: Color = rgb(125, 77, 52);
pub const UI_BROWN_DARK: Color = rgb(80, 46, 33);
pub const UI_PANEL: Color = rgb(118, 83, 63);

/// Background when a screen's backdrop art is absent
pub const BACKGROUND_FALLBACK: Color = rgb(60, 60, 60);
pub const PLACEHOLDER_BACKGROUND: Color = rgb(20, 20, 20);

pub const KNOB_FALLBACK: Color = rgb(200, 200, 200);
pub const PEBBLE_FALLBACK: Color = rgb(170, 170, 170);
pub const CARD_FILL: Color = rgb(10, 10, 10);
pub const CARD_PLACEHOLDER: Color = rgb(80, 80, 80);
