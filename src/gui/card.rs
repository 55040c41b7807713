//! Character card widget
//!
//! A dark framed card showing one character portrait. Without a portrait the
//! card shows an empty placeholder border.

use crate::assets::{Artwork, AssetSlot, fit_height};
use crate::draw::{centered, fill_rounded_rect, inflate, stroke_rounded_rect};
use crate::palette;
use crate::surface::{CANVAS_HEIGHT, Surface};
use sdl2::rect::{Point, Rect};

pub const CARD_WIDTH: u32 = 84;
pub const CARD_HEIGHT: u32 = 132;

/// Portraits are fitted to about this height
pub const PORTRAIT_HEIGHT: u32 = 110;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterCard {
    pub rect: Rect,
}

impl CharacterCard {
    /// Card centered horizontally on `center_x`, slightly below canvas middle
    pub fn centered_at(center_x: i32) -> Self {
        let center = Point::new(center_x, CANVAS_HEIGHT as i32 / 2 + 12);
        CharacterCard {
            rect: centered(center, CARD_WIDTH, CARD_HEIGHT),
        }
    }

    /// Draw the card for character `index` (0-2)
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        art: &Artwork,
        index: usize,
        selected: bool,
    ) -> Result<(), String> {
        fill_rounded_rect(surface, self.rect, 6, palette::CARD_FILL)?;

        let portrait = AssetSlot::character(index)
            .and_then(|slot| art.get(slot).map(|info| (slot, info)));
        match portrait {
            Some((slot, info)) => {
                let (w, h) = fit_height(info, PORTRAIT_HEIGHT);
                surface.blit(slot, centered(self.rect.center(), w, h))?;
            }
            None => {
                stroke_rounded_rect(
                    surface,
                    inflate(self.rect, -8, -8),
                    6,
                    2,
                    palette::CARD_PLACEHOLDER,
                )?;
            }
        }

        if selected {
            stroke_rounded_rect(surface, inflate(self.rect, 6, 6), 8, 2, palette::WHITE)?;
        }

        Ok(())
    }
}
