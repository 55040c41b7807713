//! Character select screen: three cards, the chosen one outlined

use super::draw_background;
use crate::assets::{Artwork, AssetSlot};
use crate::gui::{CharacterCard, HeaderBox};
use crate::navigation::CHARACTER_COUNT;
use crate::palette;
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
use crate::text::draw_text_centered;
use sdl2::rect::Point;

const CARD_SPACING: i32 = 90;

/// Cards for every character slot, left to right
pub fn cards() -> [CharacterCard; CHARACTER_COUNT] {
    let mid = CANVAS_WIDTH as i32 / 2;
    [
        CharacterCard::centered_at(mid - CARD_SPACING),
        CharacterCard::centered_at(mid),
        CharacterCard::centered_at(mid + CARD_SPACING),
    ]
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    art: &Artwork,
    selected: usize,
) -> Result<(), String> {
    draw_background(surface, art, AssetSlot::BgCharacter)?;
    HeaderBox::new("CHOOSE YOUR CHARACTER", 16, 300).draw(surface)?;

    for (i, card) in cards().iter().enumerate() {
        card.draw(surface, art, i, i == selected)?;
    }

    draw_text_centered(
        surface,
        "A/D: SWITCH     SPACE: ENTER",
        Point::new(CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 - 18),
        palette::WHITE,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ArtInfo;
    use crate::surface::Recorder;

    #[test]
    fn test_cards_spaced_around_center() {
        let xs: Vec<i32> = cards().iter().map(|c| c.rect.center().x()).collect();
        assert_eq!(xs, vec![110, 200, 290]);
    }

    #[test]
    fn test_partial_portraits() {
        // Only the middle portrait loaded; the others show placeholders
        let art = Artwork::new().with(AssetSlot::Character2, ArtInfo { width: 16, height: 32 });
        let mut recorder = Recorder::new();
        draw(&mut recorder, &art, 0).unwrap();
        assert_eq!(recorder.blitted_slots(), vec![AssetSlot::Character2]);
    }
}
