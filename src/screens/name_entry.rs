//! Name entry screen: chosen character and the typed name

use super::draw_background;
use crate::assets::{Artwork, AssetSlot};
use crate::gui::{CharacterCard, Panel, PanelStyle};
use crate::navigation::NameBuffer;
use crate::palette;
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
use crate::text::{draw_text, draw_text_centered};
use sdl2::rect::{Point, Rect};

/// Name input box along the bottom of the screen
pub fn input_box() -> Rect {
    Rect::new(26, CANVAS_HEIGHT as i32 - 72, CANVAS_WIDTH - 52, 28)
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    art: &Artwork,
    character: usize,
    name: &NameBuffer,
) -> Result<(), String> {
    draw_background(surface, art, AssetSlot::BgName)?;
    CharacterCard::centered_at(CANVAS_WIDTH as i32 / 2).draw(surface, art, character, false)?;

    let input = input_box();
    Panel::new(input, PanelStyle::input()).draw(surface)?;
    draw_text(surface, "ENTER NAME:", input.x() + 12, input.y() + 7, palette::WHITE, 2)?;
    draw_text(surface, name.as_str(), input.x() + 150, input.y() + 7, palette::WHITE, 2)?;

    draw_text_centered(
        surface,
        "PRESS  SPACE  TO  ENTER",
        Point::new(CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 - 18),
        palette::WHITE,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MAX_NAME_LEN;
    use crate::surface::{DrawCmd, Recorder};
    use crate::text::text_width;

    #[test]
    fn test_longest_name_fits_box() {
        let input = input_box();
        let longest = "W".repeat(MAX_NAME_LEN);
        assert!(input.x() + 150 + text_width(&longest, 2) as i32 <= input.right() - 6);
    }

    #[test]
    fn test_typed_name_is_drawn() {
        let mut empty = Recorder::new();
        let mut typed = Recorder::new();
        let mut name = NameBuffer::new();
        draw(&mut empty, &Artwork::new(), 0, &name).unwrap();
        name.push('A');
        draw(&mut typed, &Artwork::new(), 0, &name).unwrap();

        let whites = |r: &Recorder| {
            r.commands()
                .iter()
                .filter(|cmd| matches!(cmd, DrawCmd::Fill { color, .. } if *color == palette::WHITE))
                .count()
        };
        assert!(whites(&typed) > whites(&empty));
    }

    #[test]
    fn test_card_not_outlined() {
        let mut recorder = Recorder::new();
        draw(&mut recorder, &Artwork::new(), 1, &NameBuffer::new()).unwrap();
        let card = CharacterCard::centered_at(200).rect;
        let outline_top = card.top() - 3;
        assert!(!recorder.commands().iter().any(|cmd| matches!(
            cmd,
            DrawCmd::Fill { rect, color } if *color == palette::WHITE && rect.top() == outline_top
        )));
    }
}
