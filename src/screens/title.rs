//! Title screen: game title, START and CREDITS buttons, and the settings
//! pebble in the top-left corner

use super::draw_background;
use crate::assets::{Artwork, AssetSlot, fit_height};
use crate::config::ContentConfig;
use crate::draw::{centered, fill_ellipse, inflate, stroke_ellipse, stroke_rounded_rect};
use crate::gui::Button;
use crate::palette;
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
use crate::text::{draw_text, draw_text_centered, text_width};
use sdl2::rect::{Point, Rect};

const HINT: &str = "W/S/A/D: NAV   SPACE: SELECT";

/// START and CREDITS, in focus order
pub fn buttons() -> [Button; 2] {
    [
        Button::long(Rect::new(60, 110, 280, 30), "START"),
        Button::new(Rect::new(85, 146, 230, 26), "CREDITS"),
    ]
}

/// Top-left rock that opens settings
pub fn pebble_rect() -> Rect {
    Rect::new(18, 14, 26, 22)
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    art: &Artwork,
    content: &ContentConfig,
    focus: usize,
) -> Result<(), String> {
    draw_background(surface, art, AssetSlot::BgTitle)?;

    draw_text_centered(
        surface,
        &content.title,
        Point::new(CANVAS_WIDTH as i32 / 2, 62),
        palette::WHITE,
        4,
    )?;

    for (i, button) in buttons().iter().enumerate() {
        button.draw(surface, focus == i)?;
    }

    let pebble = pebble_rect();
    match art.get(AssetSlot::Rock) {
        Some(rock) => {
            let (w, h) = fit_height(rock, pebble.height());
            surface.blit(AssetSlot::Rock, centered(pebble.center(), w, h))?;
        }
        None => {
            fill_ellipse(surface, pebble, palette::PEBBLE_FALLBACK)?;
            stroke_ellipse(surface, pebble, 2, palette::BLACK)?;
        }
    }
    if focus == 2 {
        stroke_rounded_rect(surface, inflate(pebble, 8, 8), 8, 2, palette::WHITE)?;
    }

    let hint_x = CANVAS_WIDTH as i32 - text_width(HINT, 1) as i32 - 10;
    draw_text(surface, HINT, hint_x, CANVAS_HEIGHT as i32 - 18, palette::WHITE, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ArtInfo;
    use crate::surface::{DrawCmd, Recorder};

    fn record(art: &Artwork, focus: usize) -> Recorder {
        let mut recorder = Recorder::new();
        draw(&mut recorder, art, &ContentConfig::default(), focus).unwrap();
        recorder
    }

    #[test]
    fn test_pebble_outline_only_when_focused() {
        let outline = inflate(pebble_rect(), 8, 8);
        let touches_outline = |recorder: &Recorder| {
            recorder.commands().iter().any(|cmd| match cmd {
                DrawCmd::Fill { rect, color } => {
                    *color == palette::WHITE && rect.top() == outline.top()
                }
                DrawCmd::Blit { .. } => false,
            })
        };

        assert!(touches_outline(&record(&Artwork::new(), 2)));
        assert!(!touches_outline(&record(&Artwork::new(), 0)));
    }

    #[test]
    fn test_pebble_uses_rock_art() {
        let art = Artwork::new().with(AssetSlot::Rock, ArtInfo { width: 13, height: 11 });
        let recorder = record(&art, 0);
        // 22 / 11 = 2x, centered on the pebble
        assert!(recorder.commands().contains(&DrawCmd::Blit {
            slot: AssetSlot::Rock,
            dst: Rect::new(18, 14, 26, 22),
        }));
    }

    #[test]
    fn test_buttons_layout() {
        let [start, credits] = buttons();
        assert!(start.long);
        assert!(!credits.long);
        assert_eq!(start.label, "START");
        assert_eq!(credits.label, "CREDITS");
    }
}
