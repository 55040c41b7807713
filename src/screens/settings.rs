//! Settings screen: volume and brightness sliders on a panel

use super::draw_background;
use crate::assets::{Artwork, AssetSlot};
use crate::gui::{HeaderBox, Panel, PanelStyle};
use crate::navigation::SettingsState;
use crate::palette;
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
use crate::text::draw_text;
use sdl2::rect::Rect;

const HINT: &str = "W/S: SELECT SLIDER   A/D: ADJUST   SPACE: BACK";

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    art: &Artwork,
    settings: &SettingsState,
) -> Result<(), String> {
    draw_background(surface, art, AssetSlot::BgSettings)?;

    Panel::new(
        Rect::new(26, 56, CANVAS_WIDTH - 52, 120),
        PanelStyle::default(),
    )
    .draw(surface)?;
    HeaderBox::new("SETTINGS", 20, 190).draw(surface)?;

    for (i, slider) in settings.sliders().iter().enumerate() {
        slider.draw(surface, art, settings.focus() == i)?;
    }

    draw_text(
        surface,
        HINT,
        CANVAS_WIDTH as i32 / 2 - 150,
        CANVAS_HEIGHT as i32 - 20,
        palette::WHITE,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ArtInfo;
    use crate::gui::slider::tests::outline_fills;
    use crate::navigation::{InputEvent, Navigator};
    use crate::surface::Recorder;

    #[test]
    fn test_both_knobs_use_rock() {
        let art = Artwork::new()
            .with(AssetSlot::BgSettings, ArtInfo { width: 400, height: 225 })
            .with(AssetSlot::Rock, ArtInfo { width: 8, height: 8 });
        let mut recorder = Recorder::new();
        draw(&mut recorder, &art, &SettingsState::new()).unwrap();
        assert_eq!(
            recorder.blitted_slots(),
            vec![AssetSlot::BgSettings, AssetSlot::Rock, AssetSlot::Rock]
        );
    }

    #[test]
    fn test_focus_moves_outline_between_sliders() {
        let mut nav = Navigator::new();
        nav.handle_all([InputEvent::Right, InputEvent::Right, InputEvent::Confirm]);

        let mut first = Recorder::new();
        draw(&mut first, &Artwork::new(), nav.settings()).unwrap();
        let [volume, brightness] = nav.settings().sliders();
        assert!(outline_fills(&first, volume) > 0);
        assert_eq!(outline_fills(&first, brightness), 0);

        nav.handle(InputEvent::Down);
        assert_eq!(nav.settings().focus(), 1);
        let mut second = Recorder::new();
        draw(&mut second, &Artwork::new(), nav.settings()).unwrap();
        let [volume, brightness] = nav.settings().sliders();
        assert_eq!(outline_fills(&second, volume), 0);
        assert!(outline_fills(&second, brightness) > 0);
    }
}
