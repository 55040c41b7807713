//! Screen Renderers
//!
//! One render function per screen. Each is a pure function of the navigator
//! state, the loaded artwork and the configured text: it paints the whole
//! canvas and mutates nothing, so the same state always produces the same
//! draw calls.
//!
//! Every screen that has a background slot draws the pre-fitted backdrop when
//! the art is present, and a flat fill otherwise.

pub mod character_select;
pub mod credits;
pub mod name_entry;
pub mod placeholder;
pub mod settings;
pub mod title;

use crate::assets::{Artwork, AssetSlot};
use crate::config::ContentConfig;
use crate::navigation::{Navigator, Screen};
use crate::palette;
use crate::surface::Surface;

/// Paint the active screen
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    nav: &Navigator,
    art: &Artwork,
    content: &ContentConfig,
) -> Result<(), String> {
    match nav.screen() {
        Screen::Title => title::draw(surface, art, content, nav.title_focus()),
        Screen::Settings => settings::draw(surface, art, nav.settings()),
        Screen::Credits => credits::draw(surface, art, content),
        Screen::CharacterSelect => character_select::draw(surface, art, nav.character_index()),
        Screen::NameEntry => name_entry::draw(surface, art, nav.character_index(), nav.name()),
        Screen::NextPagePlaceholder => placeholder::draw(surface),
    }
}

/// Backdrop art if loaded, flat fill if not
fn draw_background<S: Surface + ?Sized>(
    surface: &mut S,
    art: &Artwork,
    slot: AssetSlot,
) -> Result<(), String> {
    match art.backdrop(slot) {
        Some(backdrop) => {
            // Rounded-down scales can leave edges uncovered
            surface.clear(palette::BLACK)?;
            surface.blit(backdrop.slot, backdrop.dst)
        }
        None => surface.clear(palette::BACKGROUND_FALLBACK),
    }
}
