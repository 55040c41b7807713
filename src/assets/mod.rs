//! Optional Art Assets
//!
//! Every piece of art is optional. A slot that failed to load is simply absent
//! and each renderer has a fallback drawing for it, so nothing in here returns
//! an error.
//!
//! # Architecture
//!
//! - [`AssetSlot`] - the fixed set of named art slots
//! - [`Artwork`] - what loaded, with sizes; backgrounds pre-fitted to the canvas
//! - `loader` - SDL2 texture loading that produces an `Artwork` and its textures
//!
//! Renderers only need sizes and slot names; the pixels stay in the loader's
//! `TextureStore` and are drawn through `Surface::blit`.

pub mod loader;

use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH};
use sdl2::rect::Rect;
use std::collections::HashMap;

/// Named art slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    BgTitle,
    BgSettings,
    BgCredits,
    BgCharacter,
    BgName,
    /// Small rock icon, used as the slider knob and the settings pebble
    Rock,
    Character1,
    Character2,
    Character3,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; 9] = [
        AssetSlot::BgTitle,
        AssetSlot::BgSettings,
        AssetSlot::BgCredits,
        AssetSlot::BgCharacter,
        AssetSlot::BgName,
        AssetSlot::Rock,
        AssetSlot::Character1,
        AssetSlot::Character2,
        AssetSlot::Character3,
    ];

    /// Config key for the slot
    pub fn key(&self) -> &'static str {
        match self {
            AssetSlot::BgTitle => "bg_title",
            AssetSlot::BgSettings => "bg_settings",
            AssetSlot::BgCredits => "bg_credits",
            AssetSlot::BgCharacter => "bg_char",
            AssetSlot::BgName => "bg_name",
            AssetSlot::Rock => "rock",
            AssetSlot::Character1 => "char1",
            AssetSlot::Character2 => "char2",
            AssetSlot::Character3 => "char3",
        }
    }

    /// Portrait slot for a character index (0-2)
    pub fn character(index: usize) -> Option<AssetSlot> {
        match index {
            0 => Some(AssetSlot::Character1),
            1 => Some(AssetSlot::Character2),
            2 => Some(AssetSlot::Character3),
            _ => None,
        }
    }

    /// Backgrounds are cover-fitted to the whole canvas at load time
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            AssetSlot::BgTitle
                | AssetSlot::BgSettings
                | AssetSlot::BgCredits
                | AssetSlot::BgCharacter
                | AssetSlot::BgName
        )
    }
}

/// Pixel size of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtInfo {
    pub width: u32,
    pub height: u32,
}

/// A background image placed to cover the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub slot: AssetSlot,
    /// Where the whole image lands; may extend past the canvas edges
    pub dst: Rect,
}

/// Integer pixel scale closest to `ratio`, never below 1
fn pixel_scale(ratio: f32) -> u32 {
    ((ratio + 0.5) as u32).max(1)
}

/// Cover-fit an image onto the logical canvas
///
/// Scales by the integer factor nearest to the one that covers the canvas
/// (keeps pixels square), then centers, cropping the overflow evenly.
pub fn cover_fit(width: u32, height: u32) -> Rect {
    let width = width.max(1);
    let height = height.max(1);
    let sx = CANVAS_WIDTH as f32 / width as f32;
    let sy = CANVAS_HEIGHT as f32 / height as f32;
    let scale = pixel_scale(sx.max(sy));

    let scaled_w = width * scale;
    let scaled_h = height * scale;
    let offset_x = (scaled_w as i32 - CANVAS_WIDTH as i32).div_euclid(2);
    let offset_y = (scaled_h as i32 - CANVAS_HEIGHT as i32).div_euclid(2);

    Rect::new(-offset_x, -offset_y, scaled_w, scaled_h)
}

/// Size of an image scaled to roughly `target_height`, keeping aspect ratio
///
/// Uses an integer scale (at least 1x) to keep the pixel look, so the result
/// is the nearest whole multiple rather than exactly `target_height`.
pub fn fit_height(art: ArtInfo, target_height: u32) -> (u32, u32) {
    let height = art.height.max(1);
    let scale = pixel_scale(target_height as f32 / height as f32);
    (art.width * scale, height * scale)
}

/// Everything that loaded at start-up; immutable afterwards
#[derive(Debug, Clone, Default)]
pub struct Artwork {
    loaded: HashMap<AssetSlot, ArtInfo>,
    backdrops: HashMap<AssetSlot, Backdrop>,
}

impl Artwork {
    /// Artwork with every slot absent
    pub fn new() -> Self {
        Artwork {
            loaded: HashMap::new(),
            backdrops: HashMap::new(),
        }
    }

    /// Record a loaded image; backgrounds get their cover-fit computed here
    pub fn insert(&mut self, slot: AssetSlot, info: ArtInfo) {
        if slot.is_background() {
            self.backdrops.insert(
                slot,
                Backdrop {
                    slot,
                    dst: cover_fit(info.width, info.height),
                },
            );
        }
        self.loaded.insert(slot, info);
    }

    #[cfg(test)]
    pub fn with(mut self, slot: AssetSlot, info: ArtInfo) -> Self {
        self.insert(slot, info);
        self
    }

    pub fn get(&self, slot: AssetSlot) -> Option<ArtInfo> {
        self.loaded.get(&slot).copied()
    }

    pub fn backdrop(&self, slot: AssetSlot) -> Option<Backdrop> {
        self.backdrops.get(&slot).copied()
    }

    pub fn present_count(&self) -> usize {
        self.loaded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_fit_exact_size() {
        assert_eq!(cover_fit(400, 225), Rect::new(0, 0, 400, 225));
    }

    #[test]
    fn test_cover_fit_small_image_scales_up_and_crops() {
        // 100x100: needs 4x on x, 2.25x on y -> 4x, 400x400, 175 rows cropped
        let dst = cover_fit(100, 100);
        assert_eq!(dst, Rect::new(0, -87, 400, 400));
    }

    #[test]
    fn test_cover_fit_large_image_stays_1x_centered() {
        let dst = cover_fit(800, 300);
        assert_eq!(dst, Rect::new(-200, -37, 800, 300));
    }

    #[test]
    fn test_fit_height_integer_scale() {
        let art = ArtInfo { width: 16, height: 32 };
        assert_eq!(fit_height(art, 110), (48, 96)); // 3.4 -> 3x
        assert_eq!(fit_height(art, 10), (16, 32)); // never below 1x
    }

    #[test]
    fn test_character_slots() {
        assert_eq!(AssetSlot::character(0), Some(AssetSlot::Character1));
        assert_eq!(AssetSlot::character(2), Some(AssetSlot::Character3));
        assert_eq!(AssetSlot::character(3), None);
    }

    #[test]
    fn test_artwork_prefits_backgrounds_only() {
        let art = Artwork::new()
            .with(AssetSlot::BgTitle, ArtInfo { width: 400, height: 225 })
            .with(AssetSlot::Rock, ArtInfo { width: 8, height: 8 });

        assert_eq!(art.present_count(), 2);
        assert_eq!(
            art.backdrop(AssetSlot::BgTitle),
            Some(Backdrop {
                slot: AssetSlot::BgTitle,
                dst: Rect::new(0, 0, 400, 225)
            })
        );
        assert_eq!(art.backdrop(AssetSlot::Rock), None);
        assert_eq!(art.get(AssetSlot::BgName), None);
    }
}
