//! SDL2 art loading
//!
//! Loads every configured slot once, before the frame loop starts. A missing
//! file or a decode failure leaves the slot absent and prints one line.

use super::{ArtInfo, Artwork, AssetSlot};
use crate::config::AssetPaths;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::Path;

/// Textures for the slots that loaded, keyed by slot
pub struct TextureStore<'a> {
    textures: HashMap<AssetSlot, Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    pub fn get(&self, slot: AssetSlot) -> Option<&Texture<'a>> {
        self.textures.get(&slot)
    }
}

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Load all art slots, returning what loaded and the matching textures
pub fn load_artwork<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    paths: &AssetPaths,
) -> (Artwork, TextureStore<'a>) {
    let mut artwork = Artwork::new();
    let mut textures = HashMap::new();

    for slot in AssetSlot::ALL {
        let path = paths.path(slot);
        if !Path::new(path).exists() {
            println!("  - {}: {} not found, using fallback", slot.key(), path);
            continue;
        }

        match load_texture(texture_creator, path) {
            Ok(texture) => {
                let query = texture.query();
                artwork.insert(
                    slot,
                    ArtInfo {
                        width: query.width,
                        height: query.height,
                    },
                );
                textures.insert(slot, texture);
            }
            Err(e) => {
                eprintln!("Warning: {} ({} uses fallback)", e, slot.key());
            }
        }
    }

    println!(
        "Loaded {}/{} art slots",
        artwork.present_count(),
        AssetSlot::ALL.len()
    );

    (artwork, TextureStore { textures })
}
