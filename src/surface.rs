//! Drawing Surface
//!
//! Every screen renders into a [`Surface`]: a 400x225 logical canvas that only
//! knows how to fill rectangles and blit loaded art. Rounded boxes, ellipses and
//! bitmap text are all built procedurally on top of `fill_rect` (see `draw` and
//! `text`), the same way the bitmap font draws glyphs out of SDL2 rectangles.
//!
//! Two implementations exist:
//! - [`CanvasSurface`] - draws onto the SDL2 window canvas
//! - [`Recorder`] - collects [`DrawCmd`]s, used for headless dumps and tests

use crate::assets::AssetSlot;
use crate::assets::loader::TextureStore;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Logical canvas width in pixels
pub const CANVAS_WIDTH: u32 = 400;

/// Logical canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 225;

/// Rectangle covering the whole logical canvas
pub fn canvas_rect() -> Rect {
    Rect::new(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// Target of all screen rendering
pub trait Surface {
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draw the art loaded for `slot`, scaled to fill `dst`
    fn blit(&mut self, slot: AssetSlot, dst: Rect) -> Result<(), String>;

    /// Fill the whole logical canvas
    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.fill_rect(canvas_rect(), color)
    }
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill { rect: Rect, color: Color },
    Blit { slot: AssetSlot, dst: Rect },
}

/// Surface that records draw calls instead of touching a window
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }
}

#[cfg(test)]
impl Recorder {
    /// Slots blitted so far, in draw order
    pub fn blitted_slots(&self) -> Vec<AssetSlot> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Blit { slot, .. } => Some(*slot),
                DrawCmd::Fill { .. } => None,
            })
            .collect()
    }

    /// True if some fill used exactly this rect and color
    pub fn has_fill(&self, rect: Rect, color: Color) -> bool {
        self.commands
            .iter()
            .any(|cmd| *cmd == DrawCmd::Fill { rect, color })
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.commands.push(DrawCmd::Fill { rect, color });
        Ok(())
    }

    fn blit(&mut self, slot: AssetSlot, dst: Rect) -> Result<(), String> {
        self.commands.push(DrawCmd::Blit { slot, dst });
        Ok(())
    }
}

/// Surface backed by the SDL2 window canvas
///
/// The canvas must already have its logical size set to
/// `CANVAS_WIDTH x CANVAS_HEIGHT`; SDL2 handles the nearest-neighbour upscale.
pub struct CanvasSurface<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    textures: &'c TextureStore<'t>,
}

impl<'c, 't> CanvasSurface<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, textures: &'c TextureStore<'t>) -> Self {
        CanvasSurface { canvas, textures }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn blit(&mut self, slot: AssetSlot, dst: Rect) -> Result<(), String> {
        match self.textures.get(slot) {
            Some(texture) => self.canvas.copy(texture, None, dst),
            // Renderers only blit slots the artwork reports as present
            None => Ok(()),
        }
    }
}
