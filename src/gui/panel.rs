//! Panels and header boxes
//!
//! Rounded brown boxes with a darker border. Settings, credits, character
//! select and name entry all frame their content with these.

use crate::draw::{fill_rounded_rect, stroke_rounded_rect};
use crate::palette;
use crate::surface::{CANVAS_WIDTH, Surface};
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Configuration for panel appearance
#[derive(Debug, Clone)]
pub struct PanelStyle {
    /// Fill color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Border thickness, drawn inward
    pub border_thickness: i32,

    /// Corner radius
    pub radius: i32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        PanelStyle {
            background_color: palette::UI_PANEL,
            border_color: palette::UI_BROWN_DARK,
            border_thickness: 6,
            radius: 16,
        }
    }
}

impl PanelStyle {
    /// Brown box used behind screen headings
    pub fn header() -> Self {
        PanelStyle {
            background_color: palette::UI_BROWN,
            border_thickness: 4,
            radius: 12,
            ..Default::default()
        }
    }

    /// Thinner panel used for blocks of text
    pub fn text() -> Self {
        PanelStyle {
            border_thickness: 4,
            radius: 12,
            ..Default::default()
        }
    }

    /// Input box on the name entry screen
    pub fn input() -> Self {
        PanelStyle {
            background_color: palette::UI_BROWN,
            radius: 14,
            ..Default::default()
        }
    }
}

/// A framed box
#[derive(Debug, Clone)]
pub struct Panel {
    pub rect: Rect,
    pub style: PanelStyle,
}

impl Panel {
    pub fn new(rect: Rect, style: PanelStyle) -> Self {
        Panel { rect, style }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        fill_rounded_rect(
            surface,
            self.rect,
            self.style.radius,
            self.style.background_color,
        )?;
        stroke_rounded_rect(
            surface,
            self.rect,
            self.style.radius,
            self.style.border_thickness,
            self.style.border_color,
        )
    }
}

/// Screen heading: a header panel centered horizontally with a label
#[derive(Debug, Clone)]
pub struct HeaderBox {
    panel: Panel,
    label: String,
}

impl HeaderBox {
    /// Header of `width` x 28 at `y`, centered on the canvas
    pub fn new(label: &str, y: i32, width: u32) -> Self {
        let x = (CANVAS_WIDTH as i32 - width as i32) / 2;
        HeaderBox {
            panel: Panel::new(Rect::new(x, y, width, 28), PanelStyle::header()),
            label: label.to_string(),
        }
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.panel.rect
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        self.panel.draw(surface)?;
        draw_text_centered(surface, &self.label, self.panel.rect.center(), palette::WHITE, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, Recorder};

    #[test]
    fn test_header_is_centered() {
        let header = HeaderBox::new("SETTINGS", 20, 190);
        assert_eq!(header.rect(), Rect::new(105, 20, 190, 28));
        assert_eq!(header.rect().center().x(), 200);
    }

    #[test]
    fn test_header_style_overrides() {
        let style = PanelStyle::header();
        assert_eq!(style.border_thickness, 4);
        assert_eq!(style.background_color, palette::UI_BROWN);
        assert_eq!(style.border_color, palette::UI_BROWN_DARK);
    }

    #[test]
    fn test_panel_draws_fill_then_border() {
        let mut recorder = Recorder::new();
        let panel = Panel::new(Rect::new(26, 56, 348, 120), PanelStyle::default());
        panel.draw(&mut recorder).unwrap();

        // Middle rows of the rounded fill merge into one full-width rect
        let first = &recorder.commands()[0];
        assert!(matches!(first, DrawCmd::Fill { color, .. } if *color == palette::UI_PANEL));
        assert!(recorder.commands().iter().any(|cmd| matches!(
            cmd,
            DrawCmd::Fill { rect, color }
                if *color == palette::UI_PANEL && rect.width() == 348 && rect.height() > 80
        )));
        assert!(recorder.commands().iter().any(
            |cmd| matches!(cmd, DrawCmd::Fill { color, .. } if *color == palette::UI_BROWN_DARK)
        ));
    }
}
