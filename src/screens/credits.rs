//! Credits screen: game blurb on the left, name roll on the right

use super::draw_background;
use crate::assets::{Artwork, AssetSlot};
use crate::config::ContentConfig;
use crate::gui::{HeaderBox, Panel, PanelStyle};
use crate::palette;
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
use crate::text::{GLYPH_ADVANCE, GLYPH_HEIGHT, draw_text, text_width, wrap_words};
use sdl2::rect::Rect;

const LINE_SPACING: i32 = 8;
const PADDING: i32 = 8;

/// Left and right text panels
pub fn panels() -> [Rect; 2] {
    let half = CANVAS_WIDTH as i32 / 2;
    let width = (half - 25) as u32;
    [
        Rect::new(20, 52, width, 146),
        Rect::new(half + 5, 52, width, 146),
    ]
}

/// Characters that fit on one panel line at scale 1
fn line_chars(panel: Rect) -> usize {
    (panel.width() as i32 - 2 * PADDING).max(0) as usize / GLYPH_ADVANCE as usize
}

/// Blurb lines as drawn in the left panel
fn blurb_lines(content: &ContentConfig, panel: Rect) -> Vec<String> {
    wrap_words(&content.credits_blurb, line_chars(panel))
}

/// Roll lines as drawn in the right panel; long entries are cut at the edge
fn roll_lines(content: &ContentConfig, panel: Rect) -> Vec<String> {
    let max_chars = line_chars(panel);
    content
        .credits_roll
        .iter()
        .map(|line| line.chars().take(max_chars).collect())
        .collect()
}

/// How many lines fit in `panel`
fn visible_lines(panel: Rect) -> usize {
    let first = panel.y() + PADDING - 2;
    let last = panel.bottom() - 4 - GLYPH_HEIGHT as i32;
    if last < first {
        0
    } else {
        ((last - first) / LINE_SPACING + 1) as usize
    }
}

/// Draw lines top-down inside `panel`, dropping any that would overflow it
fn draw_lines<S: Surface + ?Sized>(
    surface: &mut S,
    panel: Rect,
    lines: &[String],
) -> Result<(), String> {
    let mut y = panel.y() + PADDING - 2;
    for line in lines.iter().take(visible_lines(panel)) {
        draw_text(surface, line, panel.x() + PADDING, y, palette::WHITE, 1)?;
        y += LINE_SPACING;
    }
    Ok(())
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    art: &Artwork,
    content: &ContentConfig,
) -> Result<(), String> {
    draw_background(surface, art, AssetSlot::BgCredits)?;
    HeaderBox::new("CREDITS", 20, 190).draw(surface)?;

    let [left, right] = panels();
    for panel in [left, right] {
        Panel::new(panel, PanelStyle::text()).draw(surface)?;
    }

    draw_lines(surface, left, &blurb_lines(content, left))?;
    draw_lines(surface, right, &roll_lines(content, right))?;

    let footer_x = CANVAS_WIDTH as i32 / 2 - text_width(&content.credits_footer, 1) as i32 / 2;
    draw_text(
        surface,
        &content.credits_footer,
        footer_x,
        CANVAS_HEIGHT as i32 - 22,
        palette::WHITE,
        1,
    )?;
    draw_text(surface, "SPACE: BACK", 10, CANVAS_HEIGHT as i32 - 12, palette::WHITE, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, Recorder};

    #[test]
    fn test_text_stays_inside_panels() {
        let content = ContentConfig {
            credits_blurb: "word ".repeat(200),
            credits_roll: vec!["NAME".to_string(); 50],
            ..ContentConfig::default()
        };
        let [left, right] = panels();
        let mut recorder = Recorder::new();
        draw(&mut recorder, &Artwork::new(), &content).unwrap();

        let text_fills: Vec<Rect> = recorder
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Fill { rect, color } if *color == palette::WHITE => Some(*rect),
                _ => None,
            })
            .filter(|rect| rect.top() >= left.top() && rect.top() < left.bottom())
            .collect();

        assert!(!text_fills.is_empty());
        for rect in text_fills {
            let inside = |panel: Rect| rect.left() >= panel.left() && rect.right() <= panel.right();
            assert!(inside(left) || inside(right), "{:?}", rect);
            assert!(rect.bottom() <= left.bottom());
        }
    }

    #[test]
    fn test_empty_credits_still_draw_frame() {
        let content = ContentConfig {
            credits_blurb: String::new(),
            credits_roll: Vec::new(),
            ..ContentConfig::default()
        };
        let mut recorder = Recorder::new();
        draw(&mut recorder, &Artwork::new(), &content).unwrap();
        assert!(recorder.commands().iter().any(
            |cmd| matches!(cmd, DrawCmd::Fill { color, .. } if *color == palette::UI_PANEL)
        ));
    }

    #[test]
    fn test_default_credits_drawn_in_full() {
        let content = ContentConfig::default();
        let [left, right] = panels();
        let blurb = blurb_lines(&content, left);
        assert!(blurb.len() <= visible_lines(left), "{} lines", blurb.len());
        assert_eq!(blurb.last().map(String::as_str), Some("RPG."));
        assert!(content.credits_roll.len() <= visible_lines(right));
        assert_eq!(roll_lines(&content, right), content.credits_roll);
    }

    #[test]
    fn test_long_roll_entry_cut_at_panel_edge() {
        let content = ContentConfig {
            credits_roll: vec!["X".repeat(60), "  Short".to_string()],
            ..ContentConfig::default()
        };
        let right = panels()[1];
        let lines = roll_lines(&content, right);
        assert_eq!(lines[0].chars().count(), line_chars(right));
        assert_eq!(lines[1], "  Short");

        let text_right = right.x() + PADDING + text_width(&lines[0], 1) as i32;
        assert!(text_right <= right.right() - PADDING);
    }
}
