//! Bitmap Text Rendering
//!
//! Procedural text rendering using a 5x7 bitmap font. Glyphs are drawn as
//! `fill_rect` calls on a [`Surface`], so text goes through the same seam as
//! every other shape. Lowercase input renders as uppercase.

use crate::surface::Surface;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Horizontal advance per character at scale 1 (5 pixels + 1 spacing)
pub const GLYPH_ADVANCE: u32 = 6;

/// Glyph height at scale 1
pub const GLYPH_HEIGHT: u32 = 7;

/// Drawn in place of characters the font has no glyph for
const FULL_BLOCK: &[u8] = &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111];

/// 5x7 bitmap rows for a character (1 = pixel on)
fn glyph(c: char) -> &'static [u8] {
    lookup(c).unwrap_or(FULL_BLOCK)
}

/// True if the font can draw `c` (lowercase counts, it renders as uppercase)
pub fn has_glyph(c: char) -> bool {
    lookup(c).is_some()
}

fn lookup(c: char) -> Option<&'static [u8]> {
    let rows: &'static [u8] = match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => &[0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '&' => &[0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '_' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Rendered width of `text` in pixels, without trailing letter spacing
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        0
    } else {
        count * GLYPH_ADVANCE * scale - scale
    }
}

/// Renders bitmap text with its top-left corner at (`x`, `y`)
///
/// # Parameters
///
/// - `surface`: target to draw on
/// - `text`: text to render (case-insensitive)
/// - `x`, `y`: top-left position in logical pixels
/// - `color`: text color
/// - `scale`: scaling factor (1 = 5x7 pixels, 2 = 10x14 pixels, etc.)
pub fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let char_width = (GLYPH_ADVANCE * scale) as i32;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * char_width;

        for (row, &pattern_row) in glyph(c).iter().enumerate() {
            // Merge horizontal runs of lit pixels into one rect
            let mut col = 0;
            while col < 5 {
                if (pattern_row >> (4 - col)) & 1 == 0 {
                    col += 1;
                    continue;
                }
                let run_start = col;
                while col < 5 && (pattern_row >> (4 - col)) & 1 == 1 {
                    col += 1;
                }
                surface.fill_rect(
                    Rect::new(
                        char_x + run_start * pixel_size,
                        y + row as i32 * pixel_size,
                        (col - run_start) as u32 * scale,
                        scale,
                    ),
                    color,
                )?;
            }
        }
    }

    Ok(())
}

/// Renders text centered on `center`
pub fn draw_text_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center: Point,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let x = center.x() - (text_width(text, scale) / 2) as i32;
    let y = center.y() - (GLYPH_HEIGHT * scale / 2) as i32;
    draw_text(surface, text, x, y, color, scale)
}

/// Greedy word wrap to at most `max_chars` characters per line
///
/// Words longer than a line are split. Blank input yields no lines.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            current.chars().count() + 1 + word.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, Recorder};

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("GAME", 4), 4 * 24 - 4);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let mut lower = Recorder::new();
        let mut upper = Recorder::new();
        let white = Color::RGB(255, 255, 255);
        draw_text(&mut lower, "start", 0, 0, white, 2).unwrap();
        draw_text(&mut upper, "START", 0, 0, white, 2).unwrap();
        assert_eq!(lower.commands(), upper.commands());
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut recorder = Recorder::new();
        draw_text(&mut recorder, "   ", 0, 0, Color::RGB(0, 0, 0), 1).unwrap();
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_glyph_runs_are_merged() {
        // 'T' top row is a single 5-pixel run
        let mut recorder = Recorder::new();
        let c = Color::RGB(1, 1, 1);
        draw_text(&mut recorder, "T", 10, 20, c, 2).unwrap();
        assert_eq!(
            recorder.commands()[0],
            DrawCmd::Fill {
                rect: Rect::new(10, 20, 10, 2),
                color: c
            }
        );
        // Top bar + six stem rows
        assert_eq!(recorder.commands().len(), 7);
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_words("a pixelated RPG adventure where you", 12);
        assert_eq!(lines, vec!["a pixelated", "RPG", "adventure", "where you"]);

        for line in wrap_words("the quick brown fox jumps over the lazy dog", 10) {
            assert!(line.chars().count() <= 10);
        }
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_words("   ", 5).is_empty());
    }

    #[test]
    fn test_has_glyph() {
        assert!(has_glyph('a'));
        assert!(has_glyph('Z'));
        assert!(has_glyph(' '));
        assert!(has_glyph('?'));
        assert!(!has_glyph('é'));
        assert!(!has_glyph('\u{a0}'));
        assert!(!has_glyph('\u{200b}'));
    }
}
