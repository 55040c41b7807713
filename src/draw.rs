//! Procedural shape rendering
//!
//! Rounded rectangles and ellipses are rasterized row by row into horizontal
//! runs, and identical consecutive rows are merged into a single `fill_rect`.
//! Outlines are rings: the outer shape minus the same shape shrunk by the
//! border thickness.

use crate::surface::Surface;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Horizontal runs covered on one row, `(start, end)` with `end` exclusive
type Row = Vec<(i32, i32)>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Rounded(i32),
    Ellipse,
}

impl Shape {
    /// Covered run on `row` (0 = top of `rect`)
    fn span(&self, rect: Rect, row: i32) -> Option<(i32, i32)> {
        let w = rect.width() as i32;
        let h = rect.height() as i32;
        if row < 0 || row >= h {
            return None;
        }

        match *self {
            Shape::Rounded(radius) => {
                let r = radius.min(w / 2).min(h / 2).max(0);
                let dy = if row < r {
                    r as f32 - row as f32 - 0.5
                } else if row >= h - r {
                    (row - (h - r)) as f32 + 0.5
                } else {
                    0.0
                };
                let inset = if dy > 0.0 {
                    let rf = r as f32;
                    (rf - (rf * rf - dy * dy).max(0.0).sqrt()).round() as i32
                } else {
                    0
                };
                Some((rect.x() + inset, rect.x() + w - inset))
            }
            Shape::Ellipse => {
                let rx = w as f32 / 2.0;
                let ry = h as f32 / 2.0;
                let dy = (row as f32 + 0.5) - ry;
                let t = 1.0 - (dy / ry) * (dy / ry);
                if t <= 0.0 {
                    return None;
                }
                let half = rx * t.sqrt();
                let cx = rect.x() as f32 + rx;
                let (a, b) = ((cx - half).round() as i32, (cx + half).round() as i32);
                if b > a { Some((a, b)) } else { None }
            }
        }
    }

    fn shrunk(&self, thickness: i32) -> Shape {
        match *self {
            Shape::Rounded(radius) => Shape::Rounded((radius - thickness).max(0)),
            Shape::Ellipse => Shape::Ellipse,
        }
    }
}

/// Grow (or shrink, with negative deltas) a rect around its center
///
/// `dx`/`dy` are total size changes, so each edge moves by half.
pub fn inflate(rect: Rect, dx: i32, dy: i32) -> Rect {
    let w = (rect.width() as i32 + dx).max(1);
    let h = (rect.height() as i32 + dy).max(1);
    Rect::new(
        rect.x() - dx.div_euclid(2),
        rect.y() - dy.div_euclid(2),
        w as u32,
        h as u32,
    )
}

/// Rect of the given size centered on `center`
pub fn centered(center: Point, width: u32, height: u32) -> Rect {
    Rect::new(
        center.x() - (width / 2) as i32,
        center.y() - (height / 2) as i32,
        width,
        height,
    )
}

/// Filled rectangle with rounded corners
pub fn fill_rounded_rect<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    fill_shape(surface, rect, Shape::Rounded(radius), color)
}

/// Rounded rectangle border, drawn inward from `rect`
pub fn stroke_rounded_rect<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    radius: i32,
    thickness: i32,
    color: Color,
) -> Result<(), String> {
    stroke_shape(surface, rect, Shape::Rounded(radius), thickness, color)
}

/// Filled ellipse inscribed in `rect`
pub fn fill_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    color: Color,
) -> Result<(), String> {
    fill_shape(surface, rect, Shape::Ellipse, color)
}

/// Ellipse border inscribed in `rect`
pub fn stroke_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    thickness: i32,
    color: Color,
) -> Result<(), String> {
    stroke_shape(surface, rect, Shape::Ellipse, thickness, color)
}

fn fill_shape<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    shape: Shape,
    color: Color,
) -> Result<(), String> {
    let rows: Vec<Row> = (0..rect.height() as i32)
        .map(|row| shape.span(rect, row).into_iter().collect())
        .collect();
    paint_rows(surface, rect.y(), &rows, color)
}

fn stroke_shape<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    shape: Shape,
    thickness: i32,
    color: Color,
) -> Result<(), String> {
    let t = thickness.max(1);
    let inner_w = rect.width() as i32 - 2 * t;
    let inner_h = rect.height() as i32 - 2 * t;
    if inner_w <= 0 || inner_h <= 0 {
        return fill_shape(surface, rect, shape, color);
    }

    let inner = Rect::new(rect.x() + t, rect.y() + t, inner_w as u32, inner_h as u32);
    let inner_shape = shape.shrunk(t);

    let rows: Vec<Row> = (0..rect.height() as i32)
        .map(|row| {
            let Some((a, b)) = shape.span(rect, row) else {
                return Vec::new();
            };
            match inner_shape.span(inner, row - t) {
                Some((c, d)) => [(a, c.max(a)), (d.min(b), b)]
                    .into_iter()
                    .filter(|(start, end)| end > start)
                    .collect(),
                None => vec![(a, b)],
            }
        })
        .collect();
    paint_rows(surface, rect.y(), &rows, color)
}

fn paint_rows<S: Surface + ?Sized>(
    surface: &mut S,
    top: i32,
    rows: &[Row],
    color: Color,
) -> Result<(), String> {
    let mut start = 0;
    while start < rows.len() {
        let mut end = start + 1;
        while end < rows.len() && rows[end] == rows[start] {
            end += 1;
        }

        for &(a, b) in &rows[start] {
            if b > a {
                surface.fill_rect(
                    Rect::new(a, top + start as i32, (b - a) as u32, (end - start) as u32),
                    color,
                )?;
            }
        }
        start = end;
    }

    Ok(())
}
