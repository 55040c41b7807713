//! Slider widget
//!
//! A labelled horizontal track holding a value in [0.0, 1.0]. The value only
//! changes through [`Slider::adjust`], which saturates at both ends.

use crate::assets::{Artwork, AssetSlot, fit_height};
use crate::draw::{centered, fill_ellipse, fill_rounded_rect, inflate, stroke_ellipse, stroke_rounded_rect};
use crate::palette;
use crate::surface::Surface;
use crate::text::draw_text;
use sdl2::rect::Rect;

/// Knob travel is the inner bar width minus this
pub const KNOB_WIDTH: i32 = 20;

/// Track height in pixels
const TRACK_HEIGHT: u32 = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub rect: Rect,
    pub label: String,
    value: f32,
}

impl Slider {
    /// Creates a slider; the starting value is clamped into range
    pub fn new(rect: Rect, label: &str, value: f32) -> Self {
        Slider {
            rect,
            label: label.to_string(),
            value: value.clamp(0.0, 1.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move the value by `delta`, saturating at 0.0 and 1.0
    pub fn adjust(&mut self, delta: f32) {
        self.value = (self.value + delta).clamp(0.0, 1.0);
    }

    /// Dark track behind the bar
    pub fn track(&self) -> Rect {
        Rect::new(self.rect.x(), self.rect.y(), self.rect.width(), TRACK_HEIGHT)
    }

    /// Light bar inset into the track
    pub fn inner(&self) -> Rect {
        let track = self.track();
        Rect::new(
            track.x() + 6,
            track.y() + 4,
            track.width().saturating_sub(12),
            track.height() - 8,
        )
    }

    /// Left edge of the knob: linear across the inner bar, leaving room
    /// for the knob at the right end
    pub fn knob_x(&self) -> i32 {
        let inner = self.inner();
        let travel = (inner.width() as i32 - KNOB_WIDTH).max(0);
        inner.x() + (self.value * travel as f32) as i32
    }

    fn knob(&self) -> Rect {
        let inner = self.inner();
        Rect::new(self.knob_x(), inner.y() - 4, 28, inner.height() + 8)
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        art: &Artwork,
        focused: bool,
    ) -> Result<(), String> {
        let label = format!("{}:", self.label);
        draw_text(surface, &label, self.rect.x(), self.rect.y() - 26, palette::WHITE, 2)?;

        let track = self.track();
        let inner = self.inner();
        fill_rounded_rect(surface, track, 12, palette::UI_BROWN_DARK)?;
        fill_rounded_rect(surface, inner, 12, palette::WHITE)?;

        let knob = self.knob();
        match art.get(AssetSlot::Rock) {
            Some(rock) => {
                let (w, h) = fit_height(rock, inner.height() + 6);
                surface.blit(AssetSlot::Rock, centered(knob.center(), w, h))?;
            }
            None => {
                fill_ellipse(surface, knob, palette::KNOB_FALLBACK)?;
                stroke_ellipse(surface, knob, 2, palette::BLACK)?;
            }
        }

        if focused {
            stroke_rounded_rect(surface, inflate(inner, 6, 6), 14, 1, palette::WHITE)?;
        }

        Ok(())
    }
}
