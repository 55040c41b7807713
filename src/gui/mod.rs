//! Screen-Space Widgets
//!
//! UI elements drawn at fixed positions on the 400x225 logical canvas.
//!
//! # Architecture
//!
//! Widgets:
//! - Own their geometry and label, never their focus state
//! - Take `focused`/`selected` as a draw argument from the screen renderer
//! - Render procedurally through the `Surface` trait
//! - Fall back to plain shapes whenever an optional art slot is absent
//!
//! # Available Components
//!
//! - [`Button`] - Rounded labelled button
//! - [`Slider`] - Labelled track holding a value in [0, 1]
//! - [`CharacterCard`] - Framed character portrait
//! - [`Panel`] / [`HeaderBox`] - Framed boxes and screen headings
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::Slider;
//!
//! let mut volume = Slider::new(Rect::new(56, 90, 288, 18), "VOLUME", 0.7);
//! volume.adjust(-0.05);
//! volume.draw(&mut surface, &artwork, true)?;
//! ```

pub mod button;
pub mod card;
pub mod panel;
pub mod slider;

pub use button::Button;
pub use card::CharacterCard;
pub use panel::{HeaderBox, Panel, PanelStyle};
pub use slider::Slider;
