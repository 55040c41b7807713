//! Screen Navigation
//!
//! The whole menu front-end is one explicit state machine, [`Navigator`].
//! The frame driver owns it, feeds it abstract [`InputEvent`]s in arrival
//! order, and hands it read-only to the screen renderers.
//!
//! # Transition rules
//!
//! - Title: up/left and down/right move focus over START, CREDITS and the
//!   settings pebble; confirm opens character select, credits or settings
//! - Settings: up/down pick a slider, left/right adjust it by 0.05, confirm
//!   returns to the title
//! - Credits: confirm returns to the title
//! - Character select: left/right pick one of three characters, confirm
//!   opens name entry
//! - Name entry: characters the font can draw append, back deletes, confirm opens
//!   the next page placeholder
//! - Next page placeholder: terminal, ignores everything
//!
//! Any other input is ignored, so `handle` never fails.

mod focus;
mod name;

pub use focus::FocusRing;
pub use name::NameBuffer;
#[cfg(test)]
pub use name::MAX_NAME_LEN;

use crate::gui::Slider;
use sdl2::rect::Rect;

/// Slider change per left/right press
pub const SLIDER_STEP: f32 = 0.05;

/// Number of selectable characters
pub const CHARACTER_COUNT: usize = 3;

/// Abstract input, independent of any key encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    /// Delete the last typed character
    Back,
    /// A typed character
    Char(char),
}

/// The active screen; exactly one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Title,
    Settings,
    Credits,
    CharacterSelect,
    NameEntry,
    NextPagePlaceholder,
}

/// Result of handling one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Moved { from: Screen, to: Screen },
}

/// Entries on the title screen, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleOption {
    Start,
    Credits,
    Settings,
}

impl TitleOption {
    fn from_index(index: usize) -> Self {
        match index {
            0 => TitleOption::Start,
            1 => TitleOption::Credits,
            _ => TitleOption::Settings,
        }
    }

    /// Screen opened when this entry is confirmed
    pub fn target(&self) -> Screen {
        match self {
            TitleOption::Start => Screen::CharacterSelect,
            TitleOption::Credits => Screen::Credits,
            TitleOption::Settings => Screen::Settings,
        }
    }
}

/// Settings screen state: which slider has focus, and both sliders
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    focus: FocusRing,
    volume: Slider,
    brightness: Slider,
}

impl SettingsState {
    pub fn new() -> Self {
        SettingsState {
            focus: FocusRing::new(2),
            volume: Slider::new(Rect::new(56, 90, 288, 18), "VOLUME", 0.7),
            brightness: Slider::new(Rect::new(56, 140, 288, 18), "BRIGHTNESS", 0.6),
        }
    }

    pub fn focus(&self) -> usize {
        self.focus.index()
    }

    pub fn volume(&self) -> &Slider {
        &self.volume
    }

    pub fn brightness(&self) -> &Slider {
        &self.brightness
    }

    /// Sliders in focus order
    pub fn sliders(&self) -> [&Slider; 2] {
        [&self.volume, &self.brightness]
    }

    fn focused_slider_mut(&mut self) -> &mut Slider {
        match self.focus.index() {
            0 => &mut self.volume,
            _ => &mut self.brightness,
        }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu navigation state machine
///
/// # Example
///
/// ```ignore
/// let mut nav = Navigator::new();
/// nav.handle(InputEvent::Right);
/// nav.handle(InputEvent::Right);
/// assert_eq!(nav.handle(InputEvent::Confirm), Transition::Moved {
///     from: Screen::Title,
///     to: Screen::Settings,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    screen: Screen,
    title_focus: FocusRing,
    settings: SettingsState,
    character: FocusRing,
    /// Kept across every screen change, including re-entering name entry
    name: NameBuffer,
}

impl Navigator {
    /// Starts on the title screen with START focused
    pub fn new() -> Self {
        Navigator {
            screen: Screen::Title,
            title_focus: FocusRing::new(3),
            settings: SettingsState::new(),
            character: FocusRing::new(CHARACTER_COUNT),
            name: NameBuffer::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn title_focus(&self) -> usize {
        self.title_focus.index()
    }

    pub fn title_option(&self) -> TitleOption {
        TitleOption::from_index(self.title_focus.index())
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    /// Selected character slot (0-2)
    pub fn character_index(&self) -> usize {
        self.character.index()
    }

    pub fn name(&self) -> &NameBuffer {
        &self.name
    }

    /// Apply one input event to the active screen
    pub fn handle(&mut self, event: InputEvent) -> Transition {
        use InputEvent::*;

        let from = self.screen;
        match (self.screen, event) {
            (Screen::Title, Left | Up) => self.title_focus.select_previous(),
            (Screen::Title, Right | Down) => self.title_focus.select_next(),
            (Screen::Title, Confirm) => self.screen = self.title_option().target(),

            (Screen::Settings, Up) => self.settings.focus.select_previous(),
            (Screen::Settings, Down) => self.settings.focus.select_next(),
            (Screen::Settings, Left) => self.settings.focused_slider_mut().adjust(-SLIDER_STEP),
            (Screen::Settings, Right) => self.settings.focused_slider_mut().adjust(SLIDER_STEP),
            (Screen::Settings, Confirm) => self.screen = Screen::Title,

            (Screen::Credits, Confirm) => self.screen = Screen::Title,

            (Screen::CharacterSelect, Left) => self.character.select_previous(),
            (Screen::CharacterSelect, Right) => self.character.select_next(),
            (Screen::CharacterSelect, Confirm) => self.screen = Screen::NameEntry,

            (Screen::NameEntry, Confirm) => self.screen = Screen::NextPagePlaceholder,
            (Screen::NameEntry, Back) => {
                self.name.pop();
            }
            (Screen::NameEntry, Char(c)) => {
                self.name.push(c);
            }

            _ => {}
        }

        if self.screen == from {
            Transition::Stay
        } else {
            Transition::Moved {
                from,
                to: self.screen,
            }
        }
    }

    /// Apply events in order; returns the screen changes that happened
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Vec<Transition> {
        events
            .into_iter()
            .map(|event| self.handle(event))
            .filter(|t| *t != Transition::Stay)
            .collect()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
