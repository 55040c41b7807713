use crate::navigation::InputEvent;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// What one polled SDL2 event means to the frame driver
///
/// Quitting belongs to the driver. Everything else is an abstract
/// `InputEvent` that gets folded into the `Navigator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameInput {
    Quit,
    Nav(InputEvent),
}

/// Translate a pressed key into a navigation event
///
/// WASD and the arrow keys are directions, Space and Return confirm,
/// Backspace deletes. Everything else is left to text input.
pub fn map_keycode(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::W | Keycode::Up => Some(InputEvent::Up),
        Keycode::S | Keycode::Down => Some(InputEvent::Down),
        Keycode::A | Keycode::Left => Some(InputEvent::Left),
        Keycode::D | Keycode::Right => Some(InputEvent::Right),
        Keycode::Space | Keycode::Return | Keycode::KpEnter => Some(InputEvent::Confirm),
        Keycode::Backspace => Some(InputEvent::Back),
        _ => None,
    }
}

/// Typed text, one event per character
///
/// Space is the confirm key, so its text echo is dropped; otherwise
/// confirming on character select would type a space on name entry.
pub fn map_text(text: &str) -> impl Iterator<Item = InputEvent> + '_ {
    text.chars().filter(|c| *c != ' ').map(InputEvent::Char)
}

/// Polls SDL2 events and produces FrameInputs in arrival order
///
/// Input processing happens in phases:
/// 1. Poll all pending SDL2 events
/// 2. Drop key auto-repeat (one press, one step)
/// 3. Translate key presses and text input to navigation events
pub fn poll_events(event_pump: &mut EventPump) -> Vec<FrameInput> {
    let mut inputs = Vec::new();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                inputs.push(FrameInput::Quit);
            }
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                inputs.push(FrameInput::Quit);
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(nav) = map_keycode(key) {
                    inputs.push(FrameInput::Nav(nav));
                }
            }
            Event::TextInput { text, .. } => {
                inputs.extend(map_text(&text).map(FrameInput::Nav));
            }
            _ => {
                // Ignore other event types
            }
        }
    }

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_same_events() {
        assert_eq!(map_keycode(Keycode::W), Some(InputEvent::Up));
        assert_eq!(map_keycode(Keycode::Up), Some(InputEvent::Up));
        assert_eq!(map_keycode(Keycode::S), map_keycode(Keycode::Down));
        assert_eq!(map_keycode(Keycode::A), map_keycode(Keycode::Left));
        assert_eq!(map_keycode(Keycode::D), Some(InputEvent::Right));
    }

    #[test]
    fn test_confirm_and_back() {
        assert_eq!(map_keycode(Keycode::Space), Some(InputEvent::Confirm));
        assert_eq!(map_keycode(Keycode::Return), Some(InputEvent::Confirm));
        assert_eq!(map_keycode(Keycode::Backspace), Some(InputEvent::Back));
    }

    #[test]
    fn test_other_keys_unmapped() {
        assert_eq!(map_keycode(Keycode::Q), None);
        assert_eq!(map_keycode(Keycode::F3), None);
    }

    #[test]
    fn test_text_becomes_char_events() {
        let events: Vec<InputEvent> = map_text("Hé!").collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Char('H'),
                InputEvent::Char('é'),
                InputEvent::Char('!'),
            ]
        );
    }

    #[test]
    fn test_space_echo_dropped() {
        assert_eq!(map_text(" ").count(), 0);
        let events: Vec<InputEvent> = map_text("a b").collect();
        assert_eq!(events, vec![InputEvent::Char('a'), InputEvent::Char('b')]);
    }

    #[test]
    fn test_frame_input_equality() {
        assert_eq!(FrameInput::Quit, FrameInput::Quit);
        assert_ne!(FrameInput::Quit, FrameInput::Nav(InputEvent::Confirm));
    }
}
