use dmge::emulator::InputEvent;
use dmge::joypad::Button;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Default key map: arrows for the D-pad, X/Z for A/B, Return for Start,
/// Tab for Select, Escape quits.
fn map_key(key: Keycode) -> Option<Button> {
    match key {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Left => Some(Button::Left),
        Keycode::Right => Some(Button::Right),
        Keycode::X => Some(Button::A),
        Keycode::Z => Some(Button::B),
        Keycode::Return => Some(Button::Start),
        Keycode::Tab => Some(Button::Select),
        _ => None,
    }
}

/// Drains the SDL event queue into core input events.
pub fn poll_events(event_pump: &mut EventPump) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => events.push(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(button) = map_key(key) {
                    events.push(InputEvent::KeyDown(button));
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(button) = map_key(key) {
                    events.push(InputEvent::KeyUp(button));
                }
            }
            _ => {}
        }
    }
    events
}
