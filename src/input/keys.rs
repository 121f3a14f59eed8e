use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputEvent;

pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Key bindings: arrows move, Enter confirms, Backspace/Delete erase,
/// `q` or Ctrl-C quit, any other printable character is text.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char('q') => Some(InputEvent::Quit),
        KeyCode::Char(c) => Some(InputEvent::CharacterInput(c)),
        KeyCode::Backspace | KeyCode::Delete => Some(InputEvent::Erase),
        KeyCode::Up => Some(InputEvent::MoveUp),
        KeyCode::Down => Some(InputEvent::MoveDown),
        KeyCode::Enter => Some(InputEvent::Confirm),
        _ => None,
    }
}
