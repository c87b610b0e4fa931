use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::core::action::SessionEvent;
use crate::core::input::EditKey;

/// Poll for the next session event, waiting up to `timeout`.
///
/// Returns `Ok(None)` when the timeout elapses or the terminal event has no
/// mapping; the caller treats that as a timer tick.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<SessionEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Maps a terminal event onto the session's closed event union.
fn translate(event: Event) -> Option<SessionEvent> {
    match event {
        Event::Resize(width, height) => Some(SessionEvent::Resize { width, height }),
        Event::Key(key) => match (key.modifiers, key.code) {
            // Esc and Ctrl+C both quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(SessionEvent::Quit),
            (_, KeyCode::Esc) => Some(SessionEvent::Quit),
            (_, KeyCode::Enter) => Some(SessionEvent::Submit),
            (_, KeyCode::Up) => Some(SessionEvent::ScrollUp),
            (_, KeyCode::Down) => Some(SessionEvent::ScrollDown),
            // Everything else goes to the input buffer
            (_, KeyCode::Char(c)) => Some(SessionEvent::EditKey(EditKey::Insert(c))),
            (_, KeyCode::Backspace) => Some(SessionEvent::EditKey(EditKey::Backspace)),
            (_, KeyCode::Delete) => Some(SessionEvent::EditKey(EditKey::Delete)),
            (_, KeyCode::Left) => Some(SessionEvent::EditKey(EditKey::Left)),
            (_, KeyCode::Right) => Some(SessionEvent::EditKey(EditKey::Right)),
            (_, KeyCode::Home) => Some(SessionEvent::EditKey(EditKey::Home)),
            (_, KeyCode::End) => Some(SessionEvent::EditKey(EditKey::End)),
            _ => None,
        },
        _ => None,
    }
}
