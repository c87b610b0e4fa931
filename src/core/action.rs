//! # Session Events
//!
//! Everything the terminal can do to the session becomes a `SessionEvent`.
//! User presses Enter? That's `SessionEvent::Submit`.
//! Terminal shrinks? That's `SessionEvent::Resize`.
//!
//! The `update()` function folds one event into the session and returns the
//! `Effect` the adapter must perform. No I/O here: the completion call and
//! the final stdout line happen in the `tui` module.
//!
//! ```text
//! Session + SessionEvent  →  update()  →  Effect
//! ```
//!
//! Events are processed strictly one at a time; nothing else mutates the
//! session while an update is in flight.

use crate::core::input::EditKey;
use crate::core::state::{FRAME_OVERHEAD, SCROLLBAR_COLS, Session};

/// Closed union of everything the event loop can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Terminal dimensions changed.
    Resize { width: u16, height: u16 },
    /// Esc or Ctrl+C. A shutdown side-channel, not part of conversation flow.
    Quit,
    /// Enter.
    Submit,
    ScrollUp,
    ScrollDown,
    /// Any other key, forwarded verbatim to the input buffer.
    EditKey(EditKey),
    /// Poll timeout; drives the cursor blink only.
    TimerTick,
}

/// I/O the adapter performs after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Block on the completion gateway with this prompt.
    SendPrompt(String),
    /// Tear down the terminal and print this line to stdout.
    Quit(String),
}

pub fn update(session: &mut Session, event: SessionEvent) -> Effect {
    match event {
        SessionEvent::Resize { width, height } => {
            session.scrollback.resize(
                width.saturating_sub(SCROLLBAR_COLS),
                height.saturating_sub(FRAME_OVERHEAD),
            );
            session.input.set_width(width);
            Effect::None
        }
        SessionEvent::Quit => Effect::Quit(session.input.value().to_string()),
        SessionEvent::Submit => {
            // Empty submits are explicitly ignored, not errors.
            if session.input.is_empty() {
                return Effect::None;
            }
            Effect::SendPrompt(session.input.take())
        }
        SessionEvent::ScrollUp => {
            session.scrollback.scroll_up(1);
            Effect::None
        }
        SessionEvent::ScrollDown => {
            session.scrollback.scroll_down(1);
            Effect::None
        }
        SessionEvent::EditKey(key) => {
            session.input.handle(key);
            Effect::None
        }
        SessionEvent::TimerTick => {
            session.input.tick();
            Effect::None
        }
    }
}
