//! # Session State
//!
//! The chat screen's single source of truth. This module contains domain
//! logic only: no TUI-specific types. Rendering lives in the `tui` module.
//!
//! ```text
//! Session
//! ├── gateway: Arc<dyn CompletionGateway>  // completion API boundary
//! ├── transcript: Transcript               // append-only conversation log
//! ├── input: InputBuffer                   // editable message being typed
//! ├── scrollback: Scrollback               // viewport over the transcript
//! ├── pending_art: Option<String>          // last captured fenced block
//! ├── status_message: String               // title-bar text
//! ├── model_name: String                   // completion model identifier
//! └── max_tokens: u32                      // per-request token ceiling
//! ```
//!
//! State changes only happen through `update(session, event)` in action.rs
//! and `apply_completion` below, so every mutation stays traceable.

use std::sync::Arc;

use log::{info, warn};

use crate::core::art::extract_fenced_block;
use crate::core::config::ResolvedConfig;
use crate::core::input::InputBuffer;
use crate::core::scrollback::Scrollback;
use crate::core::transcript::{Speaker, Transcript};
use crate::gateway::{CompletionGateway, GatewayError};

/// Rows consumed by the title line.
pub const TITLE_ROWS: u16 = 1;
/// Blank line between the scrollback viewport and the input box.
pub const SEPARATOR_ROWS: u16 = 1;
/// Bordered input box height.
pub const INPUT_ROWS: u16 = 3;
/// Vertical space not available to the scrollback viewport.
pub const FRAME_OVERHEAD: u16 = TITLE_ROWS + SEPARATOR_ROWS + INPUT_ROWS;
/// Column reserved for the scrollbar on the viewport's right edge.
pub const SCROLLBAR_COLS: u16 = 1;

/// Viewport content shown before the first completed turn.
pub const GREETING: &str =
    "Ask the assistant to create some ascii art!\nType a message and press Enter to send.";

pub struct Session {
    pub gateway: Arc<dyn CompletionGateway>,
    pub transcript: Transcript,
    pub input: InputBuffer,
    pub scrollback: Scrollback,
    /// Most recently captured fenced block. Overwritten per capture and
    /// never cleared once set.
    pub pending_art: Option<String>,
    pub status_message: String,
    pub model_name: String,
    pub max_tokens: u32,
}

impl Session {
    pub fn new(gateway: Arc<dyn CompletionGateway>, config: &ResolvedConfig) -> Self {
        let mut scrollback = Scrollback::new(
            80u16.saturating_sub(SCROLLBAR_COLS),
            24u16.saturating_sub(FRAME_OVERHEAD),
        );
        scrollback.set_content(GREETING.to_string());

        Self {
            gateway,
            transcript: Transcript::new(),
            input: InputBuffer::new(),
            scrollback,
            pending_art: None,
            status_message: String::new(),
            model_name: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Folds a completed gateway exchange into the session.
    ///
    /// On failure the prompt is dropped: the transcript keeps no record of
    /// the attempted turn and the error lands on the status line.
    ///
    /// On success both turns are appended, the flattened transcript is pushed
    /// into the scrollback, the view snaps to the bottom, and the reply is
    /// scanned for a fenced art block. Returns true when a block was captured.
    pub fn apply_completion(
        &mut self,
        prompt: String,
        result: Result<String, GatewayError>,
    ) -> bool {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("completion failed: {e}");
                self.status_message = format!("Completion error: {e}");
                return false;
            }
        };

        let art = extract_fenced_block(&reply).map(str::to_string);

        self.transcript.push(Speaker::User, prompt);
        self.scrollback.set_content(self.transcript.flatten());
        self.transcript.push(Speaker::Assistant, reply);
        self.scrollback.set_content(self.transcript.flatten());
        self.scrollback.scroll_to_bottom();
        self.status_message.clear();

        match art {
            Some(art) => {
                info!("captured fenced block ({} bytes)", art.len());
                self.pending_art = Some(art);
                self.status_message = String::from("ascii art captured");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_session;

    #[test]
    fn test_session_new_defaults() {
        let session = test_session();
        assert!(session.transcript.is_empty());
        assert!(session.input.is_empty());
        assert!(session.pending_art.is_none());
        assert_eq!(session.model_name, "test-model");
        assert_eq!(session.max_tokens, 100);
        assert!(session.scrollback.content().contains("ascii art"));
    }
}
