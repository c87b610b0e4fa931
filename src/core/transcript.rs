//! Conversation transcript: an append-only log of chat turns.
//!
//! Messages are immutable once appended and display order equals insertion
//! order. The transcript is re-flattened to a single display string after
//! every mutation; the scrollback viewport shows that flattened form.

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Label prefixed to the message text in the flattened transcript.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Assistant => "Assistant",
        }
    }
}

/// A single conversation turn. Owned exclusively by the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

impl Message {
    fn rendered(&self) -> String {
        format!("{}: {}", self.speaker.label(), self.text)
    }
}

/// Ordered sequence of messages. Grows only by append; never truncated or
/// edited in place.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, speaker: Speaker, text: String) {
        self.messages.push(Message { speaker, text });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Renders every message as `"<label>: <text>"` and joins the lines
    /// with `'\n'`.
    pub fn flatten(&self) -> String {
        self.messages
            .iter()
            .map(Message::rendered)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
