//! # Input buffer
//!
//! Single-line editable text buffer with a byte-offset cursor and a bounded
//! length. Holds state only; it never performs I/O and knows nothing about
//! how it is rendered.
//!
//! The cursor-blink flag is cosmetic presentation state toggled by the
//! session's timer tick and reset whenever the user edits.

use unicode_width::UnicodeWidthStr;

/// Maximum characters the buffer accepts; insertions beyond it are rejected.
pub const CHAR_LIMIT: usize = 280;

/// Editing commands forwarded verbatim from the terminal adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

pub struct InputBuffer {
    buffer: String,
    /// Cursor position as byte offset in `buffer` (0..=buffer.len()).
    cursor: usize,
    /// Last known terminal width, updated on resize.
    width: u16,
    cursor_visible: bool,
}

impl InputBuffer {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            width: Self::DEFAULT_WIDTH,
            cursor_visible: true,
        }
    }

    /// Applies one editing command. Insertions at the character limit are
    /// rejected silently.
    pub fn handle(&mut self, key: EditKey) {
        self.cursor_visible = true;
        match key {
            EditKey::Insert(c) => {
                if self.char_count() < CHAR_LIMIT {
                    self.buffer.insert(self.cursor, c);
                    self.cursor += c.len_utf8();
                }
            }
            EditKey::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            EditKey::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
            }
            EditKey::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
            }
            EditKey::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
            }
            EditKey::Home => self.cursor = 0,
            EditKey::End => self.cursor = self.buffer.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Takes the buffer contents, clearing it atomically and resetting the
    /// cursor to the start.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.cursor_visible = true;
        std::mem::take(&mut self.buffer)
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Cursor-blink tick.
    pub fn tick(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Returns the slice of the buffer that fits in `inner_width` columns
    /// with the cursor in view, plus the cursor's column within that slice.
    /// The window slides right as the cursor walks past the right edge.
    pub fn visible_window(&self, inner_width: u16) -> (String, u16) {
        if inner_width == 0 {
            return (String::new(), 0);
        }

        let chars: Vec<char> = self.buffer.chars().collect();
        let cursor_chars = self.buffer[..self.cursor].chars().count();
        let max = inner_width as usize;

        let start = cursor_chars.saturating_sub(max.saturating_sub(1));
        let end = (start + max).min(chars.len());

        let window: String = chars[start..end].iter().collect();
        let before_cursor: String = chars[start..cursor_chars].iter().collect();
        (window, before_cursor.width() as u16)
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(s.len());
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
