//! # Scrollback viewport
//!
//! Fixed-viewport scrollable window over the flattened transcript. Content
//! is replaced wholesale (no incremental diffing) and the scroll offset is
//! always clamped so the window never runs past the wrapped content.
//!
//! Line counting goes through `textwrap` with options matching the
//! render-side `Paragraph` wrapping, so clamping agrees with what is drawn.

/// Build textwrap options for the viewport width.
fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

pub struct Scrollback {
    content: String,
    /// First visible wrapped line.
    offset: u16,
    width: u16,
    height: u16,
}

impl Scrollback {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            content: String::new(),
            offset: 0,
            width,
            height,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Replaces the displayed text wholesale.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.clamp();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }

    /// Snaps the visible window to the end of the content.
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Adjusts the rendering box. Content re-wraps on the next render; the
    /// offset is re-clamped to the new bounds.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Number of wrapped display lines at the current width.
    pub fn line_count(&self) -> u16 {
        if self.width == 0 || self.content.is_empty() {
            return 0;
        }

        let lines = textwrap::wrap(&self.content, wrap_options(self.width));
        let mut count = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        // textwrap doesn't produce an empty trailing line for a trailing newline
        if self.content.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
            count = count.saturating_add(1);
        }
        count
    }

    fn max_offset(&self) -> u16 {
        self.line_count().saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
        }
    }
}
