use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::{INPUT_ROWS, SCROLLBAR_COLS, SEPARATOR_ROWS, Session, TITLE_ROWS};

/// Input prompt rendered ahead of the buffer.
const PROMPT: &str = "> ";
/// Columns consumed by the input border and the prompt.
const INPUT_OVERHEAD: u16 = 2 + 2;
const PLACEHOLDER: &str = "Send a message... (esc to quit)";

pub fn draw_ui(frame: &mut Frame, session: &Session) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(TITLE_ROWS),
        Min(0),
        Length(SEPARATOR_ROWS),
        Length(INPUT_ROWS),
    ]);
    let [title_area, chat_area, _separator_area, input_area] = layout.areas(frame.area());

    draw_title(frame, title_area, session);
    draw_scrollback(frame, chat_area, session);
    draw_input(frame, input_area, session);
}

fn draw_title(frame: &mut Frame, area: Rect, session: &Session) {
    let text = if session.status_message.is_empty() {
        format!("artchat (model: {})", session.model_name)
    } else {
        format!(
            "artchat (model: {}) | {}",
            session.model_name, session.status_message
        )
    };
    frame.render_widget(Span::raw(text), area);
}

fn draw_scrollback(frame: &mut Frame, area: Rect, session: &Session) {
    let content_width = area.width.saturating_sub(SCROLLBAR_COLS);
    let content_height = session.scrollback.line_count().max(1);

    let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    // trim: false keeps the leading whitespace ascii art depends on
    let paragraph = Paragraph::new(session.scrollback.content()).wrap(Wrap { trim: false });
    scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

    let mut scroll_state = ScrollViewState::default();
    scroll_state.set_offset(Position { x: 0, y: session.scrollback.offset() });
    frame.render_stateful_widget(scroll_view, area, &mut scroll_state);
}

fn draw_input(frame: &mut Frame, area: Rect, session: &Session) {
    let inner_width = area.width.saturating_sub(INPUT_OVERHEAD);
    let block = Block::bordered().title("Input");

    let input = if session.input.is_empty() {
        Paragraph::new(format!("{PROMPT}{PLACEHOLDER}"))
            .block(block)
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
    } else {
        let (window, _) = session.input.visible_window(inner_width);
        Paragraph::new(format!("{PROMPT}{window}"))
            .block(block)
            .style(Style::default().fg(Color::Green))
    };
    frame.render_widget(input, area);

    if session.input.cursor_visible() {
        let (_, col) = session.input.visible_window(inner_width);
        let x = area.x + 1 + PROMPT.len() as u16 + col;
        frame.set_cursor_position((x, area.y + 1));
    }
}
