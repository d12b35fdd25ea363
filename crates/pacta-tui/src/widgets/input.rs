use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::theme::Theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let title = match app.input_mode() {
        InputMode::Normal => " Ask about the contract (press 'i' to type) ",
        InputMode::Insert => " Ask about the contract (Enter to submit, Esc to cancel) ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(title);

    let paragraph = Paragraph::new(app.input())
        .block(block)
        .style(theme.input_cursor)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    if matches!(app.input_mode(), InputMode::Insert) {
        let prefix: String = app.input().chars().take(app.cursor_position()).collect();
        #[allow(clippy::cast_possible_truncation)]
        let cursor_x = area.x + prefix.width() as u16 + 1;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}
