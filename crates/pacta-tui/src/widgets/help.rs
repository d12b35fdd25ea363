use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};

use crate::layout::centered_rect;
use crate::theme::Theme;

// 14 data rows + 1 header row + 2 border lines
const POPUP_HEIGHT: u16 = 17;

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let popup = centered_rect(60, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let rows = vec![
        Row::new([
            Cell::from(Span::styled("Normal mode", theme.panel_title)),
            Cell::from(""),
        ]),
        keybind_row("o", "open the PDF picker"),
        keybind_row("i", "type a question"),
        keybind_row("p", "play / stop read-aloud"),
        keybind_row("j / k", "scroll results"),
        keybind_row("PgDn / PgUp", "page scroll"),
        keybind_row("?", "toggle this help"),
        keybind_row("q", "quit"),
        Row::new([Cell::from(""), Cell::from("")]),
        Row::new([
            Cell::from(Span::styled("Insert mode", theme.panel_title)),
            Cell::from(""),
        ]),
        keybind_row("Enter", "submit the question"),
        keybind_row("Esc", "back to normal mode"),
        keybind_row("Ctrl+U", "clear input"),
        Row::new([Cell::from(""), Cell::from("")]),
    ];

    let header = Row::new([
        Cell::from(Span::styled("Key", theme.highlight)),
        Cell::from(Span::styled("Action", theme.highlight)),
    ]);

    let table = Table::new(
        rows,
        [Constraint::Percentage(35), Constraint::Percentage(65)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border)
            .title(" Help ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(table, popup);
}

fn keybind_row(key: &'static str, action: &'static str) -> Row<'static> {
    Row::new([Cell::from(Line::from(key)), Cell::from(Line::from(action))])
}
