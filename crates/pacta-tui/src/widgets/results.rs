use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, Lifecycle};
use crate::theme::Theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(" Analysis ")
        .title_style(theme.panel_title);

    let lines = match app.lifecycle() {
        Lifecycle::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Upload a PDF contract to analyze",
                theme.placeholder,
            )),
            Line::from(Span::styled(
                "  (press 'o' to choose a file)",
                theme.placeholder,
            )),
        ],
        Lifecycle::Processing => vec![
            Line::from(""),
            Line::from(Span::styled("  Analyzing document...", theme.placeholder)),
        ],
        Lifecycle::Displayed => result_lines(app, &theme),
    };

    #[allow(clippy::cast_possible_truncation)]
    let scroll = app.scroll_offset().min(u16::MAX as usize) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn result_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (category, items) in app.report().iter() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {category}"),
            theme.category_title,
        )));
        if items.is_empty() {
            lines.push(Line::from(Span::styled("   (none)", theme.placeholder)));
        } else {
            for item in items {
                lines.push(Line::from(Span::styled(
                    format!("   • {item}"),
                    theme.bullet,
                )));
            }
        }
    }
    lines
}
