use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode};
use crate::theme::Theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let mode = match app.input_mode() {
        InputMode::Normal => "Normal",
        InputMode::Insert => "Insert",
    };

    let audio = if app.is_playing() { "playing" } else { "--" };

    let text = format!(
        " [{mode}] | Audio: {audio} | o open  i ask  p play/stop  ? help  q quit | {}",
        app.status()
    );

    let line = Line::from(Span::styled(text, theme.status_bar));
    frame.render_widget(Paragraph::new(line).style(theme.status_bar), area);
}
