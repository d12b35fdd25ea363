use ratatui::style::{Color, Modifier, Style};

/// The palette follows the original dark-violet look of the app:
/// near-black background, periwinkle accents.
pub struct Theme {
    pub header: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_title: Style,
    pub category_title: Style,
    pub bullet: Style,
    pub placeholder: Style,
    pub highlight: Style,
    pub error: Style,
    pub input_cursor: Style,
    pub answer_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Color::Rgb(163, 191, 250);
        Self {
            header: Style::default()
                .fg(accent)
                .bg(Color::Rgb(30, 30, 46))
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().fg(Color::White).bg(Color::DarkGray),
            panel_border: Style::default().fg(Color::Gray),
            panel_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            category_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            bullet: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::DarkGray),
            highlight: Style::default().fg(Color::Rgb(215, 150, 60)),
            error: Style::default().fg(Color::Red),
            input_cursor: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            answer_text: Style::default().fg(Color::White),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_title_differs_from_bullet() {
        let theme = Theme::default();
        assert_ne!(theme.category_title, theme.bullet);
    }

    #[test]
    fn status_bar_has_background() {
        assert_eq!(Theme::default().status_bar.bg, Some(Color::DarkGray));
    }
}
