use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a centered `Rect` with the given percentage width and fixed height.
#[must_use]
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

/// One vertical stack: header, scrollable results, chat answer, query
/// input, status line.
pub struct AppLayout {
    pub header: Rect,
    pub results: Rect,
    pub answer: Rect,
    pub input: Rect,
    pub status: Rect,
}

impl AppLayout {
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: outer[0],
            results: outer[1],
            answer: outer[2],
            input: outer[3],
            status: outer[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_for_standard_terminal() {
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.answer.height, 6);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status.height, 1);
        assert!(layout.results.height >= 8);
    }

    #[test]
    fn panels_stack_top_to_bottom() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 30));
        assert!(layout.header.y < layout.results.y);
        assert!(layout.results.y < layout.answer.y);
        assert!(layout.answer.y < layout.input.y);
        assert!(layout.input.y < layout.status.y);
    }

    #[test]
    fn results_panel_absorbs_extra_height() {
        let small = AppLayout::compute(Rect::new(0, 0, 80, 24));
        let large = AppLayout::compute(Rect::new(0, 0, 80, 48));
        assert!(large.results.height > small.results.height);
        assert_eq!(large.answer.height, small.answer.height);
    }

    #[test]
    fn centered_rect_is_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 12, area);
        assert!(popup.x >= area.x);
        assert!(popup.y >= area.y);
        assert!(popup.x + popup.width <= area.x + area.width);
        assert!(popup.y + popup.height <= area.y + area.height);
    }

    mod proptest_layout {
        use super::*;
        use proptest::prelude::*;

        fn assert_within_bounds(rect: Rect, area: Rect) {
            assert!(rect.x + rect.width <= area.x + area.width);
            assert!(rect.y + rect.height <= area.y + area.height);
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn layout_never_overflows(
                width in 1u16..400,
                height in 1u16..400,
            ) {
                let area = Rect::new(0, 0, width, height);
                let layout = AppLayout::compute(area);
                assert_within_bounds(layout.header, area);
                assert_within_bounds(layout.results, area);
                assert_within_bounds(layout.answer, area);
                assert_within_bounds(layout.input, area);
                assert_within_bounds(layout.status, area);
            }

            #[test]
            fn centered_rect_within_bounds(
                percent_x in 10u16..100,
                popup_h in 1u16..50,
                area_w in 20u16..300,
                area_h in 10u16..100,
            ) {
                let area = Rect::new(0, 0, area_w, area_h);
                let popup = centered_rect(percent_x, popup_h.min(area_h), area);
                assert_within_bounds(popup, area);
            }
        }
    }
}
