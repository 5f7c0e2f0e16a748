//! Shown instead of the grid or table when nothing matches

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct EmptyState;

impl Widget for EmptyState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled("NO RECORDS FOUND IN DATABASE.", styles::text_muted())),
            Line::from(""),
            Line::from(vec![
                Span::styled("press ", styles::text_faint()),
                Span::styled("r", styles::accent_bold()),
                Span::styled(" to reset filters", styles::text_faint()),
            ]),
        ];

        let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(Rect { y: top, height: area.bottom() - top, ..area }, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_state_message() {
        let mut term = TestTerminal::new();
        term.render_widget(EmptyState, term.area());

        assert!(term.buffer_contains("NO RECORDS FOUND IN DATABASE."));
        assert!(term.buffer_contains("press r to reset filters"));
    }
}
