//! Notice modal drawn over the current screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use formvoid_app::Notice;

use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 7;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub struct NoticeModal<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let title = format!(" {} ", self.notice.title());
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.notice.body(), styles::text_primary())),
            Line::from(""),
            Line::from(Span::styled("press any key", styles::text_faint())),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styles::modal_block(&title))
            .render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use formvoid_app::Refusal;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(100, 30, area), area);
    }

    #[test]
    fn test_restricted_notice() {
        let notice = Notice::Refused(Refusal::Restricted { id: "3".into() });
        let mut term = TestTerminal::new();

        term.render_widget(NoticeModal::new(&notice), term.area());

        assert!(term.buffer_contains("ACCESS DENIED"));
        assert!(term.buffer_contains("This project is protected by NDA."));
        assert!(term.buffer_contains("press any key"));
    }
}
