//! Key hints for the active screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use formvoid_app::session::Screen;

use crate::theme::styles;

const HOME_HINTS: &[(&str, &str)] = &[
    ("0-4", "filter"),
    ("←→", "move"),
    ("enter", "open"),
    ("t", "grid/table"),
    ("a", "about"),
    ("r", "reset"),
    ("q", "quit"),
];

const DETAIL_HINTS: &[(&str, &str)] = &[("esc", "back"), ("s", "share"), ("q", "quit")];

const ABOUT_HINTS: &[(&str, &str)] = &[("esc", "back"), ("r", "reset"), ("q", "quit")];

/// One row of `key action` pairs, with the brand location on the right
pub struct KeyHints<'a> {
    screen: Screen,
    location: &'a str,
}

impl<'a> KeyHints<'a> {
    pub fn new(screen: Screen, location: &'a str) -> Self {
        Self { screen, location }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.screen {
            Screen::Home => HOME_HINTS,
            Screen::Detail => DETAIL_HINTS,
            Screen::About => ABOUT_HINTS,
        };

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::accent()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }

        let hints = Line::from(spans);
        let location = Line::from(Span::styled(self.location, styles::text_faint()));
        let fits_both = hints.width() + location.width() + 2 <= area.width as usize;

        Paragraph::new(hints).render(area, buf);
        if fits_both {
            Paragraph::new(location)
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
