//! About screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use formvoid_app::config::BrandSettings;

use crate::theme::styles;

pub struct AboutView<'a> {
    brand: &'a BrandSettings,
}

impl<'a> AboutView<'a> {
    pub fn new(brand: &'a BrandSettings) -> Self {
        Self { brand }
    }
}

impl Widget for AboutView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled("← BACK TO MAIN", styles::text_muted())),
            Line::from(""),
            Line::from(Span::styled(self.brand.name.to_uppercase(), styles::accent())),
            Line::from(Span::styled(self.brand.slogan.as_str(), styles::text_bold())),
            Line::from(""),
        ];
        lines.extend(
            self.brand
                .manifesto
                .lines()
                .map(|l| Line::from(Span::styled(l, styles::text_primary()))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.brand.location.as_str(),
            styles::text_faint(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
            .render(area, buf);
    }
}
