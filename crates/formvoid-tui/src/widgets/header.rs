//! Header bar: brand and category nav

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use formvoid_core::CategoryFilter;

use crate::theme::styles;

/// Brand name on the left, numbered category nav on the right
pub struct MainHeader<'a> {
    brand: &'a str,
    /// Highlighted nav entry; `None` when a context filter is active
    active: Option<CategoryFilter>,
}

impl<'a> MainHeader<'a> {
    pub fn new(brand: &'a str) -> Self {
        Self {
            brand,
            active: None,
        }
    }

    pub fn active(mut self, filter: Option<CategoryFilter>) -> Self {
        self.active = filter;
        self
    }

    fn nav_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, option) in CategoryFilter::OPTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("{i} "), styles::text_faint()));
            let style = if self.active == Some(*option) {
                styles::selected()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(option.label(), style));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::rule_below();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(Span::styled(self.brand.to_uppercase(), styles::text_bold()));

        if inner.height >= 2 {
            Paragraph::new(brand).render(Rect { height: 1, ..inner }, buf);
            Paragraph::new(self.nav_line())
                .alignment(Alignment::Right)
                .render(
                    Rect {
                        y: inner.y + 1,
                        height: 1,
                        ..inner
                    },
                    buf,
                );
        } else {
            Paragraph::new(brand).render(inner, buf);
        }
    }
}
