//! Filter bar above the listing

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use formvoid_app::session::DisplayMode;
use formvoid_app::FilterState;
use formvoid_core::CategoryFilter;

use crate::theme::styles;

/// Record count and display mode on the left, active filter on the right
pub struct FilterBar<'a> {
    filter: &'a FilterState,
    mode: DisplayMode,
    count: usize,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a FilterState, mode: DisplayMode, count: usize) -> Self {
        Self {
            filter,
            mode,
            count,
        }
    }

    fn options_line(&self) -> Line<'static> {
        match self.filter.category_filter() {
            Some(active) => {
                let mut spans = Vec::new();
                for (i, option) in CategoryFilter::OPTIONS.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw("   "));
                    }
                    let style = if *option == active {
                        styles::selected()
                    } else {
                        styles::text_faint()
                    };
                    spans.push(Span::styled(option.label(), style));
                }
                Line::from(spans)
            }
            None => Line::from(vec![
                Span::styled("CONTEXT: ", styles::text_faint()),
                Span::styled(self.filter.label(), styles::accent_bold()),
            ]),
        }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::rule_below();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let summary = Line::from(vec![
            Span::styled(format!("{:>2} RECORDS", self.count), styles::text_muted()),
            Span::styled(" · ", styles::text_faint()),
            Span::styled(self.mode.label(), styles::text_muted()),
        ]);

        let fits = |options: &Line| summary.width() + options.width() + 2 <= inner.width as usize;
        let mut options = self.options_line();
        if !fits(&options) {
            // Narrow: only the active filter
            options = Line::from(Span::styled(self.filter.label(), styles::selected()));
        }
        let show_options = fits(&options);

        Paragraph::new(summary).render(inner, buf);
        if show_options {
            Paragraph::new(options)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
