//! Detail screen for one record

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use formvoid_core::ContentRecord;

use crate::theme::{palette, styles};

const SIDEBAR_WIDTH: u16 = 34;

/// Metadata side bar on the left, description on the right
pub struct DetailView<'a> {
    record: &'a ContentRecord,
}

impl<'a> DetailView<'a> {
    pub fn new(record: &'a ContentRecord) -> Self {
        Self { record }
    }

    fn sidebar(&self) -> Vec<Line<'a>> {
        let record = self.record;
        vec![
            Line::from(Span::styled("← BACK TO ARCHIVE", styles::text_muted())),
            Line::from(""),
            Line::from(Span::styled(record.category.label(), styles::accent())),
            Line::from(Span::styled(record.title.as_str(), styles::text_bold())),
            Line::from(""),
            Line::from(Span::styled("DATE", styles::text_faint())),
            Line::from(Span::styled(record.date.as_str(), styles::text_primary())),
            Line::from(""),
            Line::from(Span::styled(
                format!("REF_ID: {}", record.reference_id()),
                styles::text_faint(),
            )),
        ]
    }

    fn body(&self) -> Vec<Line<'a>> {
        let record = self.record;
        let mut lines = vec![
            Line::from(Span::styled("OVERVIEW", styles::text_faint())),
            Line::from(""),
        ];

        match record.description.as_deref() {
            Some(text) => lines.extend(
                text.lines()
                    .map(|l| Line::from(Span::styled(l, styles::text_primary()))),
            ),
            None => lines.push(Line::from(Span::styled(
                "No notes on file for this record.",
                styles::text_muted(),
            ))),
        }

        if !record.keywords.is_empty() {
            let tags = record
                .keywords
                .iter()
                .map(|k| format!("#{k}"))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(tags, styles::accent())));
        }

        if !record.image.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("IMAGE ", styles::text_faint()),
                Span::styled(record.image.as_str(), styles::text_muted()),
            ]));
        }

        lines
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let narrow = area.width < SIDEBAR_WIDTH * 2;
        let [side, main] = if narrow {
            Layout::vertical([Constraint::Length(11), Constraint::Min(0)]).areas(area)
        } else {
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area)
        };

        let side_block = Block::default()
            .borders(if narrow { Borders::BOTTOM } else { Borders::RIGHT })
            .border_style(ratatui::style::Style::default().fg(palette::LINE))
            .padding(Padding::new(1, 1, 1, 0));
        Paragraph::new(self.sidebar())
            .wrap(Wrap { trim: true })
            .block(side_block)
            .render(side, buf);

        Paragraph::new(self.body())
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
            .render(main, buf);
    }
}
