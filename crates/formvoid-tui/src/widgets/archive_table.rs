//! Table mode listing: `ID | TYPE | TITLE | DATE | STATUS`

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Row, StatefulWidget, Table, TableState},
};

use formvoid_core::ContentRecord;

use super::fit_width;
use crate::theme::styles;

const ID_WIDTH: u16 = 4;
const TYPE_WIDTH: u16 = 12;
const DATE_WIDTH: u16 = 12;
const STATUS_WIDTH: u16 = 7;
const COLUMN_SPACING: u16 = 2;

/// Visible subset as table rows, no fillers
pub struct ArchiveTable<'a> {
    records: &'a [&'a ContentRecord],
    focus: usize,
}

impl<'a> ArchiveTable<'a> {
    pub fn new(records: &'a [&'a ContentRecord], focus: usize) -> Self {
        Self { records, focus }
    }
}

fn title_width(total: u16) -> usize {
    total
        .saturating_sub(ID_WIDTH + TYPE_WIDTH + DATE_WIDTH + STATUS_WIDTH + 4 * COLUMN_SPACING)
        .max(8) as usize
}

impl StatefulWidget for ArchiveTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let title_width = title_width(area.width);

        let header = Row::new(["ID", "TYPE", "TITLE", "DATE", "STATUS"])
            .style(styles::text_faint())
            .bottom_margin(1);

        let rows = self.records.iter().map(|record| {
            let status = if record.restricted {
                Span::styled(record.status_label(), styles::text_faint())
            } else {
                Span::styled(record.status_label(), styles::accent())
            };
            Row::new(vec![
                Span::styled(record.row_label(), styles::text_faint()),
                Span::styled(record.category.label(), styles::text_muted()),
                Span::styled(fit_width(&record.title, title_width), styles::text_bold()),
                Span::styled(record.date.clone(), styles::text_muted()),
                status,
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(ID_WIDTH),
                Constraint::Length(TYPE_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(DATE_WIDTH),
                Constraint::Length(STATUS_WIDTH),
            ],
        )
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(styles::selected())
        .highlight_symbol("▸ ");

        if self.records.is_empty() {
            state.select(None);
        } else {
            state.select(Some(self.focus.min(self.records.len() - 1)));
        }

        StatefulWidget::render(table, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use formvoid_app::config::default_catalog;

    #[test]
    fn test_table_lists_every_record() {
        let catalog = default_catalog().unwrap();
        let records: Vec<_> = catalog.iter().collect();
        let mut state = TableState::default();
        let mut term = TestTerminal::with_size(100, 12);

        term.render_stateful_widget(ArchiveTable::new(&records, 0), term.area(), &mut state);

        assert!(term.line_contains(0, "ID"));
        assert!(term.line_contains(0, "STATUS"));
        assert!(term.buffer_contains("Morning Routine System v2.0"));
        assert!(term.buffer_contains("SYSTEM_LOG"));
        assert!(term.buffer_contains("LOCKED"));
        assert!(term.buffer_contains("ACTIVE"));
        assert!(term.buffer_contains("INSPIRATION"));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_focus_selects_row() {
        let catalog = default_catalog().unwrap();
        let records: Vec<_> = catalog.iter().collect();
        let mut state = TableState::default();
        let mut term = TestTerminal::with_size(100, 12);

        term.render_stateful_widget(ArchiveTable::new(&records, 5), term.area(), &mut state);

        assert_eq!(state.selected(), Some(5));
        assert!(term.buffer_contains("▸ 06"));
    }

    #[test]
    fn test_title_width_has_floor() {
        assert_eq!(title_width(20), 8);
        assert_eq!(title_width(100), 100 - 43);
    }
}
