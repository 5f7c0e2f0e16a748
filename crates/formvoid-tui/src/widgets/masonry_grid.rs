//! Masonry grid for HOME in grid mode
//!
//! Entries of a [`RenderPlan`] are packed with a dense occupancy placer:
//! each entry takes the first free slot scanning rows top to bottom and
//! columns left to right, so small entries back-fill holes left by tall and
//! wide ones. Column count follows the available width.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span as TextSpan},
    widgets::{Block, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

use formvoid_app::masonry::{Alignment, Filler, PlanEntry, RenderPlan, Span};
use formvoid_core::ContentRecord;

use super::fit_width;
use crate::theme::styles;

/// Terminal rows per grid row
pub const CELL_HEIGHT: u16 = 6;

/// Columns for a given width: 4 on wide terminals, 2 on medium, 1 on narrow
pub fn column_count(width: u16) -> u16 {
    match width {
        w if w >= 100 => 4,
        w if w >= 56 => 2,
        _ => 1,
    }
}

/// Grid cell occupied by one plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Placement {
    fn bottom(&self) -> u16 {
        self.row + self.rows
    }
}

/// Dense placement of `spans` into `columns` columns
///
/// Column spans wider than the grid are clamped to the grid.
pub fn place<I>(spans: I, columns: u16) -> Vec<Placement>
where
    I: IntoIterator<Item = Span>,
{
    let columns = columns.max(1);
    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let mut placements = Vec::new();

    for span in spans {
        let cols = span.columns().min(columns);
        let rows = span.rows();

        let mut row = 0;
        let placement = loop {
            let free_col =
                (0..=columns - cols).find(|&col| is_free(&occupied, row, col, cols, rows));
            if let Some(col) = free_col {
                break Placement {
                    col,
                    row,
                    cols,
                    rows,
                };
            }
            row += 1;
        };

        occupy(&mut occupied, columns, &placement);
        placements.push(placement);
    }

    placements
}

fn is_free(occupied: &[Vec<bool>], row: u16, col: u16, cols: u16, rows: u16) -> bool {
    (row..row + rows).all(|r| {
        occupied.get(r as usize).map_or(true, |line| {
            (col..col + cols).all(|c| !line[c as usize])
        })
    })
}

fn occupy(occupied: &mut Vec<Vec<bool>>, columns: u16, p: &Placement) {
    while occupied.len() < p.bottom() as usize {
        occupied.push(vec![false; columns as usize]);
    }
    for r in p.row..p.bottom() {
        for c in p.col..p.col + p.cols {
            occupied[r as usize][c as usize] = true;
        }
    }
}

/// First grid row shown by the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridViewport {
    pub offset: u16,
}

impl GridViewport {
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll the least amount that shows all of `p`; entries taller than
    /// the viewport are shown from their top
    fn reveal(&mut self, p: &Placement, visible_rows: u16) {
        if p.row < self.offset || p.rows >= visible_rows {
            self.offset = p.row;
        } else if p.bottom() > self.offset + visible_rows {
            self.offset = p.bottom().saturating_sub(visible_rows);
        }
    }
}

/// The grid itself
pub struct MasonryGrid<'a> {
    plan: &'a RenderPlan<'a>,
    focused_id: Option<&'a str>,
}

impl<'a> MasonryGrid<'a> {
    pub fn new(plan: &'a RenderPlan<'a>) -> Self {
        Self {
            plan,
            focused_id: None,
        }
    }

    pub fn focused(mut self, id: Option<&'a str>) -> Self {
        self.focused_id = id;
        self
    }
}

impl StatefulWidget for MasonryGrid<'_> {
    type State = GridViewport;

    fn render(self, area: Rect, buf: &mut Buffer, viewport: &mut GridViewport) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let columns = column_count(area.width);
        let placements = place(self.plan.iter().map(PlanEntry::span), columns);
        let visible_rows = (area.height / CELL_HEIGHT).max(1);

        let focused_index = self.focused_id.and_then(|id| self.plan.position_of(id));
        if let Some(p) = focused_index.and_then(|i| placements.get(i)) {
            viewport.reveal(p, visible_rows);
        }

        let col_width = area.width / columns;

        for (index, (entry, p)) in self.plan.iter().zip(&placements).enumerate() {
            if p.row < viewport.offset || p.row >= viewport.offset + visible_rows {
                continue;
            }

            let x = area.x + p.col * col_width;
            let width = if p.col + p.cols == columns {
                area.right() - x
            } else {
                p.cols * col_width
            };
            let y = area.y + (p.row - viewport.offset) * CELL_HEIGHT;
            let cell = Rect::new(x, y, width, p.rows * CELL_HEIGHT).intersection(area);

            match entry {
                PlanEntry::Content { record, .. } => {
                    render_record(record, focused_index == Some(index), cell, buf)
                }
                PlanEntry::Filler(filler) => render_filler(filler, cell, buf),
            }
        }
    }
}

fn render_record(record: &ContentRecord, focused: bool, area: Rect, buf: &mut Buffer) {
    let label_width = area.width.saturating_sub(4) as usize;
    let label = fit_width(
        &format!(" {} · {} ", record.row_label(), record.category),
        label_width,
    );
    let block = styles::card_block(focused).title(TextSpan::styled(
        label,
        if focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        },
    ));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let title_area = Rect {
        height: inner.height.saturating_sub(1).max(1),
        ..inner
    };
    Paragraph::new(record.title.as_str())
        .style(styles::text_bold())
        .wrap(Wrap { trim: true })
        .render(title_area, buf);

    if inner.height >= 2 {
        let mut meta = vec![TextSpan::styled(
            fit_width(&record.date, inner.width as usize),
            styles::text_faint(),
        )];
        if record.restricted {
            meta.push(TextSpan::raw(" "));
            meta.push(TextSpan::styled("LOCKED", styles::text_muted()));
        }
        let meta_area = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        Paragraph::new(Line::from(meta)).render(meta_area, buf);
    }
}

fn render_filler(filler: &Filler, area: Rect, buf: &mut Buffer) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::new();
    if let Some(primary) = filler.primary_text {
        lines.push(Line::from(TextSpan::styled(primary, styles::text_quote())));
    }
    if let Some(secondary) = filler.secondary_text {
        lines.push(Line::from(TextSpan::styled(secondary, styles::text_faint())));
    }
    if lines.is_empty() || inner.height == 0 {
        return;
    }

    let text_height = (lines.len() as u16).min(inner.height);
    let (top, alignment) = match filler.alignment {
        Alignment::Center => (
            inner.y + (inner.height - text_height) / 2,
            ratatui::layout::Alignment::Center,
        ),
        Alignment::BottomLeft => (
            inner.bottom() - text_height,
            ratatui::layout::Alignment::Left,
        ),
    };

    Paragraph::new(lines).alignment(alignment).render(
        Rect {
            y: top,
            height: text_height,
            ..inner
        },
        buf,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use formvoid_app::config::default_catalog;
    use formvoid_app::filter::{visible, FilterState};
    use formvoid_app::masonry::compose;

    fn at(col: u16, row: u16, cols: u16, rows: u16) -> Placement {
        Placement {
            col,
            row,
            cols,
            rows,
        }
    }

    fn default_spans() -> Vec<Span> {
        let catalog = default_catalog().unwrap();
        let visible = visible(&catalog, &FilterState::default());
        compose(&visible).iter().map(PlanEntry::span).collect()
    }

    #[test]
    fn test_column_count_breakpoints() {
        assert_eq!(column_count(120), 4);
        assert_eq!(column_count(100), 4);
        assert_eq!(column_count(80), 2);
        assert_eq!(column_count(40), 1);
    }

    #[test]
    fn test_dense_placement_four_columns() {
        let placements = place(default_spans(), 4);

        // 1, 2, void-1, 3, 4, void-2, 5, 6, void-3, 7
        assert_eq!(
            placements,
            vec![
                at(0, 0, 1, 2),
                at(1, 0, 1, 1),
                at(2, 0, 1, 1),
                at(3, 0, 1, 1),
                at(1, 1, 1, 2),
                at(2, 1, 2, 1),
                at(0, 2, 1, 1),
                at(2, 2, 1, 2),
                at(3, 2, 1, 1),
                at(0, 3, 1, 1),
            ]
        );
    }

    #[test]
    fn test_dense_placement_backfills_two_columns() {
        let placements = place(default_spans(), 2);

        // void-2 is wide and drops below; record 5 back-fills the hole above it
        assert_eq!(placements[5], at(0, 4, 2, 1));
        assert_eq!(placements[6], at(0, 3, 1, 1));
    }

    #[test]
    fn test_single_column_clamps_wide_entries() {
        let placements = place(default_spans(), 1);

        assert!(placements.iter().all(|p| p.col == 0 && p.cols == 1));
        assert_eq!(placements.last(), Some(&at(0, 12, 1, 1)));
    }

    #[test]
    fn test_grid_renders_records_and_fillers() {
        let catalog = default_catalog().unwrap();
        let visible = visible(&catalog, &FilterState::default());
        let plan = compose(&visible);
        let mut viewport = GridViewport::default();
        let mut term = TestTerminal::with_size(100, 24);

        term.render_stateful_widget(MasonryGrid::new(&plan), term.area(), &mut viewport);

        assert!(term.buffer_contains("01 · BLUEPRINT"));
        assert!(term.buffer_contains("Morning Routine"));
        assert!(term.buffer_contains("The Quiet Archive"));
        assert!(term.buffer_contains("02:00 AM"));
        assert!(term.buffer_contains("LOCKED"));
    }

    #[test]
    fn test_focus_scrolls_into_view_and_back() {
        let catalog = default_catalog().unwrap();
        let visible = visible(&catalog, &FilterState::default());
        let plan = compose(&visible);
        let mut viewport = GridViewport::default();
        let mut term = TestTerminal::with_size(40, 12);

        let grid = MasonryGrid::new(&plan).focused(Some("7"));
        term.render_stateful_widget(grid, term.area(), &mut viewport);
        assert_eq!(viewport.offset, 11);
        assert!(term.buffer_contains("Library of Silence"));

        viewport.scroll_to_top();
        let grid = MasonryGrid::new(&plan).focused(Some("1"));
        term.render_stateful_widget(grid, term.area(), &mut viewport);
        assert_eq!(viewport.offset, 0);
        assert!(term.buffer_contains("Flow Architect"));
    }
}
