//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::widgets::{Block, TableState};
use ratatui::Frame;

use formvoid_app::session::{DisplayMode, Screen};
use formvoid_app::AppState;

use super::{layout, widgets};
use crate::theme::styles;

/// Scroll positions owned by the renderer
#[derive(Debug, Default)]
pub struct RenderState {
    pub grid: widgets::GridViewport,
    pub table: TableState,
}

impl RenderState {
    pub fn scroll_to_top(&mut self) {
        self.grid.scroll_to_top();
        *self.table.offset_mut() = 0;
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `AppState`; only scroll positions in
/// `render_state` change.
pub fn view(frame: &mut Frame, state: &AppState, render_state: &mut RenderState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(styles::page()), area);

    let areas = layout::create(area);

    let header = widgets::MainHeader::new(&state.settings.brand.name)
        .active(state.filter().category_filter());
    frame.render_widget(header, areas.header);

    match state.session.screen() {
        Screen::Home => render_home(frame, state, render_state, areas.body),
        Screen::Detail => match state.selected_record() {
            Some(record) => frame.render_widget(widgets::DetailView::new(record), areas.body),
            None => frame.render_widget(widgets::EmptyState, areas.body),
        },
        Screen::About => {
            frame.render_widget(widgets::AboutView::new(&state.settings.brand), areas.body)
        }
    }

    frame.render_widget(
        widgets::KeyHints::new(state.session.screen(), &state.settings.brand.location),
        areas.footer,
    );

    if let Some(notice) = &state.notice {
        frame.render_widget(widgets::NoticeModal::new(notice), area);
    }
}

fn render_home(
    frame: &mut Frame,
    state: &AppState,
    render_state: &mut RenderState,
    body: ratatui::layout::Rect,
) {
    let home = layout::home(body);
    let visible = state.visible();

    if home.hero.height > 0 {
        let picker = &state.context_picker;
        frame.render_widget(
            widgets::HeroSentence::new(picker.condition(), picker.need()),
            home.hero,
        );
    }

    frame.render_widget(
        widgets::FilterBar::new(state.filter(), state.session.display_mode(), visible.len()),
        home.filter_bar,
    );

    if visible.is_empty() {
        frame.render_widget(widgets::EmptyState, home.listing);
        return;
    }

    match state.session.display_mode() {
        DisplayMode::Grid => {
            let plan = state.render_plan();
            let focused = state.focused_record().map(|r| r.id.as_str());
            frame.render_stateful_widget(
                widgets::MasonryGrid::new(&plan).focused(focused),
                home.listing,
                &mut render_state.grid,
            );
        }
        DisplayMode::Table => {
            frame.render_stateful_widget(
                widgets::ArchiveTable::new(&visible, state.focus),
                home.listing,
                &mut render_state.table,
            );
        }
    }
}
