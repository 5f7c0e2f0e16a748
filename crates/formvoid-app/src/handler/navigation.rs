//! Session transition handlers
//!
//! Each handler asks the [`Session`] for the next state, stores it, and keeps
//! focus and notices consistent with the new visible subset.

use formvoid_core::prelude::*;
use formvoid_core::CategoryFilter;

use crate::session::{Action, Screen, Session, Transition};
use crate::state::{AppState, Notice};

use super::{UpdateAction, UpdateResult};

/// Store `next` and report the presentational side effect, if any
fn enter(state: &mut AppState, action: Action, next: Session) -> UpdateResult {
    let entered_new_screen =
        next.screen() != Screen::Home && next.screen() != state.session.screen();
    let filter_changed = next.filter != state.session.filter;

    debug!(
        "{}: {} -> {} (filter: {}, mode: {})",
        action,
        state.session.screen(),
        next.screen(),
        next.filter,
        next.display_mode().label()
    );

    state.session = next;
    if filter_changed {
        state.focus = 0;
    }
    state.clamp_focus();

    if entered_new_screen {
        UpdateResult::action(UpdateAction::ScrollToTop)
    } else {
        UpdateResult::none()
    }
}

fn apply(state: &mut AppState, action: Action, transition: Transition) -> UpdateResult {
    match transition {
        Transition::Moved(next) => enter(state, action, next),
        Transition::Refused(refusal) => {
            info!("{} refused: {:?}", action, refusal);
            state.notice = Some(Notice::Refused(refusal));
            UpdateResult::none()
        }
    }
}

pub fn handle_select_record(state: &mut AppState, id: &str) -> UpdateResult {
    match state.session.select_record(&state.catalog, id) {
        Ok(transition) => {
            if let Transition::Moved(_) = transition {
                if let Some(pos) = state.visible().iter().position(|r| r.id == id) {
                    state.focus = pos;
                }
            }
            apply(state, Action::SelectRecord, transition)
        }
        Err(e) => {
            warn!("Rejected selection: {}", e);
            state.notice = Some(Notice::InvalidSelection { id: id.to_string() });
            UpdateResult::none()
        }
    }
}

pub fn handle_select_focused(state: &mut AppState) -> UpdateResult {
    match state.focused_record().map(|r| r.id.clone()) {
        Some(id) => handle_select_record(state, &id),
        None => UpdateResult::none(),
    }
}

pub fn handle_back(state: &mut AppState) -> UpdateResult {
    let transition = state.session.back();
    apply(state, Action::Back, transition)
}

pub fn handle_open_about(state: &mut AppState) -> UpdateResult {
    let next = state.session.open_about();
    enter(state, Action::OpenAbout, next)
}

pub fn handle_choose_category(state: &mut AppState, filter: CategoryFilter) -> UpdateResult {
    let next = state.session.choose_category(filter);
    enter(state, Action::ChooseCategory, next)
}

pub fn handle_choose_context(state: &mut AppState, condition: &str, need: &str) -> UpdateResult {
    let next = state.session.choose_context(condition, need);
    enter(state, Action::ChooseContext, next)
}

pub fn handle_apply_context_picker(state: &mut AppState) -> UpdateResult {
    let Some((condition, need)) = state
        .context_picker
        .selection()
        .map(|(c, n)| (c.to_string(), n.to_string()))
    else {
        debug!("Context picker has no options; nothing to apply");
        return UpdateResult::none();
    };
    handle_choose_context(state, &condition, &need)
}

pub fn handle_toggle_display_mode(state: &mut AppState) -> UpdateResult {
    let transition = state.session.toggle_display_mode();
    apply(state, Action::ToggleDisplayMode, transition)
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let next = state.session.reset();
    let result = enter(state, Action::Reset, next);
    state.focus = 0;
    result
}

pub fn handle_share_selected(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.selected_record().map(|r| r.id.clone()) else {
        return UpdateResult::none();
    };

    state.notice = Some(match state.settings.share.permalink(&id) {
        Ok(url) => {
            info!("Share link for {}: {}", id, url);
            Notice::Link {
                id,
                url: url.to_string(),
            }
        }
        Err(e) => {
            warn!("Cannot build share link: {}", e);
            Notice::Error {
                message: e.to_string(),
            }
        }
    });
    UpdateResult::none()
}
