//! Main update function - handles state transitions (TEA pattern)
//!
//! Session transitions live in `navigation`; key mapping lives in `keys`.

use formvoid_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Session Transitions
        // ─────────────────────────────────────────────────────────
        Message::SelectRecord { id } => navigation::handle_select_record(state, &id),
        Message::SelectFocused => navigation::handle_select_focused(state),
        Message::Back => navigation::handle_back(state),
        Message::OpenAbout => navigation::handle_open_about(state),
        Message::ChooseCategory(filter) => navigation::handle_choose_category(state, filter),
        Message::ChooseContext { condition, need } => {
            navigation::handle_choose_context(state, &condition, &need)
        }
        Message::ToggleDisplayMode => navigation::handle_toggle_display_mode(state),
        Message::Reset => navigation::handle_reset(state),

        // ─────────────────────────────────────────────────────────
        // Hero Context Sentence
        // ─────────────────────────────────────────────────────────
        Message::CycleCondition { forward } => {
            state.context_picker.cycle_condition(forward);
            UpdateResult::none()
        }
        Message::CycleNeed { forward } => {
            state.context_picker.cycle_need(forward);
            UpdateResult::none()
        }
        Message::ApplyContextPicker => navigation::handle_apply_context_picker(state),

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            let len = state.visible().len();
            if len > 0 {
                state.focus = (state.focus + 1) % len;
            }
            UpdateResult::none()
        }
        Message::FocusPrev => {
            let len = state.visible().len();
            if len > 0 {
                state.focus = (state.focus + len - 1) % len;
            }
            UpdateResult::none()
        }
        Message::FocusFirst => {
            state.focus = 0;
            UpdateResult::none()
        }
        Message::FocusLast => {
            state.focus = state.visible().len().saturating_sub(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Notices
        // ─────────────────────────────────────────────────────────
        Message::ShareSelected => navigation::handle_share_selected(state),
        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
