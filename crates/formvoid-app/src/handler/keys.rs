//! Key event handlers for each screen

use formvoid_core::CategoryFilter;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::session::Screen;
use crate::state::AppState;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, even over a notice
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.notice.is_some() {
        return Some(Message::DismissNotice);
    }

    match state.session.screen() {
        Screen::Home => handle_key_home(key),
        Screen::Detail => handle_key_detail(key),
        Screen::About => handle_key_about(key),
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Category nav: 0 is ALL, then the categories in display order
        InputKey::Char(c @ '0'..='4') => {
            let index = c.to_digit(10)? as usize;
            CategoryFilter::OPTIONS
                .get(index)
                .copied()
                .map(Message::ChooseCategory)
        }

        // Focus
        InputKey::Right | InputKey::Down | InputKey::Tab => Some(Message::FocusNext),
        InputKey::Char('l' | 'j') => Some(Message::FocusNext),
        InputKey::Left | InputKey::Up | InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Char('h' | 'k') => Some(Message::FocusPrev),
        InputKey::Home | InputKey::Char('g') => Some(Message::FocusFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::FocusLast),
        InputKey::Enter => Some(Message::SelectFocused),

        // Hero sentence
        InputKey::Char('c') => Some(Message::CycleCondition { forward: true }),
        InputKey::Char('C') => Some(Message::CycleCondition { forward: false }),
        InputKey::Char('n') => Some(Message::CycleNeed { forward: true }),
        InputKey::Char('N') => Some(Message::CycleNeed { forward: false }),
        InputKey::Char('f') => Some(Message::ApplyContextPicker),

        InputKey::Char('t') => Some(Message::ToggleDisplayMode),
        InputKey::Char('a') => Some(Message::OpenAbout),
        InputKey::Char('r') => Some(Message::Reset),

        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::Back),
        InputKey::Char('s') => Some(Message::ShareSelected),
        InputKey::Char('a') => Some(Message::OpenAbout),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_about(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::Back),
        InputKey::Char('r') => Some(Message::Reset),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
