//! Message types for the application (TEA pattern)

use formvoid_core::CategoryFilter;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session Transitions
    // ─────────────────────────────────────────────────────────
    /// Open a record's detail screen
    SelectRecord { id: String },
    /// Open the focused record's detail screen
    SelectFocused,
    /// Return to HOME from DETAIL or ABOUT
    Back,
    OpenAbout,
    ChooseCategory(CategoryFilter),
    ChooseContext { condition: String, need: String },
    ToggleDisplayMode,
    /// Back to HOME, grid, ALL
    Reset,

    // ─────────────────────────────────────────────────────────
    // Hero Context Sentence
    // ─────────────────────────────────────────────────────────
    CycleCondition { forward: bool },
    CycleNeed { forward: bool },
    /// Apply the picker's current condition/need as a context filter
    ApplyContextPicker,

    // ─────────────────────────────────────────────────────────
    // Focus within the visible subset
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusFirst,
    FocusLast,

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────
    /// Show the permalink of the record on the detail screen
    ShareSelected,
    DismissNotice,
}
