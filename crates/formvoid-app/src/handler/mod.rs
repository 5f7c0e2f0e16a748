//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Session transitions, refusals and notices
//! - `keys`: Key event handlers per screen

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

use crate::message::Message;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// A new screen was entered; the renderer should show it from the top
    ScrollToTop,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
