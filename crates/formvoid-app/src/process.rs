//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! hands back the actions the caller should perform.

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in order until none remain. Returns
/// every action produced along the way.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}
