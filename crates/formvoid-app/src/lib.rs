//! formvoid-app - Archive browsing state for FORM & VOID
//!
//! This crate holds the filter engine, the masonry layout composer and the
//! view state machine, wired together with the TEA (The Elm Architecture)
//! pattern. It also loads settings and the catalog from `.formvoid/`.

pub mod config;
pub mod context;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod masonry;
pub mod message;
pub mod process;
pub mod session;
pub mod state;

// Re-export primary types
pub use filter::{visible, FilterState};
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use masonry::{compose, Filler, PlanEntry, RenderPlan, Span};
pub use message::Message;
pub use process::process_message;
pub use session::{DisplayMode, Refusal, Screen, Session, Transition};
pub use state::{AppPhase, AppState, Notice};
