//! Headless mode - line commands in, NDJSON events out
//!
//! Drives the same update function as the TUI, one stdin command per line,
//! and writes one JSON event per line to stdout. Notices are reported as
//! events and dismissed immediately.
//!
//! # Example
//!
//! ```text
//! > category blueprint
//! {"event":"state","screen":"home","selected_id":null,"display_mode":"grid","filter":{"kind":"category","filter":"BLUEPRINT"},"visible":["1","6"],"timestamp":1704700001000}
//! > select 3
//! {"event":"notice","title":"ACCESS DENIED","body":"This project is protected by NDA.","notice":{"notice":"refused","reason":"restricted","id":"3"},"timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

pub use command::HeadlessCommand;
pub use runner::{run_headless, run_with_io};

use chrono::Utc;
use serde::Serialize;
use std::io::Write;

use formvoid_app::masonry::{Filler, PlanEntry, Span};
use formvoid_app::session::{DisplayMode, Screen};
use formvoid_app::{AppState, FilterState, Notice};
use formvoid_core::prelude::*;

/// One entry of a `plan` event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanItem {
    Record { id: String, span: Span },
    /// Decorative cell, with its alignment and texts
    Filler(Filler),
    /// Table mode row
    Row {
        id: String,
        category: String,
        title: String,
        date: String,
        status: String,
    },
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Session after a command was applied
    State {
        screen: Screen,
        selected_id: Option<String>,
        display_mode: DisplayMode,
        filter: FilterState,
        /// Ids of the visible subset, in order
        visible: Vec<String>,
        timestamp: i64,
    },

    /// A notice was raised
    Notice {
        title: String,
        body: String,
        notice: Notice,
        timestamp: i64,
    },

    /// Current listing: grid plan or table rows
    Plan {
        display_mode: DisplayMode,
        entries: Vec<PlanItem>,
        timestamp: i64,
    },

    /// A command could not be understood
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn state(state: &AppState) -> Self {
        let session = &state.session;
        Self::State {
            screen: session.screen(),
            selected_id: session.selected_id().map(str::to_string),
            display_mode: session.display_mode(),
            filter: session.filter.clone(),
            visible: state.visible().iter().map(|r| r.id.clone()).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn notice(notice: &Notice) -> Self {
        Self::Notice {
            title: notice.title().to_string(),
            body: notice.body(),
            notice: notice.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn plan(state: &AppState) -> Self {
        let display_mode = state.session.display_mode();
        let entries = match display_mode {
            DisplayMode::Grid => {
                let plan = state.render_plan();
                debug!("Plan has {} entries ({} fillers)", plan.len(), plan.filler_count());
                plan.iter()
                    .map(|entry| match entry {
                        PlanEntry::Content { record, span } => PlanItem::Record {
                            id: record.id.clone(),
                            span: *span,
                        },
                        PlanEntry::Filler(filler) => PlanItem::Filler(*filler),
                    })
                    .collect()
            }
            DisplayMode::Table => state
                .visible()
                .iter()
                .map(|record| PlanItem::Row {
                    id: record.row_label(),
                    category: record.category.label().to_string(),
                    title: record.title.clone(),
                    date: record.date.clone(),
                    status: record.status_label().to_string(),
                })
                .collect(),
        };

        Self::Plan {
            display_mode,
            entries,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}
