//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use serde::Serialize;

use formvoid_core::{Catalog, ContentRecord};

use crate::config::Settings;
use crate::context::ContextPicker;
use crate::filter::{self, FilterState};
use crate::masonry::{self, RenderPlan};
use crate::session::{Refusal, Session};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// A message for the user that blocks input until dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// A guarded transition was refused
    Refused(Refusal),

    /// A selection named a record that is not in the catalog
    InvalidSelection { id: String },

    /// Permalink of the record on the detail screen
    Link { id: String, url: String },

    /// Anything else worth telling the user
    Error { message: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Refused(Refusal::Restricted { .. }) => "ACCESS DENIED",
            Notice::Refused(Refusal::NotAvailable { .. }) => "NOT AVAILABLE",
            Notice::InvalidSelection { .. } => "UNKNOWN RECORD",
            Notice::Link { .. } => "SHARE LINK",
            Notice::Error { .. } => "ERROR",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notice::Refused(Refusal::Restricted { .. }) => {
                "This project is protected by NDA.".to_string()
            }
            Notice::Refused(refusal) => refusal.to_string(),
            Notice::InvalidSelection { id } => format!("No record with id '{id}' in the archive."),
            Notice::Link { url, .. } => url.clone(),
            Notice::Error { message } => message.clone(),
        }
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Directory that holds `.formvoid/`
    pub project_path: PathBuf,

    pub settings: Settings,

    /// Read-only for the whole run
    pub catalog: Catalog,

    /// Current view and filter
    pub session: Session,

    pub context_picker: ContextPicker,

    /// Index of the focused record within the visible subset
    pub focus: usize,

    pub notice: Option<Notice>,
}

impl AppState {
    /// State with default settings, rooted at the current directory
    pub fn new(catalog: Catalog) -> Self {
        Self::with_settings(PathBuf::from("."), Settings::default(), catalog)
    }

    pub fn with_settings(project_path: PathBuf, settings: Settings, catalog: Catalog) -> Self {
        let context_picker = ContextPicker::new(&settings.context);
        Self {
            phase: AppPhase::default(),
            project_path,
            settings,
            catalog,
            session: Session::new(),
            context_picker,
            focus: 0,
            notice: None,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.session.filter
    }

    /// The visible subset for the current filter
    pub fn visible(&self) -> Vec<&ContentRecord> {
        filter::visible(&self.catalog, &self.session.filter)
    }

    /// Grid plan for the visible subset
    pub fn render_plan(&self) -> RenderPlan<'_> {
        masonry::compose(&self.visible())
    }

    pub fn focused_record(&self) -> Option<&ContentRecord> {
        self.visible().get(self.focus).copied()
    }

    /// The record on the detail screen
    pub fn selected_record(&self) -> Option<&ContentRecord> {
        self.session
            .selected_id()
            .and_then(|id| self.catalog.get(id))
    }

    /// Keep focus inside the visible subset
    pub fn clamp_focus(&mut self) {
        let len = self.visible().len();
        self.focus = self.focus.min(len.saturating_sub(1));
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
