//! Browsing session: the view state machine
//!
//! A [`Session`] is an immutable value. Every transition takes `&self` and
//! returns either the next session or a [`Refusal`] that says why nothing
//! changed. Leaving HOME never touches the filter or the display mode, so
//! coming back restores exactly what was on screen.

use std::fmt;

use serde::Serialize;

use formvoid_core::prelude::*;
use formvoid_core::{Catalog, CategoryFilter};

use crate::filter::FilterState;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    Detail,
    About,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Home => write!(f, "HOME"),
            Screen::Detail => write!(f, "DETAIL"),
            Screen::About => write!(f, "ABOUT"),
        }
    }
}

/// How HOME lists the visible subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Grid,
    Table,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Grid => DisplayMode::Table,
            DisplayMode::Table => DisplayMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "GRID",
            DisplayMode::Table => "TABLE",
        }
    }
}

/// Which screen is active and what it shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub screen: Screen,
    /// Set only while `screen == Detail`
    pub selected_id: Option<String>,
    pub display_mode: DisplayMode,
}

/// Named actions of the state machine, used in refusals and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SelectRecord,
    Back,
    OpenAbout,
    ChooseCategory,
    ChooseContext,
    ToggleDisplayMode,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::SelectRecord => "select record",
            Action::Back => "go back",
            Action::OpenAbout => "open about",
            Action::ChooseCategory => "choose category",
            Action::ChooseContext => "choose context",
            Action::ToggleDisplayMode => "toggle display mode",
            Action::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Why a transition did not happen. The session is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Refusal {
    /// The record is listed but its detail content is off limits
    Restricted { id: String },

    /// The action is not legal from the current screen
    NotAvailable { action: Action, screen: Screen },
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::Restricted { .. } => {
                write!(f, "ACCESS DENIED: this project is protected by NDA.")
            }
            Refusal::NotAvailable { action, screen } => {
                write!(f, "Cannot {action} from {screen}")
            }
        }
    }
}

/// Result of a guarded transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved(Session),
    Refused(Refusal),
}

/// View and filter state of one browsing session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Session {
    pub view: ViewState,
    pub filter: FilterState,
}

impl Session {
    /// HOME, grid, `Category(ALL)`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.view.display_mode
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.view.selected_id.as_deref()
    }

    pub fn is_home(&self) -> bool {
        self.view.screen == Screen::Home
    }

    fn refuse(&self, action: Action) -> Transition {
        Transition::Refused(Refusal::NotAvailable {
            action,
            screen: self.view.screen,
        })
    }

    /// Open a record's detail screen. HOME only.
    ///
    /// An id that is not in the catalog is a caller error. A restricted record
    /// is refused with [`Refusal::Restricted`].
    pub fn select_record(&self, catalog: &Catalog, id: &str) -> Result<Transition> {
        let record = catalog.require(id)?;

        if !self.is_home() {
            return Ok(self.refuse(Action::SelectRecord));
        }

        if record.restricted {
            return Ok(Transition::Refused(Refusal::Restricted {
                id: record.id.clone(),
            }));
        }

        Ok(Transition::Moved(Session {
            view: ViewState {
                screen: Screen::Detail,
                selected_id: Some(record.id.clone()),
                display_mode: self.view.display_mode,
            },
            filter: self.filter.clone(),
        }))
    }

    /// Return to HOME from DETAIL or ABOUT
    pub fn back(&self) -> Transition {
        match self.view.screen {
            Screen::Detail | Screen::About => Transition::Moved(Session {
                view: ViewState {
                    screen: Screen::Home,
                    selected_id: None,
                    display_mode: self.view.display_mode,
                },
                filter: self.filter.clone(),
            }),
            Screen::Home => self.refuse(Action::Back),
        }
    }

    pub fn open_about(&self) -> Session {
        Session {
            view: ViewState {
                screen: Screen::About,
                selected_id: None,
                display_mode: self.view.display_mode,
            },
            filter: self.filter.clone(),
        }
    }

    /// Switch to a category filter and go HOME; the display mode is kept
    pub fn choose_category(&self, filter: CategoryFilter) -> Session {
        self.home_with(FilterState::Category { filter })
    }

    /// Switch to a context filter and go HOME; clears any category filter
    pub fn choose_context(&self, condition: &str, need: &str) -> Session {
        self.home_with(FilterState::context(condition, need))
    }

    /// Flip grid and table. HOME only.
    pub fn toggle_display_mode(&self) -> Transition {
        if !self.is_home() {
            return self.refuse(Action::ToggleDisplayMode);
        }
        let mut next = self.clone();
        next.view.display_mode = self.view.display_mode.toggled();
        Transition::Moved(next)
    }

    /// HOME, grid, `Category(ALL)`, nothing selected
    pub fn reset(&self) -> Session {
        Session::new()
    }

    fn home_with(&self, filter: FilterState) -> Session {
        Session {
            view: ViewState {
                screen: Screen::Home,
                selected_id: None,
                display_mode: self.view.display_mode,
            },
            filter,
        }
    }
}
