use super::cases::CaseSummary;
use super::selection::Selection;
use crate::config::Config;
use std::rc::Rc;

/// Transitions of the dashboard state
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    /// The fetched data has been summarised
    DataLoaded(Rc<CaseSummary>),
    /// A county checkbox was clicked
    Toggle(String),
    /// The search box changed
    Search(String),
}

/// Session state of the dashboard view
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardState {
    pub data: Option<Rc<CaseSummary>>,
    pub selection: Selection,
    pub search: String,
    /// Standing selection-limit message, if any
    pub error: Option<String>,
    /// Bumped on every successful toggle; zero until the user changes the
    /// selection.
    pub revision: u32,
}

impl DashboardState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Returns true while the data has not arrived
    pub fn is_loading(&self) -> bool {
        self.data.is_none()
    }

    /// Applies an action, returning the next state
    pub fn apply(&self, action: DashboardAction) -> Self {
        let mut next = self.clone();
        match action {
            DashboardAction::DataLoaded(summary) => next.data = Some(summary),
            DashboardAction::Search(text) => next.search = text,
            DashboardAction::Toggle(county) => {
                if next.selection.toggle(&county).is_change() {
                    next.error = None;
                    next.revision = next.revision.wrapping_add(1);
                } else {
                    next.error = Some(Config::selection_limit_message());
                }
            }
        }
        next
    }

    /// Counties listed in the table for the current search text
    pub fn visible_counties(&self) -> Vec<&str> {
        self.data
            .as_ref()
            .map(|summary| summary.list_for(&self.search))
            .unwrap_or_default()
    }
}
