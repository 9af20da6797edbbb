use tvmaze::models::Show;
use crate::rows::{Catalog, RowRules};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load shows";

/// Result of the one-shot catalog load.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Vec<Show>),
    Failed,
}

#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Catalog),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Loading
    }
}

impl ViewState {
    pub fn transition(self, event: LoadEvent, rules: &RowRules) -> ViewState {
        match (self, event) {
            (ViewState::Loading, LoadEvent::Loaded(shows)) => ViewState::Ready(Catalog::new(shows, rules)),
            (ViewState::Loading, LoadEvent::Failed) => ViewState::Error(LOAD_ERROR_MESSAGE.to_string()),
            (state, event) => {
                tracing::warn!(?event, "ignoring load event outside of loading state");
                state
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            ViewState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn hero(&self) -> Option<&Show> {
        self.catalog().and_then(|catalog| catalog.hero())
    }
}
