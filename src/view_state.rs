use crate::assembler::launch_detail::DetailViewModel;
use crate::assembler::launch_list::{filter_launches, LaunchFilter, LaunchList};
use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::FetchError;
use chrono::{DateTime, Utc};
use std::future::Future;
use tracing::{debug, error};

/// Lifecycle of a view: Idle -> Loading -> Loaded | Failed
#[derive(Debug)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

#[derive(Debug)]
pub enum ViewEvent<T> {
    LoadStarted,
    LoadSucceeded(T),
    LoadFailed(FetchError),
}

impl<T> ViewState<T> {
    /// Results arriving outside of `Loading` are dropped
    pub fn apply(self, event: ViewEvent<T>) -> Self {
        match (self, event) {
            (_, ViewEvent::LoadStarted) => ViewState::Loading,
            (ViewState::Loading, ViewEvent::LoadSucceeded(data)) => ViewState::Loaded(data),
            (ViewState::Loading, ViewEvent::LoadFailed(e)) => ViewState::Failed(e),
            (state, _) => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// `Ok(None)` while nothing has been loaded yet
    pub fn into_result(self) -> Result<Option<T>, FetchError> {
        match self {
            ViewState::Loaded(data) => Ok(Some(data)),
            ViewState::Failed(e) => Err(e),
            ViewState::Idle | ViewState::Loading => Ok(None),
        }
    }
}

/// Run one load cycle: `LoadStarted`, await, then `LoadSucceeded` or `LoadFailed`
pub async fn drive_load<T, F>(state: ViewState<T>, view: &str, load: F) -> ViewState<T>
where
    F: Future<Output = Result<T, FetchError>>,
{
    let state = state.apply(ViewEvent::LoadStarted);
    debug!(view, "load started");
    match load.await {
        Ok(data) => state.apply(ViewEvent::LoadSucceeded(data)),
        Err(e) => {
            error!(view, error = %e, "load failed");
            state.apply(ViewEvent::LoadFailed(e))
        }
    }
}

#[derive(Debug)]
pub enum ListEvent {
    Load(ViewEvent<LaunchList>),
    FilterChanged(LaunchFilter),
}

#[derive(Debug, Default)]
pub struct LaunchListView {
    pub state: ViewState<LaunchList>,
    pub filter: LaunchFilter,
}

impl LaunchListView {
    pub fn apply(self, event: ListEvent) -> Self {
        match event {
            ListEvent::Load(load_event) => Self {
                state: self.state.apply(load_event),
                filter: self.filter,
            },
            ListEvent::FilterChanged(filter) => Self { filter, ..self },
        }
    }

    /// Empty unless the list is loaded
    pub fn visible_launches(&self, now: DateTime<Utc>) -> Vec<&Launch> {
        self.state
            .data()
            .map(|list| filter_launches(&list.launches, self.filter, now))
            .unwrap_or_default()
    }
}

pub type LaunchDetailView = ViewState<DetailViewModel>;
