//! Application state store.
//!
//! `AppState` is the single source of truth. It changes only through
//! [`Store::dispatch`], which runs the intent through [`AppReducer`].

pub mod action;
mod app_state;
mod async_result;
pub mod form;
pub mod mvi;
mod posts;
mod requests;

pub use action::Action;
pub use app_state::{AppIntent, AppReducer, AppState};
pub use async_result::AsyncResult;
pub use posts::{ActionKind, PostsIntent, PostsReducer, PostsState};
pub use requests::{RequestFailure, RequestsIntent, RequestsReducer, RequestsState};

use crate::store::mvi::Reducer;

/// Owner of the application state.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `intent` to the current state.
    pub fn dispatch(&mut self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        tracing::trace!(?intent, "dispatch");
        self.state = AppReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// The state as pretty-printed JSON.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state)
    }
}
