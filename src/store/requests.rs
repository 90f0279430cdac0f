use serde::Serialize;
use std::collections::BTreeMap;

use crate::store::mvi::{Intent, Reducer, StoreState};
use crate::store::posts::{ActionKind, PostsIntent};

/// Most recent rejected request, kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestFailure {
    pub kind: ActionKind,
    pub message: String,
}

/// Request bookkeeping, separate from the post slices.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequestsState {
    /// Outstanding request count per kind.
    pub in_flight: BTreeMap<ActionKind, usize>,
    pub last_error: Option<RequestFailure>,
}

impl StoreState for RequestsState {}

impl RequestsState {
    pub fn is_loading(&self, kind: ActionKind) -> bool {
        self.in_flight.get(&kind).copied().unwrap_or(0) > 0
    }

    pub fn total_in_flight(&self) -> usize {
        self.in_flight.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestsIntent {
    Started(ActionKind),
    Succeeded(ActionKind),
    Failed { kind: ActionKind, message: String },
    DismissError,
}

impl Intent for RequestsIntent {}

impl From<&PostsIntent> for RequestsIntent {
    fn from(intent: &PostsIntent) -> Self {
        let kind = intent.kind();
        if intent.is_pending() {
            return RequestsIntent::Started(kind);
        }
        match intent.error() {
            Some(err) => RequestsIntent::Failed {
                kind,
                message: err.to_string(),
            },
            None => RequestsIntent::Succeeded(kind),
        }
    }
}

pub struct RequestsReducer;

impl Reducer for RequestsReducer {
    type State = RequestsState;
    type Intent = RequestsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let RequestsState {
            mut in_flight,
            last_error,
        } = state;

        match intent {
            RequestsIntent::Started(kind) => {
                *in_flight.entry(kind).or_insert(0) += 1;
                RequestsState {
                    in_flight,
                    last_error,
                }
            }
            RequestsIntent::Succeeded(kind) => {
                settle(&mut in_flight, kind);
                // A later success of the same kind supersedes its failure.
                let last_error = last_error.filter(|failure| failure.kind != kind);
                RequestsState {
                    in_flight,
                    last_error,
                }
            }
            RequestsIntent::Failed { kind, message } => {
                settle(&mut in_flight, kind);
                RequestsState {
                    in_flight,
                    last_error: Some(RequestFailure { kind, message }),
                }
            }
            RequestsIntent::DismissError => RequestsState {
                in_flight,
                last_error: None,
            },
        }
    }
}

fn settle(in_flight: &mut BTreeMap<ActionKind, usize>, kind: ActionKind) {
    if let Some(count) = in_flight.get_mut(&kind) {
        *count = count.saturating_sub(1);
        if *count == 0 {
            in_flight.remove(&kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_then_succeeded_clears_in_flight() {
        let state = RequestsReducer::reduce(
            RequestsState::default(),
            RequestsIntent::Started(ActionKind::ListPosts),
        );
        assert!(state.is_loading(ActionKind::ListPosts));

        let state =
            RequestsReducer::reduce(state, RequestsIntent::Succeeded(ActionKind::ListPosts));
        assert!(!state.is_loading(ActionKind::ListPosts));
        assert_eq!(state.total_in_flight(), 0);
    }

    #[test]
    fn overlapping_requests_are_counted() {
        let mut state = RequestsState::default();
        state = RequestsReducer::reduce(state, RequestsIntent::Started(ActionKind::GetPost));
        state = RequestsReducer::reduce(state, RequestsIntent::Started(ActionKind::GetPost));
        state = RequestsReducer::reduce(state, RequestsIntent::Succeeded(ActionKind::GetPost));
        assert!(state.is_loading(ActionKind::GetPost));
    }

    #[test]
    fn failure_is_recorded_and_dismissed() {
        let state = RequestsReducer::reduce(
            RequestsState::default(),
            RequestsIntent::Failed {
                kind: ActionKind::DeletePost,
                message: "HTTP 500: boom".to_string(),
            },
        );
        assert_eq!(
            state.last_error,
            Some(RequestFailure {
                kind: ActionKind::DeletePost,
                message: "HTTP 500: boom".to_string(),
            })
        );

        let state = RequestsReducer::reduce(state, RequestsIntent::DismissError);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn success_of_other_kind_keeps_error() {
        let state = RequestsState {
            in_flight: BTreeMap::new(),
            last_error: Some(RequestFailure {
                kind: ActionKind::GetPost,
                message: "HTTP 404: missing".to_string(),
            }),
        };
        let state =
            RequestsReducer::reduce(state, RequestsIntent::Succeeded(ActionKind::ListPosts));
        assert!(state.last_error.is_some());
    }

    #[test]
    fn settle_without_start_is_harmless() {
        let state = RequestsReducer::reduce(
            RequestsState::default(),
            RequestsIntent::Succeeded(ActionKind::CreatePost),
        );
        assert_eq!(state, RequestsState::default());
    }
}
