use serde::Serialize;

use crate::store::form::{FormIntent, FormReducer, FormState};
use crate::store::mvi::{Intent, Reducer, StoreState};
use crate::store::posts::{PostsIntent, PostsReducer, PostsState};
use crate::store::requests::{RequestsIntent, RequestsReducer, RequestsState};

/// Everything the views render from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub posts: PostsState,
    /// Present only while the creation view is mounted.
    pub form: Option<FormState>,
    pub requests: RequestsState,
}

impl StoreState for AppState {}

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// A request was issued or settled.
    Posts(PostsIntent),
    /// An edit to the mounted form.
    Form(FormIntent),
    /// Creation view mounted: start a fresh form.
    MountForm,
    /// Creation view unmounted: drop the form.
    UnmountForm,
    /// Request bookkeeping only: settled results nobody is waiting for, or
    /// dismissing the last error.
    Requests(RequestsIntent),
}

impl Intent for AppIntent {}

impl From<PostsIntent> for AppIntent {
    fn from(intent: PostsIntent) -> Self {
        AppIntent::Posts(intent)
    }
}

impl From<RequestsIntent> for AppIntent {
    fn from(intent: RequestsIntent) -> Self {
        AppIntent::Requests(intent)
    }
}

impl From<FormIntent> for AppIntent {
    fn from(intent: FormIntent) -> Self {
        AppIntent::Form(intent)
    }
}

/// Routes each intent to the slice it addresses; other slices pass through untouched.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState {
            posts,
            form,
            requests,
        } = state;

        match intent {
            AppIntent::Posts(intent) => AppState {
                requests: RequestsReducer::reduce(requests, RequestsIntent::from(&intent)),
                posts: PostsReducer::reduce(posts, intent),
                form,
            },
            AppIntent::Form(intent) => {
                if form.is_none() {
                    tracing::trace!(?intent, "form intent without a mounted form dropped");
                }
                AppState {
                    posts,
                    form: form.map(|form| FormReducer::reduce(form, intent)),
                    requests,
                }
            }
            AppIntent::MountForm => AppState {
                posts,
                form: Some(FormState::new()),
                requests,
            },
            AppIntent::UnmountForm => AppState {
                posts,
                form: None,
                requests,
            },
            AppIntent::Requests(intent) => AppState {
                posts,
                form,
                requests: RequestsReducer::reduce(requests, intent),
            },
        }
    }
}
