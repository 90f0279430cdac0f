use serde::Serialize;
use std::fmt;

use crate::api::{ApiError, Post, PostId};
use crate::store::async_result::AsyncResult;
use crate::store::mvi::{Intent, Reducer, StoreState};

/// The four remote operations an action can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ActionKind {
    ListPosts,
    CreatePost,
    GetPost,
    DeletePost,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionKind::ListPosts => "load posts",
            ActionKind::CreatePost => "create post",
            ActionKind::GetPost => "load post",
            ActionKind::DeletePost => "delete post",
        };
        f.write_str(label)
    }
}

/// A request outcome tagged with the operation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsIntent {
    ListPosts(AsyncResult<Vec<Post>>),
    CreatePost(AsyncResult<Post>),
    GetPost(AsyncResult<Post>),
    /// Resolves with the id that was deleted.
    DeletePost(AsyncResult<PostId>),
}

impl Intent for PostsIntent {}

impl PostsIntent {
    /// The in-flight marker for `kind`.
    pub fn pending(kind: ActionKind) -> Self {
        match kind {
            ActionKind::ListPosts => PostsIntent::ListPosts(AsyncResult::Pending),
            ActionKind::CreatePost => PostsIntent::CreatePost(AsyncResult::Pending),
            ActionKind::GetPost => PostsIntent::GetPost(AsyncResult::Pending),
            ActionKind::DeletePost => PostsIntent::DeletePost(AsyncResult::Pending),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            PostsIntent::ListPosts(_) => ActionKind::ListPosts,
            PostsIntent::CreatePost(_) => ActionKind::CreatePost,
            PostsIntent::GetPost(_) => ActionKind::GetPost,
            PostsIntent::DeletePost(_) => ActionKind::DeletePost,
        }
    }

    pub fn is_pending(&self) -> bool {
        match self {
            PostsIntent::ListPosts(result) => result.is_pending(),
            PostsIntent::CreatePost(result) => result.is_pending(),
            PostsIntent::GetPost(result) => result.is_pending(),
            PostsIntent::DeletePost(result) => result.is_pending(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            PostsIntent::ListPosts(result) => result.is_resolved(),
            PostsIntent::CreatePost(result) => result.is_resolved(),
            PostsIntent::GetPost(result) => result.is_resolved(),
            PostsIntent::DeletePost(result) => result.is_resolved(),
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            PostsIntent::ListPosts(result) => result.error(),
            PostsIntent::CreatePost(result) => result.error(),
            PostsIntent::GetPost(result) => result.error(),
            PostsIntent::DeletePost(result) => result.error(),
        }
    }
}

/// The two post slices. Each is replaced wholesale by exactly one kind of result.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PostsState {
    /// Every post, in server order.
    pub all: Vec<Post>,
    /// The last post fetched individually.
    pub current: Option<Post>,
}

impl StoreState for PostsState {}

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::ListPosts(AsyncResult::Resolved(all)) => PostsState { all, ..state },
            PostsIntent::GetPost(AsyncResult::Resolved(post)) => PostsState {
                current: Some(post),
                ..state
            },
            // Create and delete never patch the slices: the index view re-fetches
            // the list when it mounts again.
            PostsIntent::CreatePost(AsyncResult::Resolved(_))
            | PostsIntent::DeletePost(AsyncResult::Resolved(_)) => state,
            PostsIntent::ListPosts(AsyncResult::Pending | AsyncResult::Rejected(_))
            | PostsIntent::GetPost(AsyncResult::Pending | AsyncResult::Rejected(_))
            | PostsIntent::CreatePost(AsyncResult::Pending | AsyncResult::Rejected(_))
            | PostsIntent::DeletePost(AsyncResult::Pending | AsyncResult::Rejected(_)) => state,
        }
    }
}
