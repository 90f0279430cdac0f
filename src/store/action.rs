//! Action creators.
//!
//! Each creator wraps exactly one `PostsApi` call and returns immediately; the
//! request runs only once the returned `Action` is settled.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::{NewPost, PostId, PostsApi};
use crate::store::posts::{ActionKind, PostsIntent};

type ActionFuture = Pin<Box<dyn Future<Output = PostsIntent> + Send + 'static>>;

/// A tagged, not yet settled request.
pub struct Action {
    kind: ActionKind,
    result: ActionFuture,
}

impl Action {
    fn new<F>(kind: ActionKind, result: F) -> Self
    where
        F: Future<Output = PostsIntent> + Send + 'static,
    {
        Self {
            kind,
            result: Box::pin(result),
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The in-flight marker to apply to the store when the action is issued.
    pub fn pending(&self) -> PostsIntent {
        PostsIntent::pending(self.kind)
    }

    /// Runs the request to completion, yielding `Resolved` or `Rejected`.
    pub async fn settle(self) -> PostsIntent {
        self.result.await
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("kind", &self.kind).finish()
    }
}

pub fn list_posts(api: Arc<dyn PostsApi>) -> Action {
    Action::new(ActionKind::ListPosts, async move {
        PostsIntent::ListPosts(api.list_posts().await.into())
    })
}

pub fn create_post(api: Arc<dyn PostsApi>, fields: NewPost) -> Action {
    Action::new(ActionKind::CreatePost, async move {
        PostsIntent::CreatePost(api.create_post(fields).await.into())
    })
}

pub fn get_post(api: Arc<dyn PostsApi>, id: PostId) -> Action {
    Action::new(ActionKind::GetPost, async move {
        PostsIntent::GetPost(api.get_post(&id).await.into())
    })
}

pub fn delete_post(api: Arc<dyn PostsApi>, id: PostId) -> Action {
    Action::new(ActionKind::DeletePost, async move {
        let result = api.delete_post(&id).await.map(|()| id);
        PostsIntent::DeletePost(result.into())
    })
}
