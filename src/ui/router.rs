use std::fmt;
use std::sync::Arc;

use crate::api::PostId;

/// The screens the client can show, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Index,
    /// `/posts/new`
    NewPost,
    /// `/posts/:id`
    ShowPost(PostId),
}

impl Route {
    /// Parses a path. Anything unrecognised falls back to the index.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::Index,
            (Some("posts"), Some("new"), None) => Route::NewPost,
            (Some("posts"), Some(id), None) => Route::ShowPost(PostId::new(id)),
            _ => {
                tracing::debug!(path, "unknown route, showing index");
                Route::Index
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::NewPost => "/posts/new".to_string(),
            Route::ShowPost(id) => format!("/posts/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// `navigateTo(path)` handed to the views that need it.
#[derive(Clone)]
pub struct Navigator {
    navigate: Arc<dyn Fn(Route) + Send + Sync>,
}

impl Navigator {
    pub fn new<F>(navigate: F) -> Self
    where
        F: Fn(Route) + Send + Sync + 'static,
    {
        Self {
            navigate: Arc::new(navigate),
        }
    }

    pub fn navigate_to(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        (self.navigate)(route);
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Navigator")
    }
}
