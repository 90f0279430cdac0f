//! Routed views and the component model they share.
//!
//! A view is mounted when the router selects it and unmounted when the route
//! changes. Its `on_mount` effect runs exactly once per mount, however many
//! times the view is rendered.

mod index;
mod new_post;
mod show;

pub use index::{post_rows, IndexView, PostRow};
pub use new_post::{FormFocus, NewPostView};
pub use show::ShowView;

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::api::PostsApi;
use crate::store::{Action, AppIntent, AppState, PostsIntent, Store};

/// Identifies one mount of one view. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub u64);

/// An action issued by a view, waiting to be run.
#[derive(Debug)]
pub struct Dispatched {
    pub mount: MountId,
    pub action: Action,
}

/// A settled action, routed back to the mount that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub mount: MountId,
    pub intent: PostsIntent,
}

/// Once-per-mount effect guard.
#[derive(Debug, Default)]
pub struct MountHook {
    fired: bool,
}

impl MountHook {
    /// True on the first call only.
    pub fn should_fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// What a view may touch while handling an event.
pub struct ViewContext<'a> {
    mount: MountId,
    store: &'a mut Store,
    api: &'a Arc<dyn PostsApi>,
    outbox: &'a mut Vec<Dispatched>,
}

impl<'a> ViewContext<'a> {
    pub fn new(
        mount: MountId,
        store: &'a mut Store,
        api: &'a Arc<dyn PostsApi>,
        outbox: &'a mut Vec<Dispatched>,
    ) -> Self {
        Self {
            mount,
            store,
            api,
            outbox,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn api(&self) -> Arc<dyn PostsApi> {
        Arc::clone(self.api)
    }

    /// Marks the action in flight and queues it for the runtime.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(kind = ?action.kind(), mount = self.mount.0, "dispatch action");
        self.store.dispatch(action.pending());
        self.outbox.push(Dispatched {
            mount: self.mount,
            action,
        });
    }

    /// Applies a synchronous intent.
    pub fn dispatch_local(&mut self, intent: impl Into<AppIntent>) {
        self.store.dispatch(intent);
    }
}

/// A routed screen.
pub trait Component: Send {
    /// Fired once per mount, before the first frame that shows the view.
    fn on_mount(&mut self, ctx: &mut ViewContext<'_>);

    /// Fired when the router replaces this view.
    fn on_unmount(&mut self, _ctx: &mut ViewContext<'_>) {}

    fn on_key(&mut self, key: KeyEvent, ctx: &mut ViewContext<'_>);

    /// An action this mount dispatched has settled. The store already holds the result.
    fn on_settled(&mut self, _intent: &PostsIntent, _ctx: &mut ViewContext<'_>) {}

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &AppState);

    /// Footer help text.
    fn key_hints(&self) -> &'static str;
}
