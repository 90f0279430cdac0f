use crate::api::{ApiError, PostsApi};
use crate::store::{AppState, RequestsIntent, Store};
use crate::ui::router::{Navigator, Route};
use crate::ui::views::{
    Component, Dispatched, IndexView, MountHook, MountId, NewPostView, Settled, ShowView,
    ViewContext,
};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;

/// The view the router currently shows, with its mount identity.
struct ActiveView {
    mount: MountId,
    hook: MountHook,
    component: Box<dyn Component>,
}

fn build_view(route: &Route, navigator: &Navigator) -> Box<dyn Component> {
    match route {
        Route::Index => Box::new(IndexView::new(navigator.clone())),
        Route::NewPost => Box::new(NewPostView::new(navigator.clone())),
        Route::ShowPost(id) => Box::new(ShowView::new(id.clone(), navigator.clone())),
    }
}

/// Shell state: the store, the routed view, and actions waiting to run.
pub struct App {
    should_quit: bool,
    store: Store,
    api: Arc<dyn PostsApi>,
    navigator: Navigator,
    route: Route,
    view: ActiveView,
    next_mount: u64,
    /// Actions dispatched since the runtime last drained them.
    outbox: Vec<Dispatched>,
    base_url: String,
}

impl App {
    pub fn new(
        api: Arc<dyn PostsApi>,
        navigator: Navigator,
        route: Route,
        base_url: impl Into<String>,
    ) -> Self {
        let view = ActiveView {
            mount: MountId(0),
            hook: MountHook::default(),
            component: build_view(&route, &navigator),
        };
        Self {
            should_quit: false,
            store: Store::new(),
            api,
            navigator,
            route,
            view,
            next_mount: 1,
            outbox: Vec::new(),
            base_url: base_url.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mount_id(&self) -> MountId {
        self.view.mount
    }

    pub fn key_hints(&self) -> &'static str {
        self.view.component.key_hints()
    }

    /// Runs the mounted view's on-mount effect if it has not run yet.
    ///
    /// Called before every frame; only the first call per mount does anything.
    pub fn run_effects(&mut self) {
        if self.view.hook.should_fire() {
            tracing::debug!(route = %self.route, mount = self.view.mount.0, "mount");
            self.with_view(|view, ctx| view.on_mount(ctx));
        }
    }

    /// Actions dispatched since the last call, for the runtime to execute.
    pub fn take_dispatched(&mut self) -> Vec<Dispatched> {
        std::mem::take(&mut self.outbox)
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.with_view(|view, ctx| view.on_key(key, ctx));
    }

    /// Applies a settled action and lets the issuing view react.
    ///
    /// A result whose view has since unmounted only settles the request
    /// bookkeeping; its payload would overwrite what the current view loaded.
    pub fn on_settled(&mut self, settled: Settled) {
        tracing::debug!(
            kind = ?settled.intent.kind(),
            mount = settled.mount.0,
            resolved = settled.intent.is_resolved(),
            error = settled.intent.error().map(ApiError::error_type),
            "action settled"
        );

        if settled.mount != self.view.mount {
            tracing::debug!(mount = settled.mount.0, "issuing view unmounted, result discarded");
            self.store.dispatch(RequestsIntent::from(&settled.intent));
            return;
        }

        self.store.dispatch(settled.intent.clone());
        self.with_view(|view, ctx| view.on_settled(&settled.intent, ctx));
    }

    /// Unmounts the current view and mounts the one for `route`.
    pub fn navigate(&mut self, route: Route) {
        self.with_view(|view, ctx| view.on_unmount(ctx));

        let mount = MountId(self.next_mount);
        self.next_mount += 1;
        self.view = ActiveView {
            mount,
            hook: MountHook::default(),
            component: build_view(&route, &self.navigator),
        };
        self.route = route;
    }

    pub fn render_view(&self, frame: &mut Frame<'_>, area: Rect) {
        self.view.component.render(frame, area, self.store.state());
    }

    fn with_view(&mut self, f: impl FnOnce(&mut dyn Component, &mut ViewContext<'_>)) {
        let ActiveView {
            mount, component, ..
        } = &mut self.view;
        let mut ctx = ViewContext::new(*mount, &mut self.store, &self.api, &mut self.outbox);
        f(component.as_mut(), &mut ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::offline::OfflineApi;
    use crate::api::{Post, PostId};
    use crate::store::{ActionKind, AsyncResult, PostsIntent};

    fn make_app(route: Route) -> App {
        App::new(
            Arc::new(OfflineApi),
            Navigator::new(|_| {}),
            route,
            "http://test",
        )
    }

    #[test]
    fn mount_effect_runs_once() {
        let mut app = make_app(Route::Index);
        app.run_effects();
        app.run_effects();
        let dispatched = app.take_dispatched();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].action.kind(), ActionKind::ListPosts);
        assert!(app.state().requests.is_loading(ActionKind::ListPosts));
    }

    #[test]
    fn navigate_assigns_fresh_mount() {
        let mut app = make_app(Route::Index);
        let first = app.mount_id();
        app.navigate(Route::NewPost);
        assert_ne!(app.mount_id(), first);
        assert_eq!(app.route(), &Route::NewPost);
    }

    #[test]
    fn form_slice_follows_creation_view_lifecycle() {
        let mut app = make_app(Route::NewPost);
        assert!(app.state().form.is_none());
        app.run_effects();
        assert!(app.state().form.is_some());
        app.navigate(Route::Index);
        assert!(app.state().form.is_none());
    }

    #[test]
    fn settled_for_old_mount_only_settles_the_request() {
        let mut app = make_app(Route::ShowPost(PostId::new("1")));
        app.run_effects();
        let old_mount = app.mount_id();
        app.navigate(Route::Index);

        let post = Post {
            id: PostId::new("1"),
            title: "late".to_string(),
            categories: String::new(),
            content: String::new(),
        };
        assert!(app.state().requests.is_loading(ActionKind::GetPost));
        app.on_settled(Settled {
            mount: old_mount,
            intent: PostsIntent::GetPost(AsyncResult::Resolved(post)),
        });
        assert_eq!(app.state().posts.current, None);
        assert!(!app.state().requests.is_loading(ActionKind::GetPost));
    }
}
