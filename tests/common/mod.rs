//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use blogterm::api::{ApiError, NewPost, Post, PostId, PostsApi};
use blogterm::ui::app::App;
use blogterm::ui::render::draw;
use blogterm::ui::router::{Navigator, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn post(id: &str, title: &str, categories: &str, content: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        categories: categories.to_string(),
        content: content.to_string(),
    }
}

/// Every call the stub received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListPosts,
    CreatePost(NewPost),
    GetPost(PostId),
    DeletePost(PostId),
}

/// Scripted `PostsApi`.
///
/// Each method pops its next scripted result; an empty script answers with a
/// network error so forgotten setup shows up as a failed assertion.
#[derive(Default)]
pub struct StubApi {
    calls: Mutex<Vec<ApiCall>>,
    lists: Mutex<VecDeque<Result<Vec<Post>, ApiError>>>,
    creates: Mutex<VecDeque<Result<Post, ApiError>>>,
    gets: Mutex<VecDeque<Result<Post, ApiError>>>,
    deletes: Mutex<VecDeque<Result<(), ApiError>>>,
}

impl StubApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_list(&self, result: Result<Vec<Post>, ApiError>) {
        self.lists.lock().push_back(result);
    }

    pub fn push_create(&self, result: Result<Post, ApiError>) {
        self.creates.lock().push_back(result);
    }

    pub fn push_get(&self, result: Result<Post, ApiError>) {
        self.gets.lock().push_back(result);
    }

    pub fn push_delete(&self, result: Result<(), ApiError>) {
        self.deletes.lock().push_back(result);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().push(call);
    }
}

fn unscripted() -> ApiError {
    ApiError::Network {
        message: "no scripted response".to_string(),
    }
}

#[async_trait]
impl PostsApi for StubApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.record(ApiCall::ListPosts);
        let next = self.lists.lock().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, ApiError> {
        self.record(ApiCall::CreatePost(post));
        let next = self.creates.lock().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, ApiError> {
        self.record(ApiCall::GetPost(id.clone()));
        let next = self.gets.lock().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        self.record(ApiCall::DeletePost(id.clone()));
        let next = self.deletes.lock().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }
}

/// Routes requested through the navigator.
pub type NavLog = Arc<Mutex<Vec<Route>>>;

/// App with a stub backend and a navigator that only records.
pub fn test_app(api: Arc<StubApi>, route: Route) -> (App, NavLog) {
    let log: NavLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let navigator = Navigator::new(move |route| sink.lock().push(route));
    let app = App::new(api, navigator, route, "http://blog.test/api");
    (app, log)
}

/// Runs pending mount effects, then settles every dispatched action in order
/// and feeds the results back into the app. Returns how many were settled.
pub async fn settle_all(app: &mut App) -> usize {
    app.run_effects();
    let mut settled = 0;
    loop {
        let dispatched = app.take_dispatched();
        if dispatched.is_empty() {
            return settled;
        }
        for item in dispatched {
            let intent = item.action.settle().await;
            app.on_settled(blogterm::ui::views::Settled {
                mount: item.mount,
                intent,
            });
            settled += 1;
        }
    }
}

/// Applies the navigations the views requested, like the runtime loop does.
pub fn follow_navigation(app: &mut App, log: &NavLog) {
    let routes: Vec<Route> = log.lock().drain(..).collect();
    for route in routes {
        app.navigate(route);
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.on_key(key(KeyCode::Char(ch)));
    }
}

/// Renders the whole shell and returns the screen as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Writes `content` as `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
