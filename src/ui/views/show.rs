use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::{Post, PostId};
use crate::store::{action, AppState, AsyncResult, PostsIntent, RequestsIntent};
use crate::ui::router::{Navigator, Route};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::views::{Component, ViewContext};

/// `/posts/:id`: one post, with delete.
pub struct ShowView {
    id: PostId,
    navigator: Navigator,
    deleting: bool,
}

impl ShowView {
    pub fn new(id: PostId, navigator: Navigator) -> Self {
        Self {
            id,
            navigator,
            deleting: false,
        }
    }

    /// `current` only counts once it is the post this view was opened for.
    fn loaded<'s>(&self, state: &'s AppState) -> Option<&'s Post> {
        state
            .posts
            .current
            .as_ref()
            .filter(|post| post.id == self.id)
    }
}

impl Component for ShowView {
    fn on_mount(&mut self, ctx: &mut ViewContext<'_>) {
        ctx.dispatch(action::get_post(ctx.api(), self.id.clone()));
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &mut ViewContext<'_>) {
        match key.code {
            KeyCode::Char('d') => {
                if self.deleting {
                    return;
                }
                self.deleting = true;
                ctx.dispatch(action::delete_post(ctx.api(), self.id.clone()));
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.navigator.navigate_to(Route::Index);
            }
            KeyCode::Char('x') => ctx.dispatch_local(RequestsIntent::DismissError),
            _ => {}
        }
    }

    fn on_settled(&mut self, intent: &PostsIntent, _ctx: &mut ViewContext<'_>) {
        match intent {
            PostsIntent::DeletePost(AsyncResult::Resolved(_)) => {
                self.deleting = false;
                self.navigator.navigate_to(Route::Index);
            }
            PostsIntent::DeletePost(AsyncResult::Rejected(err)) => {
                tracing::warn!(id = %self.id, "delete failed: {}", err);
                self.deleting = false;
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &AppState) {
        let Some(post) = self.loaded(state) else {
            let placeholder = Paragraph::new(Line::styled(
                " Loading post...",
                Style::default().fg(MUTED_TEXT),
            ));
            frame.render_widget(placeholder, area);
            return;
        };

        let [nav_area, heading_area, content_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .areas(area);

        let delete_label = if self.deleting {
            "[d] Deleting..."
        } else {
            "[d] Delete post"
        };
        let nav = Line::from(vec![
            Span::styled(" [b] Back to posts", Style::default().fg(ACCENT)),
            Span::raw("   "),
            Span::styled(delete_label, Style::default().fg(STATUS_ERROR)),
        ]);
        frame.render_widget(Paragraph::new(nav), nav_area);

        let heading = vec![
            Line::from(Span::styled(
                format!(" {}", post.title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" Categories: {}", post.categories),
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(Paragraph::new(heading), heading_area);

        let content = Paragraph::new(post.content.as_str())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            );
        frame.render_widget(content, content_area);
    }

    fn key_hints(&self) -> &'static str {
        " b/Esc: Back │ d: Delete │ x: Dismiss │ Ctrl+Q: Quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: PostId::new(id),
            title: "T".to_string(),
            categories: "c".to_string(),
            content: "body".to_string(),
        }
    }

    #[test]
    fn stale_current_is_not_loaded() {
        let view = ShowView::new(PostId::new("2"), Navigator::new(|_| {}));
        let mut state = AppState::default();
        assert!(view.loaded(&state).is_none());

        state.posts.current = Some(post("1"));
        assert!(view.loaded(&state).is_none());

        state.posts.current = Some(post("2"));
        assert_eq!(view.loaded(&state).map(|p| p.id.as_str()), Some("2"));
    }
}
