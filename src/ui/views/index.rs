use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::PostId;
use crate::store::{action, ActionKind, AppState, RequestsIntent};
use crate::ui::router::{Navigator, Route};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::views::{Component, ViewContext};

/// One list entry: what the index shows for a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub id: PostId,
    pub title: String,
    pub categories: String,
}

/// Rows for `posts.all`, in server order.
pub fn post_rows(state: &AppState) -> Vec<PostRow> {
    state
        .posts
        .all
        .iter()
        .map(|post| PostRow {
            id: post.id.clone(),
            title: post.title.clone(),
            categories: post.categories.clone(),
        })
        .collect()
}

/// `/`: every post, newest list on each mount.
pub struct IndexView {
    navigator: Navigator,
    selected: usize,
}

impl IndexView {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            selected: 0,
        }
    }

    fn selected_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    fn move_selection(&mut self, len: usize, direction: i32) {
        let Some(current) = self.selected_index(len) else {
            self.selected = 0;
            return;
        };
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }
}

impl Component for IndexView {
    fn on_mount(&mut self, ctx: &mut ViewContext<'_>) {
        ctx.dispatch(action::list_posts(ctx.api()));
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &mut ViewContext<'_>) {
        let len = ctx.state().posts.all.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(len, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(len, 1),
            KeyCode::Enter => {
                if let Some(index) = self.selected_index(len) {
                    let id = ctx.state().posts.all[index].id.clone();
                    self.navigator.navigate_to(Route::ShowPost(id));
                }
            }
            KeyCode::Char('n') => self.navigator.navigate_to(Route::NewPost),
            KeyCode::Char('r') => ctx.dispatch(action::list_posts(ctx.api())),
            KeyCode::Char('x') => ctx.dispatch_local(RequestsIntent::DismissError),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &AppState) {
        let [title_area, list_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .areas(area);

        let title = Line::from(vec![
            Span::styled(
                " Blog posts",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   [n] New post", Style::default().fg(ACCENT)),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        let rows = post_rows(state);
        if rows.is_empty() {
            let message = if state.requests.is_loading(ActionKind::ListPosts) {
                "Loading posts..."
            } else {
                "No posts yet. Press n to write one."
            };
            let placeholder =
                Paragraph::new(Line::styled(message, Style::default().fg(MUTED_TEXT))).block(block);
            frame.render_widget(placeholder, list_area);
            return;
        }

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        row.title.clone(),
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(row.categories.clone(), Style::default().fg(MUTED_TEXT)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(self.selected_index(rows.len()));
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }

    fn key_hints(&self) -> &'static str {
        " ↑/↓: Select │ Enter: Open │ n: New │ r: Refresh │ x: Dismiss │ Ctrl+Q: Quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut view = IndexView::new(Navigator::new(|_| {}));
        view.move_selection(3, -1);
        assert_eq!(view.selected_index(3), Some(2));
        view.move_selection(3, 1);
        assert_eq!(view.selected_index(3), Some(0));
    }

    #[test]
    fn selection_clamps_to_shrunk_list() {
        let mut view = IndexView::new(Navigator::new(|_| {}));
        view.selected = 5;
        assert_eq!(view.selected_index(2), Some(1));
        assert_eq!(view.selected_index(0), None);
    }
}
