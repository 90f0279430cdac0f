use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::store::form::{Field, FormIntent, FormState};
use crate::store::{action, AppIntent, AppState, AsyncResult, PostsIntent};
use crate::ui::router::{Navigator, Route};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use crate::ui::views::{Component, ViewContext};

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Save,
    Cancel,
}

const FOCUS_ORDER: [FormFocus; 5] = [
    FormFocus::Field(Field::Title),
    FormFocus::Field(Field::Categories),
    FormFocus::Field(Field::Content),
    FormFocus::Save,
    FormFocus::Cancel,
];

/// `/posts/new`: the creation form.
pub struct NewPostView {
    navigator: Navigator,
    focus: FormFocus,
}

impl NewPostView {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            focus: FormFocus::Field(Field::Title),
        }
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Moves focus, touching the field being left.
    fn move_focus(&mut self, direction: i32, ctx: &mut ViewContext<'_>) {
        if let FormFocus::Field(field) = self.focus {
            ctx.dispatch_local(FormIntent::TouchField(field));
        }
        let len = FOCUS_ORDER.len();
        let current = FOCUS_ORDER
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let next = if direction.is_negative() {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
        self.focus = FOCUS_ORDER[next];
    }

    fn edit(&self, field: Field, ctx: &mut ViewContext<'_>, edit: impl FnOnce(&mut String)) {
        let Some(form) = ctx.state().form.as_ref() else {
            return;
        };
        let mut value = form.field(field).value.clone();
        edit(&mut value);
        ctx.dispatch_local(FormIntent::SetFieldValue { field, value });
    }

    /// Validates, then dispatches the create request only if the form accepted it.
    fn submit(&mut self, ctx: &mut ViewContext<'_>) {
        let already_submitting = ctx
            .state()
            .form
            .as_ref()
            .map_or(true, |form| form.submitting);
        if already_submitting {
            return;
        }

        ctx.dispatch_local(FormIntent::Submit);
        let fields = match ctx.state().form.as_ref() {
            Some(form) if form.submitting => form.trimmed(),
            _ => {
                tracing::debug!("submit rejected by validation");
                return;
            }
        };
        ctx.dispatch(action::create_post(ctx.api(), fields));
    }

    fn cancel(&self) {
        self.navigator.navigate_to(Route::Index);
    }
}

impl Component for NewPostView {
    fn on_mount(&mut self, ctx: &mut ViewContext<'_>) {
        ctx.dispatch_local(AppIntent::MountForm);
    }

    fn on_unmount(&mut self, ctx: &mut ViewContext<'_>) {
        ctx.dispatch_local(AppIntent::UnmountForm);
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &mut ViewContext<'_>) {
        if ctx.state().form.is_none() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Tab | KeyCode::Down => self.move_focus(1, ctx),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1, ctx),
            KeyCode::Char('s') if ctrl => self.submit(ctx),
            KeyCode::Enter => match self.focus {
                FormFocus::Field(_) => self.move_focus(1, ctx),
                FormFocus::Save => self.submit(ctx),
                FormFocus::Cancel => self.cancel(),
            },
            KeyCode::Char(ch) if !ctrl => {
                if let FormFocus::Field(field) = self.focus {
                    self.edit(field, ctx, |value| value.push(ch));
                }
            }
            KeyCode::Backspace => {
                if let FormFocus::Field(field) = self.focus {
                    self.edit(field, ctx, |value| {
                        value.pop();
                    });
                }
            }
            _ => {}
        }
    }

    fn on_settled(&mut self, intent: &PostsIntent, ctx: &mut ViewContext<'_>) {
        match intent {
            PostsIntent::CreatePost(AsyncResult::Resolved(post)) => {
                tracing::info!(id = %post.id, "post created");
                self.navigator.navigate_to(Route::Index);
            }
            PostsIntent::CreatePost(AsyncResult::Rejected(err)) => {
                tracing::warn!("create failed: {}", err);
                ctx.dispatch_local(FormIntent::SubmitFailed);
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &AppState) {
        let Some(form) = state.form.as_ref() else {
            return;
        };

        let [heading_area, title_area, categories_area, content_area, buttons_area, _] =
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(
                " Create a new blog post",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            heading_area,
        );

        for (field, field_area) in [
            (Field::Title, title_area),
            (Field::Categories, categories_area),
            (Field::Content, content_area),
        ] {
            self.render_field(frame, field_area, form, field);
        }

        frame.render_widget(Paragraph::new(self.buttons(form)), buttons_area);
    }

    fn key_hints(&self) -> &'static str {
        " Tab: Next │ Enter: Next/Press │ Ctrl+S: Save │ Esc: Cancel │ Ctrl+Q: Quit"
    }
}

impl NewPostView {
    fn render_field(&self, frame: &mut Frame<'_>, area: Rect, form: &FormState, field: Field) {
        let [input_area, error_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .areas(area);

        let focused = self.focus == FormFocus::Field(field);
        let error = form.visible_error(field);
        let border = if error.is_some() {
            STATUS_ERROR
        } else if focused {
            ACCENT
        } else {
            GLOBAL_BORDER
        };

        let state = form.field(field);
        let mut spans = vec![Span::styled(
            state.value.clone(),
            Style::default().fg(HEADER_TEXT),
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        } else if state.value.is_empty() {
            spans.push(Span::styled(field.label(), Style::default().fg(MUTED_TEXT)));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(input, input_area);

        if let Some(message) = error {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    format!(" {}", message),
                    Style::default().fg(STATUS_ERROR),
                )),
                error_area,
            );
        }
    }

    fn buttons(&self, form: &FormState) -> Line<'static> {
        let style_for = |focus: FormFocus| {
            if self.focus == focus {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            }
        };

        let save_label = if form.submitting { " Saving... " } else { " Save " };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(save_label, style_for(FormFocus::Save)),
            Span::raw("    "),
            Span::styled(" Cancel ", style_for(FormFocus::Cancel)),
        ])
    }
}
