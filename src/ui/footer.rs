use crate::store::RequestFailure;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    hints: &'static str,
    error: Option<&'a RequestFailure>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'static str, error: Option<&'a RequestFailure>) -> Self {
        Self { hints, error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let version = format!("v{} ", VERSION);

        let (left, left_style) = match self.error {
            Some(failure) => (
                format!(" Could not {}: {}", failure.kind, failure.message),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (self.hints.to_string(), text_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
