use crate::store::RequestsState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    base_url: &'a str,
    path: String,
}

impl<'a> Header<'a> {
    pub fn new(base_url: &'a str, path: String) -> Self {
        Self { base_url, path }
    }

    pub fn widget(&self, requests: &RequestsState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let in_flight = requests.total_in_flight();
        let (status_text, status_style) = if in_flight > 0 {
            (format!("⟳ {} pending", in_flight), Style::default().fg(ACCENT))
        } else {
            ("● idle".to_string(), Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("blogterm", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.path.clone(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
