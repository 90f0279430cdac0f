use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Shell: fixed header and footer around the routed view.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    let header_widget = Header::new(app.base_url(), app.route().path());
    frame.render_widget(header_widget.widget(&state.requests), header);

    frame.render_widget(Clear, body);
    app.render_view(frame, body);

    let footer_widget = Footer::new(app.key_hints(), state.requests.last_error.as_ref());
    frame.render_widget(footer_widget.widget(footer), footer);
}
