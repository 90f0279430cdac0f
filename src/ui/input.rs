use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Global keys first, everything else goes to the routed view.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::offline::OfflineApi;
    use crate::ui::router::{Navigator, Route};
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            Arc::new(OfflineApi),
            Navigator::new(|_| {}),
            Route::Index,
            "http://localhost",
        )
    }

    #[test]
    fn ctrl_q_and_ctrl_c_quit() {
        for ch in ['q', 'c'] {
            let mut app = app();
            handle_key(&mut app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
            assert!(app.should_quit());
        }
    }

    #[test]
    fn plain_q_does_not_quit() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        app.run_effects();
        app.take_dispatched();
        let mut key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.take_dispatched().is_empty());

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(app.take_dispatched().len(), 1);
    }
}
