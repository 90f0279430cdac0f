use crate::api::PostsApi;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::router::{Navigator, Route};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::views::{Dispatched, Settled};
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the terminal UI until the user quits.
///
/// Request futures run on `handle`; everything else happens on this thread.
pub fn run(
    api: Arc<dyn PostsApi>,
    config: &Config,
    route: Route,
    handle: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let nav_tx = events.sender();
    let navigator = Navigator::new(move |route| {
        let _ = nav_tx.send(AppEvent::Navigate(route));
    });
    let mut app = App::new(api, navigator, route, config.api.base_url.clone());
    tracing::info!(route = %app.route(), base_url = app.base_url(), "ui started");

    loop {
        app.run_effects();
        spawn_dispatched(&handle, app.take_dispatched(), &events.sender());

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Settled(settled)) => app.on_settled(settled),
            Ok(AppEvent::Navigate(route)) => {
                tracing::info!(from = %app.route(), to = %route, "navigate");
                app.navigate(route);
            }
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(
        in_flight = app.state().requests.total_in_flight(),
        "ui stopped"
    );
    drop(guard);
    Ok(())
}

/// Each action becomes its own task; results come back as `AppEvent::Settled`.
fn spawn_dispatched(handle: &Handle, dispatched: Vec<Dispatched>, tx: &Sender<AppEvent>) {
    for Dispatched { mount, action } in dispatched {
        let tx = tx.clone();
        handle.spawn(async move {
            let intent = action.settle().await;
            let _ = tx.send(AppEvent::Settled(Settled { mount, intent }));
        });
    }
}
