//! Terminal demo for the store toolkit.

pub mod app;
pub mod events;
pub mod input;
pub mod list_binding;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::DemoConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the demo event loop until the user quits.
pub fn run(config: &DemoConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
