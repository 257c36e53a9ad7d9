use crate::config::Config;
use crate::ui::app::App;
use crate::ui::calculator::{CalcReducer, CalcState};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::keypad::{intents_for_keys, UnknownKey};
use crate::ui::mvi::Reducer;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Interactive event loop.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = Duration::from_millis(50);
    let mut app = App::new(config.ui.clone());
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("Calculator started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Calculator stopped");
    drop(guard);
    Ok(())
}

/// Feed a key string through the calculator without a terminal and
/// return the final display text.
pub fn run_headless(keys: &str) -> Result<String, UnknownKey> {
    let intents = intents_for_keys(keys)?;
    let state = intents
        .into_iter()
        .fold(CalcState::default(), |state, intent| {
            let next = CalcReducer::reduce(state, intent);
            tracing::debug!(?intent, display = %next.display_text(), "headless transition");
            next
        });
    Ok(state.display_text())
}
