//! Runtime: terminal lifecycle and the event loop.
//!
//! - A dedicated blocking thread reads `crossterm` events and forwards them
//!   over a Tokio channel, keeping `poll()` and `read()` on one OS thread.
//! - The loop routes input through [`MainView`], hands returned effects to the
//!   app's router and redraws only when the app reports itself dirty.
//! - The navigation is mounted once the first size is known and unmounted
//!   before the terminal is restored, so no listener outlives the screen.
use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use techevents_types::Effect;
use techevents_util::Settings;
use tokio::{signal, sync::mpsc};
use tracing::{info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

type Term = Terminal<CrosstermBackend<Stdout>>;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn the input thread. The thread exits once the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            match event::read() {
                // Nothing in the UI reacts to hover.
                Ok(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Moved => {}
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal input");
                    break;
                }
            }
        }
    });
    receiver
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn cleanup_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Term, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Route one terminal event. Returns `None` when the user asked to quit.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Option<Vec<Effect>> {
    match input_event {
        Event::Key(key) if key.kind != KeyEventKind::Press => Some(Vec::new()),
        Event::Key(key) if is_quit(&key) => None,
        Event::Key(key) => Some(main_view.handle_key_events(app, key)),
        Event::Mouse(mouse) => Some(main_view.handle_mouse_events(app, mouse)),
        Event::Resize(width, height) => {
            app.resize(width, height);
            Some(Vec::new())
        }
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Some(Vec::new()),
    }
}

async fn event_loop(terminal: &mut Term, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();

    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.mount();
    render(terminal, app, main_view)?;
    let mut last_size = Some((size.width, size.height));

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    break;
                };
                match handle_input_event(app, main_view, event) {
                    Some(effects) => app.process_effects(effects),
                    None => break,
                }
            }
            _ = signal::ctrl_c() => break,
        }

        // Some terminals drop resize notifications; compare against the real size.
        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            app.resize(width, height);
        }

        if app.take_dirty() {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

/// Sets up the terminal, runs the event loop and always restores the terminal.
pub async fn run_app(settings: Settings) -> Result<()> {
    let loaded = theme::load(settings.theme.as_deref());
    info!(theme = loaded.definition.id, label = loaded.definition.label, "starting terminal host");

    let mut app = App::new(settings, loaded.theme);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    app.unmount();
    cleanup_terminal(&mut terminal)?;
    outcome
}
