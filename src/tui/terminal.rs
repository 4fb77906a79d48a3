//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;

use crate::config::Settings;
use crate::provider::ItemsProvider;
use crate::wizard::spawn_fetch;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Redraws allowed for the layout to settle after one event
const MAX_LAYOUT_PASSES: usize = 4;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Draw, then redraw while the frame's measurements keep changing the layout
///
/// Card heights and the dial size are only known after a draw, and the
/// overlay position depends on them.
fn draw_settled(terminal: &mut Tui, app: &mut App) -> Result<()> {
    for pass in 0..MAX_LAYOUT_PASSES {
        terminal.draw(|frame| super::views::render(frame, app))?;
        if !app.apply_feedback() {
            return Ok(());
        }
        debug!("Layout changed after draw pass {}", pass + 1);
    }
    warn!("Layout did not settle after {} passes", MAX_LAYOUT_PASSES);
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, provider: Arc<dyn ItemsProvider>) -> Result<()> {
    let mut app = App::new(settings, provider.describe());
    let events = EventHandler::new(settings.tick_rate());

    let ticket = app.session.mount();
    let sender = events.sender();
    spawn_fetch(provider, ticket, move |outcome| {
        let _ = sender.send(Event::ItemsLoaded(outcome));
    })?;

    let mut terminal = init_terminal()?;
    info!("TUI started");

    let result = event_loop(&mut terminal, &mut app, &events);

    app.session.unmount();
    restore_terminal()?;
    info!("TUI stopped");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        draw_settled(terminal, app)?;

        handle_event(app, events.next()?);

        if app.should_quit {
            return Ok(());
        }
    }
}
