//! Event handler for the TUI
//!
//! Translates keyboard and mouse input into wizard messages. Everything
//! that changes wizard state goes through [`App::dispatch`].

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::models::Step;
use crate::wizard::{DialEvent, Phase, WizardMessage};

use super::app::App;
use super::event::Event;
use super::widgets::dial::dial_point;

/// Degrees turned per arrow press
const NUDGE_STEP: f64 = 3.6;
/// Degrees turned per page key
const NUDGE_PAGE: f64 = 36.0;
/// Turns the dial all the way to either end
const NUDGE_FULL: f64 = 360.0;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => app.notifications.remove_expired(),
        Event::Resize(_, _) => {}
        Event::ItemsLoaded(outcome) => app.complete_fetch(outcome),
    }
}

/// Which kind of editor is accepting input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorKind {
    Amount,
    List(Step),
}

fn active_editor(app: &App) -> Option<EditorKind> {
    let step = app.session.wizard()?.editor()?.step();
    Some(match step {
        Step::Amount => EditorKind::Amount,
        other => EditorKind::List(other),
    })
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.show_help {
        app.toggle_help();
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Esc => {
            if matches!(app.phase(), Some(Phase::Editing(_))) {
                app.dispatch(WizardMessage::Back);
            } else {
                app.quit();
            }
            return;
        }
        _ => {}
    }

    if app.session.wizard().is_none() {
        return;
    }

    if key.code == KeyCode::Enter {
        app.dispatch(WizardMessage::Confirm);
        return;
    }

    let handled = match active_editor(app) {
        Some(EditorKind::Amount) => handle_amount_key(app, key),
        Some(EditorKind::List(step)) => handle_list_key(app, key, step),
        None => false,
    };
    if !handled {
        handle_card_key(app, key);
    }
}

/// Keys for the amount dial; returns false if the key was not for the dial
fn handle_amount_key(app: &mut App, key: KeyEvent) -> bool {
    let delta = match key.code {
        KeyCode::Left | KeyCode::Char('h') => -NUDGE_STEP,
        KeyCode::Right | KeyCode::Char('l') => NUDGE_STEP,
        KeyCode::PageDown => -NUDGE_PAGE,
        KeyCode::PageUp => NUDGE_PAGE,
        KeyCode::Home => -NUDGE_FULL,
        KeyCode::End => NUDGE_FULL,
        _ => return false,
    };
    app.dispatch(WizardMessage::Dial(DialEvent::Nudge(delta)));
    true
}

/// Keys for the plan and account lists
fn handle_list_key(app: &mut App, key: KeyEvent, step: Step) -> bool {
    let message = match key.code {
        KeyCode::Up | KeyCode::Char('k') => WizardMessage::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => WizardMessage::CursorDown,
        KeyCode::Char('f') => WizardMessage::FooterAction(step),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            WizardMessage::SelectOption(index)
        }
        _ => return false,
    };
    app.dispatch(message);
    true
}

/// Edit affordances on the committed cards
fn handle_card_key(app: &mut App, key: KeyEvent) {
    let keep_through = match key.code {
        KeyCode::Char('a') => Some(Step::Amount),
        KeyCode::Char('p') => Some(Step::Plan),
        KeyCode::Char('r') => None,
        _ => return,
    };

    let committed = app
        .session
        .wizard()
        .map(|w| w.sequencer().stack())
        .unwrap_or_default();
    if keep_through.map_or(true, |step| committed.contains(step)) {
        app.dispatch(WizardMessage::ReopenRequested(keep_through));
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.show_help || app.session.wizard().is_none() {
        return;
    }
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let feedback = &app.feedback;
            let message = if let Some(area) = feedback.dial_area.filter(|a| a.contains(position)) {
                WizardMessage::Dial(DialEvent::PointerDown(dial_point(
                    area,
                    mouse.column,
                    mouse.row,
                )))
            } else if let Some(index) = feedback.option_at(position) {
                WizardMessage::SelectOption(index)
            } else if feedback.cta_area.is_some_and(|a| a.contains(position)) {
                WizardMessage::Confirm
            } else if let Some((step, _)) =
                feedback.footer_area.filter(|(_, a)| a.contains(position))
            {
                WizardMessage::FooterAction(step)
            } else if let Some(step) = feedback.card_at(position) {
                WizardMessage::ReopenRequested(Some(step))
            } else {
                return;
            };
            app.dispatch(message);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(area) = app.feedback.dial_area {
                let point = dial_point(area, mouse.column, mouse.row);
                app.dispatch(WizardMessage::Dial(DialEvent::PointerMove(point)));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.feedback.dial_area.is_some() {
                app.dispatch(WizardMessage::Dial(DialEvent::PointerUp));
            }
        }
        _ => {}
    }
}
