//! TUI Views module
//!
//! The wizard screen (collapsed cards plus the open editor), the loading
//! and error screens, the header and the status bar.

pub mod cards;
pub mod editor;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::wizard::{EditorPlacement, LoadState, Phase};

use super::app::{App, FrameFeedback};
use super::dialogs;
use super::layout::{centered_rect_fixed, overlay_rect, AppLayout};
use super::widgets::{
    error_dialog_area, notification_area, ErrorDialog, ErrorInfo, NotificationWidget,
};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());
    let mut feedback = FrameFeedback::default();

    render_header(frame, layout.header);

    match app.session.state() {
        LoadState::Unmounted | LoadState::Loading => {
            render_loading(frame, layout.body, &app.source);
        }
        LoadState::Ready(_) => render_wizard(frame, app, layout.body, &mut feedback),
        state => {
            if let Some(err) = state.failure() {
                let info = ErrorInfo::from_error(&err);
                frame.render_widget(ErrorDialog::new(&info), error_dialog_area(layout.body));
            }
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(layout.body),
        );
    }

    if app.show_help {
        dialogs::help::render(frame);
    }

    app.feedback = feedback;
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " credline ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Personal credit line", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_loading(frame: &mut Frame, area: Rect, source: &str) {
    let area = centered_rect_fixed(area.width, 3, area);
    let text = vec![
        Line::from(Span::styled(
            "Loading offers...",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            source.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Cards stacked at the top of the body, then the editor inline or as an overlay
fn render_wizard(frame: &mut Frame, app: &App, body: Rect, feedback: &mut FrameFeedback) {
    let Some(wizard) = app.session.wizard() else {
        return;
    };
    let presentation = wizard.present(body.height);

    let below_cards = cards::render(frame, &presentation.cards, body, feedback);

    match &presentation.editor {
        Some(instruction) => {
            let area = match instruction.placement {
                EditorPlacement::Inline => below_cards,
                EditorPlacement::Overlay(geometry) => {
                    let area = overlay_rect(body, geometry);
                    frame.render_widget(Clear, area);
                    area
                }
            };
            editor::render(frame, instruction, area, feedback);
        }
        None if presentation.phase == Phase::AllCommitted => {
            render_all_set(frame, below_cards);
        }
        None => {}
    }
}

fn render_all_set(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "All set!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Press a or p to revise a step, r to start over",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        centered_rect_fixed(area.width, 2, area),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{ItemOption, Step, StepContent};
    use crate::wizard::{FetchOutcome, WizardMessage};
    use ratatui::{backend::TestBackend, Terminal};

    fn items() -> Vec<StepContent> {
        let plan = StepContent {
            options: vec![
                ItemOption::new("₹4,247 /mo").with_secondary("for 12 months"),
                ItemOption::new("₹5,580 /mo").with_secondary("for 9 months"),
            ],
            ..StepContent::default()
        };
        let account = StepContent {
            options: vec![ItemOption::new("HDFC Bank")],
            ..StepContent::default()
        };
        vec![StepContent::default(), plan, account]
    }

    fn ready_app(settings: &Settings) -> App<'_> {
        let mut app = App::new(settings, "test");
        let ticket = app.session.mount();
        app.complete_fetch(FetchOutcome {
            generation: ticket.generation(),
            result: Ok(items()),
        });
        app.notifications.clear();
        app
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> usize {
        let mut passes = 0;
        loop {
            terminal.draw(|frame| render(frame, app)).unwrap();
            passes += 1;
            if !app.apply_feedback() || passes > 4 {
                return passes;
            }
        }
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen() {
        let settings = Settings::default();
        let mut app = App::new(&settings, "items.json");
        app.session.mount();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        draw(&mut terminal, &mut app);

        assert!(screen(&terminal).contains("Loading offers..."));
        assert_eq!(app.feedback, FrameFeedback::default());
    }

    #[test]
    fn test_inline_amount_editor_measures_dial() {
        let settings = Settings::default();
        let mut app = ready_app(&settings);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let passes = draw(&mut terminal, &mut app);
        assert_eq!(passes, 2);
        assert!(app.feedback.dial_area.is_some());
        assert!(app.feedback.cta_area.is_some());
        assert!(app.session.wizard().unwrap().dial().unwrap().measured_size().is_some());
    }

    #[test]
    fn test_overlay_sits_below_cards() {
        let settings = Settings::default();
        let mut app = ready_app(&settings);
        app.dispatch(WizardMessage::Confirm);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut app);

        let wizard = app.session.wizard().unwrap();
        assert_eq!(wizard.heights().get(Step::Amount), Some(3));

        let (_, card) = app.feedback.card_areas[0];
        let (_, first_option) = app.feedback.option_areas[0];
        assert!(first_option.y > card.bottom());
        assert_eq!(app.feedback.option_areas.len(), 2);
    }

    #[test]
    fn test_error_screen_for_insufficient_data() {
        let settings = Settings::default();
        let mut app = App::new(&settings, "test");
        let ticket = app.session.mount();
        app.complete_fetch(FetchOutcome {
            generation: ticket.generation(),
            result: Ok(vec![StepContent::default(); 2]),
        });
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut terminal, &mut app);

        assert!(screen(&terminal).contains("Not Enough Data"));
    }
}
