//! Status bar view
//!
//! Shows the wizard phase, the committed stack and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::{LoadState, Phase};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let (label, color) = match app.session.state() {
        LoadState::Unmounted => ("Idle".to_string(), Color::Gray),
        LoadState::Loading => ("Loading".to_string(), Color::Yellow),
        LoadState::FetchFailed(_) | LoadState::InsufficientData { .. } => {
            ("Unavailable".to_string(), Color::Red)
        }
        LoadState::Ready(wizard) => {
            let color = match wizard.phase() {
                Phase::AllCommitted => Color::Green,
                _ => Color::Cyan,
            };
            (wizard.phase().to_string(), color)
        }
    };
    spans.push(Span::styled(" ", Style::default()));
    spans.push(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    if let Some(wizard) = app.session.wizard() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Committed: {}", wizard.sequencer().stack()),
            Style::default().fg(Color::White),
        ));
    }

    let hints = match app.phase() {
        Some(Phase::Editing(_)) => " Enter:Confirm  Esc:Back  ?:Help  q:Quit ",
        Some(_) => " Enter:Confirm  ?:Help  q:Quit ",
        None => " q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray)),
        area,
    );
}
