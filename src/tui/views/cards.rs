//! Collapsed step cards
//!
//! One bordered card per committed step, stacked from the top of the body.
//! Each card's rendered height is recorded so the overlay can be placed
//! directly beneath the cards that precede it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::FrameFeedback;
use crate::tui::layout::card_height;
use crate::wizard::CardView;

/// Render the cards; returns the part of `body` left below them
pub fn render(
    frame: &mut Frame,
    cards: &[CardView],
    body: Rect,
    feedback: &mut FrameFeedback,
) -> Rect {
    let mut y = body.y;

    for card in cards {
        let height = card_height(card);
        let available = body.bottom().saturating_sub(y);
        let area = Rect::new(body.x, y, body.width, height.min(available));

        if area.height > 0 {
            render_card(frame, card, area);
            feedback.card_areas.push((card.step, area));
        }
        feedback.card_heights.push((card.step, height));
        y = y.saturating_add(height).min(body.bottom());
    }

    Rect::new(body.x, y, body.width, body.bottom() - y)
}

fn render_card(frame: &mut Frame, card: &CardView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", card.label),
            Style::default().fg(Color::Gray),
        ))
        .title_bottom(
            Line::from(Span::styled(" edit ", Style::default().fg(Color::Cyan))).right_aligned(),
        );

    let mut lines = vec![Line::from(Span::styled(
        card.value_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = &card.detail {
        lines.push(Line::from(Span::styled(
            detail.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
