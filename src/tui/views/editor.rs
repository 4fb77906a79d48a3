//! Step editors
//!
//! The amount dial and the plan/account lists. Rendering records the click
//! targets (dial canvas, options, footer, call to action) in the frame
//! feedback so mouse input can be routed without recomputing layout.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::FrameFeedback;
use crate::tui::widgets::DialWidget;
use crate::wizard::{AmountEditorView, EditorInstruction, EditorView, ListEditorView, OptionView};

/// Rows one list option takes
const OPTION_ROWS: u16 = 2;

/// Render the open editor into `area`
pub fn render(
    frame: &mut Frame,
    instruction: &EditorInstruction,
    area: Rect,
    feedback: &mut FrameFeedback,
) {
    if area.height == 0 {
        return;
    }

    match &instruction.view {
        EditorView::Amount(view) => render_amount(frame, view, area, feedback),
        EditorView::Plan(view) | EditorView::Account(view) => {
            render_list(frame, instruction, view, area, feedback)
        }
    }
}

fn editor_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
}

fn render_cta(frame: &mut Frame, text: &str, area: Rect, feedback: &mut FrameFeedback) {
    let button = Line::from(Span::styled(
        format!("[ {} ]", text),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), area);
    feedback.cta_area = Some(area);
}

fn render_amount(
    frame: &mut Frame,
    view: &AmountEditorView,
    area: Rect,
    feedback: &mut FrameFeedback,
) {
    let block = editor_block(&view.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(2), // Card header and description
            Constraint::Min(0),    // Dial
            Constraint::Length(1), // Range
            Constraint::Length(1), // CTA
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(view.subtitle.as_str()).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let header = vec![
        Line::from(Span::styled(
            view.card_header.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.card_description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[1]);

    if chunks[2].height > 0 {
        frame.render_widget(DialWidget::new(&view.dial, &view.value_text), chunks[2]);
        feedback.dial_area = Some(chunks[2]);
    }

    let range = Line::from(vec![
        Span::styled(
            format!("min {}", view.min_text),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(
            format!("max {}", view.max_text),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(range).alignment(Alignment::Center),
        chunks[3],
    );

    render_cta(frame, &view.cta, chunks[4], feedback);
}

fn render_list(
    frame: &mut Frame,
    instruction: &EditorInstruction,
    view: &ListEditorView,
    area: Rect,
    feedback: &mut FrameFeedback,
) {
    let block = editor_block(&view.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footer_rows = if view.footer.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Subtitle
            Constraint::Min(0),              // Options
            Constraint::Length(footer_rows), // Footer
            Constraint::Length(1),           // CTA
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(view.subtitle.as_str()).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let options = chunks[1];
    for (index, option) in view.options.iter().enumerate() {
        let y = options.y + index as u16 * OPTION_ROWS;
        if y + OPTION_ROWS > options.bottom() {
            break;
        }
        let option_area = Rect::new(options.x, y, options.width, OPTION_ROWS);
        render_option(frame, index, option, option_area);
        feedback.option_areas.push((index, option_area));
    }

    if let Some(footer) = &view.footer {
        frame.render_widget(
            Paragraph::new(Span::styled(
                footer.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            chunks[2],
        );
        feedback.footer_area = Some((instruction.step, chunks[2]));
    }

    render_cta(frame, &view.cta, chunks[3], feedback);
}

fn render_option(frame: &mut Frame, index: usize, option: &OptionView, area: Rect) {
    let marker = match (option.highlighted, option.committed) {
        (true, _) => "›",
        (false, true) => "✓",
        (false, false) => " ",
    };
    let style = if option.highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut first = vec![
        Span::styled(format!("{} {}. ", marker, index + 1), style),
        Span::styled(option.option.label.clone(), style),
    ];
    if let Some(tag) = &option.option.tag {
        first.push(Span::raw(" "));
        first.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
    }

    let mut second = vec![Span::raw("     ")];
    if let Some(secondary) = &option.option.secondary_label {
        second.push(Span::styled(
            secondary.clone(),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(detail) = &option.option.detail {
        second.push(Span::raw("  "));
        second.push(Span::styled(
            detail.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(first), Line::from(second)]),
        area,
    );
}
