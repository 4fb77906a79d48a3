//! Error screen widget
//!
//! The wizard's terminal states (fetch failure, not enough data) end the
//! session; this widget explains what happened and what to try next.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::CredlineError;

/// An error with details and suggestions
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a CredlineError
    pub fn from_error(error: &CredlineError) -> Self {
        let (title, details, suggestions) = match error {
            CredlineError::Network(msg) => (
                "Could Not Load Offers".to_string(),
                msg.clone(),
                vec![
                    "Check your network connection".to_string(),
                    "Point --items-url at a reachable endpoint".to_string(),
                    "Use --items-file to load a saved payload".to_string(),
                ],
            ),
            CredlineError::Json(msg) => (
                "Unreadable Offers".to_string(),
                format!("The provider sent data that could not be read: {}", msg),
                vec!["Run 'credline items' to inspect the payload".to_string()],
            ),
            CredlineError::InsufficientData { received, required } => (
                "Not Enough Data".to_string(),
                format!(
                    "The provider returned {} step(s) but the wizard needs {}",
                    received, required
                ),
                vec![
                    "Run 'credline items' to see what the provider returns".to_string(),
                    "Try again later".to_string(),
                ],
            ),
            CredlineError::Config(msg) => (
                "Configuration Error".to_string(),
                msg.clone(),
                vec![
                    "Check config.json for syntax errors".to_string(),
                    "Run 'credline init' to write a fresh configuration".to_string(),
                ],
            ),
            CredlineError::Io(msg) => (
                "I/O Error".to_string(),
                msg.clone(),
                vec!["Check permissions on the credline directory".to_string()],
            ),
            CredlineError::Validation(msg) => (
                "Validation Error".to_string(),
                msg.clone(),
                vec!["Review the input values and try again".to_string()],
            ),
            CredlineError::InvalidTransition { action, committed } => (
                "Unexpected Wizard State".to_string(),
                format!(
                    "'{}' is not possible with {} committed step(s)",
                    action, committed
                ),
                vec!["Restart the wizard".to_string()],
            ),
            CredlineError::Tui(msg) => (
                "Interface Error".to_string(),
                msg.clone(),
                vec![
                    "Try resizing your terminal window".to_string(),
                    "Use 'credline simulate' instead".to_string(),
                ],
            ),
        };

        Self {
            title,
            details,
            suggestions,
        }
    }
}

/// Widget for rendering an error screen
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Quit hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines = vec![Line::from(Span::styled(
                "What you can do:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(
                self.error
                    .suggestions
                    .iter()
                    .map(|s| Line::from(vec![Span::raw("  - "), Span::raw(s.as_str())])),
            );

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press q to quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Area for the error screen, centered in `parent`
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width / 10 * 7).clamp(40, 80).min(parent.width);
    let height = (parent.height / 2).clamp(10, 16).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_from_insufficient_data() {
        let error = CredlineError::InsufficientData {
            received: 2,
            required: 3,
        };
        let info = ErrorInfo::from_error(&error);

        assert_eq!(info.title, "Not Enough Data");
        assert!(info.details.contains("returned 2 step(s)"));
        assert!(!info.suggestions.is_empty());
    }

    #[test]
    fn test_error_info_from_network() {
        let info = ErrorInfo::from_error(&CredlineError::Network("timed out".into()));
        assert_eq!(info.title, "Could Not Load Offers");
        assert_eq!(info.details, "timed out");
    }

    #[test]
    fn test_error_area_fits_small_terminal() {
        let parent = Rect::new(0, 0, 30, 8);
        let area = error_dialog_area(parent);
        assert!(area.width <= parent.width);
        assert!(area.height <= parent.height);
    }
}
