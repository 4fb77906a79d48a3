//! Toast notifications
//!
//! Short-lived messages shown in the top-right corner after a commit, a
//! rejected action or a no-op button press.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// How long a toast stays up
const DISPLAY_TIME: Duration = Duration::from_secs(3);

/// Oldest toasts are dropped beyond this
const MAX_QUEUED: usize = 4;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " i Info ",
            Self::Success => " + Done ",
            Self::Error => " x Error ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= DISPLAY_TIME
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Top-right corner of `parent`, sized for a short message
pub fn notification_area(parent: Rect) -> Rect {
    let width = 44.min(parent.width);
    let height = 4.min(parent.height);
    Rect::new(parent.right() - width, parent.y, width, height)
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        if self.notifications.len() > MAX_QUEUED {
            self.notifications.remove(0);
        }
    }

    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to display now
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
    }

    #[test]
    fn test_queue_drops_oldest_when_full() {
        let mut queue = NotificationQueue::new();
        for i in 0..6 {
            queue.push(Notification::info(format!("n{}", i)));
        }
        assert_eq!(queue.len(), MAX_QUEUED);
        assert_eq!(queue.current().unwrap().message, "n2");
    }

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::error("Oops"));
        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().kind.color(), Color::Red);
    }

    #[test]
    fn test_area_hugs_top_right() {
        let area = notification_area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(56, 0, 44, 4));
        let small = notification_area(Rect::new(0, 0, 20, 2));
        assert_eq!(small, Rect::new(0, 0, 20, 2));
    }
}
