//! Reusable widgets for the TUI
//!
//! The dial canvas, the terminal error screen and toast notifications.

pub mod dial;
pub mod error_dialog;
pub mod notification;

pub use dial::DialWidget;
pub use error_dialog::{error_dialog_area, ErrorDialog, ErrorInfo};
pub use notification::{notification_area, Notification, NotificationQueue, NotificationWidget};
