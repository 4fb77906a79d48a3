//! Terminal User Interface module
//!
//! Runs the wizard full screen: collapsed cards for committed steps, the
//! open step's editor beneath them, a dial driven by mouse drags or the
//! arrow keys, and toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
