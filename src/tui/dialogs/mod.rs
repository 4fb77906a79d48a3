//! Modal dialogs drawn over the wizard

pub mod help;
