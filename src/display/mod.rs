//! Display formatting for terminal output
//!
//! Plain-text formatting of step contents and committed selections for the
//! non-interactive commands.

pub mod items;
pub mod selection;

pub use items::format_items;
pub use selection::format_selection;
