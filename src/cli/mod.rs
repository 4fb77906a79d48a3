//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the provider and wizard layers.

pub mod items;
pub mod simulate;

pub use items::handle_items_command;
pub use simulate::{handle_simulate_command, SimulateArgs};
