//! Items CLI command
//!
//! Fetches the step contents once and prints what the wizard would show.

use log::warn;

use crate::config::Settings;
use crate::display::format_items;
use crate::error::CredlineResult;
use crate::models::Step;
use crate::provider::ItemsProvider;

/// Handle the `items` command
pub fn handle_items_command(provider: &dyn ItemsProvider, settings: &Settings) -> CredlineResult<()> {
    let items = provider.fetch_items()?;

    println!("Source: {}", provider.describe());
    println!("Received {} item(s)", items.len());
    println!();
    print!("{}", format_items(&items, &settings.currency_symbol));

    if items.len() < Step::COUNT {
        warn!(
            "Only {} of {} steps received; the wizard would refuse to start",
            items.len(),
            Step::COUNT
        );
        println!("Not enough data to run the wizard.");
    }

    Ok(())
}
