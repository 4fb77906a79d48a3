//! Committed selection display formatting

use crate::wizard::{Presentation, Wizard};

/// Format the collapsed cards of a wizard as a short summary
pub fn format_selection(wizard: &Wizard) -> String {
    let Presentation { phase, cards, .. } = wizard.present(0);
    if cards.is_empty() {
        return "Nothing committed yet.".to_string();
    }

    let label_width = cards.iter().map(|c| c.label.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for card in &cards {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            card.label,
            card.value_text,
            width = label_width
        ));
        if let Some(detail) = &card.detail {
            output.push_str(&format!("{:<width$}  {}\n", "", detail, width = label_width));
        }
    }
    output.push_str(&format!("\nState: {}\n", phase));
    output
}
