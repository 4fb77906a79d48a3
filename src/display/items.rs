//! Step content display formatting
//!
//! Formats fetched step contents for the `items` command.

use crate::models::{format_amount, Step, StepContent};

/// Format the fetched step contents, one block per wizard step
pub fn format_items(items: &[StepContent], currency_symbol: &str) -> String {
    let mut output = String::new();

    for step in Step::ALL {
        let Some(content) = items.get(step.index()) else {
            output.push_str(&format!("Step {}: {} (missing)\n\n", step.index() + 1, step));
            continue;
        };

        output.push_str(&format!("Step {}: {}\n", step.index() + 1, step));
        output.push_str(&format!("  Title:     {}\n", content.title_for(step)));
        output.push_str(&format!("  Subtitle:  {}\n", content.subtitle_for(step)));

        if step == Step::Amount {
            let bounds = content.bounds();
            output.push_str(&format!(
                "  Bounds:    {} - {}\n",
                format_amount(bounds.min, currency_symbol),
                format_amount(bounds.max, currency_symbol)
            ));
            output.push_str(&format!("  Rate:      {}\n", content.card_description()));
        } else {
            output.push_str("  Options:\n");
            for (i, option) in content.options_for(step).iter().enumerate() {
                let tag = option
                    .tag
                    .as_deref()
                    .map(|t| format!(" [{}]", t))
                    .unwrap_or_default();
                output.push_str(&format!("    {}. {}{}\n", i + 1, option.summary(), tag));
            }
            if let Some(footer) = content.footer() {
                output.push_str(&format!("  Footer:    {}\n", footer));
            }
        }

        output.push_str(&format!("  CTA:       {}\n", content.cta()));
        output.push_str(&format!("  Closed:    {}\n", content.closed_label_for(step)));
        output.push('\n');
    }

    let extra = items.len().saturating_sub(Step::COUNT);
    if extra > 0 {
        output.push_str(&format!("({} additional item(s) ignored)\n", extra));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemOption;

    #[test]
    fn test_format_items_uses_fallbacks() {
        let output = format_items(&vec![StepContent::default(); 3], "₹");
        assert!(output.contains("Step 1: Amount"));
        assert!(output.contains("₹100000 - ₹500000"));
        assert!(output.contains("How do you wish to repay?"));
        assert!(output.contains("2. ₹5,580 /mo for 9 months [recommended]"));
        assert!(output.contains("3. PNB"));
    }

    #[test]
    fn test_format_items_marks_missing_steps() {
        let items = vec![StepContent {
            options: vec![ItemOption::new("ignored")],
            ..StepContent::default()
        }];
        let output = format_items(&items, "$");
        assert!(output.contains("$100000 - $500000"));
        assert!(output.contains("Step 2: Plan (missing)"));
        assert!(output.contains("Step 3: Account (missing)"));
    }
}
