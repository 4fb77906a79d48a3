//! Step content supplied by the items provider
//!
//! Every field is optional on the wire. Accessors resolve missing values to
//! static fallbacks so that absent content never becomes an error.

use super::amount::AmountRange;
use super::step::Step;

/// Lower amount bound used when the provider sends none
pub const FALLBACK_MIN_AMOUNT: f64 = 100_000.0;

/// Upper amount bound used when the provider sends none
pub const FALLBACK_MAX_AMOUNT: f64 = 500_000.0;

const FALLBACK_CTA: &str = "Proceed";

/// One selectable entry of a plan or account list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemOption {
    /// Primary text, e.g. "₹4,247 /mo" or a bank name
    pub label: String,
    /// Secondary text, e.g. "for 12 months"
    pub secondary_label: Option<String>,
    /// Small print below the secondary text
    pub detail: Option<String>,
    /// Badge such as "recommended"
    pub tag: Option<String>,
}

impl ItemOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary_label = Some(secondary.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Label and secondary label joined for one-line displays
    pub fn summary(&self) -> String {
        match &self.secondary_label {
            Some(secondary) if !secondary.is_empty() => format!("{} {}", self.label, secondary),
            _ => self.label.clone(),
        }
    }
}

/// Content for a single wizard step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Heading shown inside the amount card
    pub card_header: Option<String>,
    /// Caption under the amount, e.g. the monthly rate
    pub card_description: Option<String>,
    pub min_range: Option<f64>,
    pub max_range: Option<f64>,
    pub options: Vec<ItemOption>,
    /// Secondary action label, e.g. "Create your own plan"
    pub footer: Option<String>,
    pub cta_text: Option<String>,
    /// Heading of the collapsed card once the step is committed
    pub closed_label: Option<String>,
    /// Optional second line of the collapsed card
    pub closed_detail: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl StepContent {
    pub fn title_for(&self, step: Step) -> &str {
        non_empty(&self.title).unwrap_or(match step {
            Step::Amount => "Credit Amount",
            Step::Plan => "How do you wish to repay?",
            Step::Account => "Where should we send the money?",
        })
    }

    pub fn subtitle_for(&self, step: Step) -> &str {
        non_empty(&self.subtitle).unwrap_or(match step {
            Step::Amount => "Move the dial to choose your credit limit",
            Step::Plan => "Choose one of the recommended plans",
            Step::Account => "Select your bank account",
        })
    }

    pub fn card_header(&self) -> &str {
        non_empty(&self.card_header).unwrap_or("Credit Amount")
    }

    pub fn card_description(&self) -> &str {
        non_empty(&self.card_description).unwrap_or("1.04% monthly")
    }

    pub fn cta(&self) -> &str {
        non_empty(&self.cta_text).unwrap_or(FALLBACK_CTA)
    }

    pub fn footer(&self) -> Option<&str> {
        non_empty(&self.footer)
    }

    /// Numeric bounds, each end falling back independently
    pub fn bounds(&self) -> AmountRange {
        let min = self
            .min_range
            .filter(|v| v.is_finite())
            .unwrap_or(FALLBACK_MIN_AMOUNT);
        let max = self
            .max_range
            .filter(|v| v.is_finite())
            .unwrap_or(FALLBACK_MAX_AMOUNT);
        AmountRange::new(min, max)
    }

    /// Options for a list step; an empty list falls back to the static set
    pub fn options_for(&self, step: Step) -> Vec<ItemOption> {
        if !self.options.is_empty() {
            return self.options.clone();
        }
        match step {
            Step::Amount => Vec::new(),
            Step::Plan => vec![
                ItemOption::new("₹4,247 /mo").with_secondary("for 12 months"),
                ItemOption::new("₹5,580 /mo")
                    .with_secondary("for 9 months")
                    .with_tag("recommended"),
                ItemOption::new("₹8,270 /mo").with_secondary("for 6 months"),
            ],
            Step::Account => vec![
                ItemOption::new("HDFC BANK"),
                ItemOption::new("SBI"),
                ItemOption::new("PNB"),
            ],
        }
    }

    pub fn closed_label_for(&self, step: Step) -> &str {
        non_empty(&self.closed_label).unwrap_or(match step {
            Step::Amount => "Credit Amount",
            Step::Plan => "EMI",
            Step::Account => "Bank",
        })
    }

    pub fn closed_detail(&self) -> Option<&str> {
        non_empty(&self.closed_detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_uses_fallbacks() {
        let content = StepContent::default();
        assert_eq!(content.title_for(Step::Plan), "How do you wish to repay?");
        assert_eq!(content.subtitle_for(Step::Account), "Select your bank account");
        assert_eq!(content.cta(), "Proceed");
        assert_eq!(content.closed_label_for(Step::Plan), "EMI");
        let bounds = content.bounds();
        assert_eq!(bounds.min, 100_000.0);
        assert_eq!(bounds.max, 500_000.0);
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let content = StepContent {
            title: Some("   ".into()),
            cta_text: Some(String::new()),
            ..StepContent::default()
        };
        assert_eq!(content.title_for(Step::Amount), "Credit Amount");
        assert_eq!(content.cta(), "Proceed");
    }

    #[test]
    fn test_bounds_fall_back_per_end() {
        let content = StepContent {
            min_range: Some(50_000.0),
            ..StepContent::default()
        };
        let bounds = content.bounds();
        assert_eq!(bounds.min, 50_000.0);
        assert_eq!(bounds.max, 500_000.0);
    }

    #[test]
    fn test_provider_options_win_over_fallback() {
        let content = StepContent {
            options: vec![ItemOption::new("Axis")],
            ..StepContent::default()
        };
        assert_eq!(content.options_for(Step::Account).len(), 1);
        assert_eq!(StepContent::default().options_for(Step::Account).len(), 3);
        assert!(StepContent::default().options_for(Step::Amount).is_empty());
    }

    #[test]
    fn test_option_summary() {
        let option = ItemOption::new("₹4,247 /mo").with_secondary("for 12 months");
        assert_eq!(option.summary(), "₹4,247 /mo for 12 months");
        assert_eq!(ItemOption::new("SBI").summary(), "SBI");
    }
}
