//! Selection model
//!
//! The three committed choices plus the step contents they were picked
//! from. Created fresh for every mount of the wizard and never persisted.

use serde::{Deserialize, Serialize};

use crate::models::{format_amount, AmountRange, ItemOption, Step, StepContent};

/// What the amount holds before the user touches the dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmountDefault {
    /// Lower bound of the provider's range
    RangeMin,
    Zero,
    /// A fixed configured amount
    #[default]
    Preset,
}

/// How a candidate plan is compared with the committed one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanEquality {
    /// Same option contents
    #[default]
    Value,
    /// Same position in the option list
    Identity,
}

/// A repayment plan chosen from the plan step's option list
#[derive(Debug, Clone, PartialEq)]
pub struct PlanChoice {
    pub index: usize,
    pub option: ItemOption,
}

impl PlanChoice {
    pub fn new(index: usize, option: ItemOption) -> Self {
        Self { index, option }
    }

    pub fn matches(&self, other: &PlanChoice, equality: PlanEquality) -> bool {
        match equality {
            PlanEquality::Value => self.option == other.option,
            PlanEquality::Identity => self.index == other.index,
        }
    }
}

/// A value reported by a step's editor when the user commits it
#[derive(Debug, Clone, PartialEq)]
pub enum CommittedValue {
    Amount(f64),
    Plan(PlanChoice),
    Account(String),
}

impl CommittedValue {
    /// The step this value belongs to
    pub fn step(&self) -> Step {
        match self {
            Self::Amount(_) => Step::Amount,
            Self::Plan(_) => Step::Plan,
            Self::Account(_) => Step::Account,
        }
    }
}

static EMPTY_CONTENT: StepContent = StepContent {
    title: None,
    subtitle: None,
    card_header: None,
    card_description: None,
    min_range: None,
    max_range: None,
    options: Vec::new(),
    footer: None,
    cta_text: None,
    closed_label: None,
    closed_detail: None,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionModel {
    pub amount: f64,
    pub plan: Option<PlanChoice>,
    pub account: Option<String>,
    items: Vec<StepContent>,
    plan_equality: PlanEquality,
}

impl SelectionModel {
    /// Build the model from provider items; only the first three are kept
    pub fn new(
        items: Vec<StepContent>,
        amount_default: AmountDefault,
        amount_preset: f64,
        plan_equality: PlanEquality,
    ) -> Self {
        let items: Vec<StepContent> = items.into_iter().take(Step::COUNT).collect();
        let bounds = items
            .get(Step::Amount.index())
            .map(StepContent::bounds)
            .unwrap_or_else(|| EMPTY_CONTENT.bounds());
        let amount = bounds.clamp(match amount_default {
            AmountDefault::RangeMin => bounds.min,
            AmountDefault::Zero => 0.0,
            AmountDefault::Preset => amount_preset,
        });

        Self {
            amount,
            plan: None,
            account: None,
            items,
            plan_equality,
        }
    }

    /// Content for a step, or the empty fallback content
    pub fn content(&self, step: Step) -> &StepContent {
        self.items.get(step.index()).unwrap_or(&EMPTY_CONTENT)
    }

    pub fn items(&self) -> &[StepContent] {
        &self.items
    }

    pub fn bounds(&self) -> AmountRange {
        self.content(Step::Amount).bounds()
    }

    pub fn options(&self, step: Step) -> Vec<ItemOption> {
        self.content(step).options_for(step)
    }

    pub fn plan_equality(&self) -> PlanEquality {
        self.plan_equality
    }

    /// Store a committed value
    pub fn write(&mut self, value: CommittedValue) {
        match value {
            CommittedValue::Amount(amount) => self.amount = amount,
            CommittedValue::Plan(plan) => self.plan = Some(plan),
            CommittedValue::Account(account) => self.account = Some(account),
        }
    }

    /// Whether `candidate` is the committed plan under the configured equality
    pub fn is_plan_selected(&self, candidate: &PlanChoice) -> bool {
        self.plan
            .as_ref()
            .is_some_and(|plan| plan.matches(candidate, self.plan_equality))
    }

    /// Position of the committed choice within a list step's options
    pub fn selected_index(&self, step: Step) -> Option<usize> {
        let options = self.options(step);
        match step {
            Step::Amount => None,
            Step::Plan => options
                .into_iter()
                .enumerate()
                .position(|(i, option)| self.is_plan_selected(&PlanChoice::new(i, option))),
            Step::Account => {
                let account = self.account.as_deref()?;
                options.iter().position(|o| o.label == account)
            }
        }
    }

    /// One-line text of a committed choice, for the collapsed card
    pub fn committed_text(&self, step: Step, currency_symbol: &str) -> String {
        match step {
            Step::Amount => format_amount(self.amount, currency_symbol),
            Step::Plan => self
                .plan
                .as_ref()
                .map(|p| p.option.summary())
                .unwrap_or_default(),
            Step::Account => self.account.clone().unwrap_or_default(),
        }
    }
}
