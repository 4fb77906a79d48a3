//! The three fixed wizard stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed ordinal stages; later steps depend on earlier commitments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Amount,
    Plan,
    Account,
}

impl Step {
    /// All steps in wizard order
    pub const ALL: [Step; 3] = [Step::Amount, Step::Plan, Step::Account];

    /// Number of steps in the wizard
    pub const COUNT: usize = 3;

    /// Zero-based ordinal
    pub const fn index(self) -> usize {
        match self {
            Step::Amount => 0,
            Step::Plan => 1,
            Step::Account => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The step that follows this one, if any
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Short human label
    pub fn label(self) -> &'static str {
        match self {
            Step::Amount => "Amount",
            Step::Plan => "Plan",
            Step::Account => "Account",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
