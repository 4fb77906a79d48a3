//! Amount bounds and presentation
//!
//! The picked amount stays a continuous `f64`; rounding to whole currency
//! units only happens when it is shown to the user.

use std::fmt;

/// Inclusive numeric bounds for the amount step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    /// Build a range, swapping the ends if they arrive reversed
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Linear interpolation: `fraction` 0.0 gives `min`, 1.0 gives `max`
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + self.span() * fraction
    }

    /// Inverse of [`value_at`](Self::value_at), clamped to `[0, 1]`
    pub fn fraction_of(&self, value: f64) -> f64 {
        if self.span() <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Nearest value inside the range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Display adapter that rounds an amount to whole currency units
#[derive(Debug, Clone, Copy)]
pub struct DisplayAmount<'a> {
    value: f64,
    symbol: &'a str,
}

impl<'a> DisplayAmount<'a> {
    pub fn new(value: f64, symbol: &'a str) -> Self {
        Self { value, symbol }
    }
}

impl fmt::Display for DisplayAmount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.value.round() as i64;
        if rounded < 0 {
            write!(f, "-{}{}", self.symbol, rounded.unsigned_abs())
        } else {
            write!(f, "{}{}", self.symbol, rounded)
        }
    }
}

/// Format an amount with a currency symbol, rounded to whole units
pub fn format_amount(value: f64, symbol: &str) -> String {
    DisplayAmount::new(value, symbol).to_string()
}
