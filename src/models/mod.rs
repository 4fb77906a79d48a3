//! Core data models for credline
//!
//! Wizard steps, the step content consumed from the items provider and
//! amount bounds/presentation.

pub mod amount;
pub mod content;
pub mod step;

pub use amount::{format_amount, AmountRange, DisplayAmount};
pub use content::{ItemOption, StepContent};
pub use step::Step;
