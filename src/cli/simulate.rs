//! Simulate CLI command
//!
//! Drives a headless wizard through all three commits, the same way the TUI
//! does: the dial is turned to the requested amount, then each list cursor is
//! moved to the requested option and confirmed.

use clap::Args;

use crate::config::Settings;
use crate::display::format_selection;
use crate::error::{CredlineError, CredlineResult};
use crate::models::{format_amount, Step};
use crate::provider::ItemsProvider;
use crate::wizard::dial::SWEEP_DEGREES;
use crate::wizard::{fetch_blocking, DialEvent, Wizard, WizardMessage, WizardOptions, WizardSession};

/// Arguments for `credline simulate`
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Credit amount (defaults to the configured initial amount)
    #[arg(short, long)]
    pub amount: Option<f64>,

    /// Repayment plan, 1-based position in the plan list
    #[arg(short, long, default_value = "1")]
    pub plan: usize,

    /// Bank account, 1-based position in the account list
    #[arg(long, default_value = "1")]
    pub account: usize,
}

/// Handle the `simulate` command
pub fn handle_simulate_command(
    provider: &dyn ItemsProvider,
    settings: &Settings,
    args: SimulateArgs,
) -> CredlineResult<()> {
    let mut session = WizardSession::new(WizardOptions::from_settings(settings));
    let ticket = session.mount();
    session.complete_fetch(fetch_blocking(provider, ticket));

    if let Some(err) = session.state().failure() {
        return Err(err);
    }
    let wizard = session
        .wizard_mut()
        .ok_or_else(|| CredlineError::Network("Step contents were not loaded".into()))?;

    if let Some(amount) = args.amount {
        turn_dial_to(wizard, amount, &settings.currency_symbol)?;
    }
    wizard.dispatch(WizardMessage::Confirm)?;

    select_option(wizard, Step::Plan, args.plan)?;
    select_option(wizard, Step::Account, args.account)?;

    print!("{}", format_selection(wizard));
    Ok(())
}

fn turn_dial_to(wizard: &mut Wizard, amount: f64, currency_symbol: &str) -> CredlineResult<()> {
    let dial = wizard
        .dial()
        .copied()
        .ok_or_else(|| {
            CredlineError::invalid_transition("turn dial", wizard.sequencer().stack().len())
        })?;

    if !dial.range.contains(amount) {
        return Err(CredlineError::Validation(format!(
            "Amount {} is outside {} - {}",
            amount,
            format_amount(dial.range.min, currency_symbol),
            format_amount(dial.range.max, currency_symbol)
        )));
    }

    let target = dial.range.fraction_of(amount) * SWEEP_DEGREES;
    wizard.dispatch(WizardMessage::Dial(DialEvent::Nudge(target - dial.angle)))?;
    Ok(())
}

fn select_option(wizard: &mut Wizard, step: Step, position: usize) -> CredlineResult<()> {
    let count = wizard.selection().options(step).len();
    if position == 0 || position > count {
        return Err(CredlineError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            step, count, position
        )));
    }
    wizard.dispatch(WizardMessage::SelectOption(position - 1))?;
    wizard.dispatch(WizardMessage::Confirm)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepContent;
    use crate::provider::StaticItemsProvider;

    fn args(amount: Option<f64>, plan: usize, account: usize) -> SimulateArgs {
        SimulateArgs {
            amount,
            plan,
            account,
        }
    }

    #[test]
    fn test_simulate_full_run() {
        let provider = StaticItemsProvider::new(vec![StepContent::default(); 3]);
        let result = handle_simulate_command(&provider, &Settings::default(), args(Some(200_000.0), 2, 3));
        assert!(result.is_ok());
    }

    #[test]
    fn test_simulate_rejects_out_of_range_amount() {
        let provider = StaticItemsProvider::new(vec![StepContent::default(); 3]);
        let err = handle_simulate_command(&provider, &Settings::default(), args(Some(1.0), 1, 1))
            .unwrap_err();
        assert!(matches!(err, CredlineError::Validation(_)));
    }

    #[test]
    fn test_simulate_rejects_bad_plan_position() {
        let provider = StaticItemsProvider::new(vec![StepContent::default(); 3]);
        let err = handle_simulate_command(&provider, &Settings::default(), args(None, 9, 1))
            .unwrap_err();
        assert!(matches!(err, CredlineError::Validation(_)));
    }

    #[test]
    fn test_simulate_reports_insufficient_data() {
        let provider = StaticItemsProvider::new(vec![StepContent::default(); 2]);
        let err = handle_simulate_command(&provider, &Settings::default(), args(None, 1, 1))
            .unwrap_err();
        assert!(matches!(err, CredlineError::InsufficientData { received: 2, .. }));
    }

    #[test]
    fn test_turn_dial_lands_on_amount() {
        let mut wizard = Wizard::new(vec![StepContent::default(); 3], WizardOptions::default());
        turn_dial_to(&mut wizard, 320_000.0, "₹").unwrap();
        let value = wizard.dial().unwrap().value;
        assert!((value - 320_000.0).abs() < 1e-6);
    }
}
