//! credline - terminal credit-line wizard
//!
//! A three-step progressive-disclosure flow: pick a credit amount on a
//! circular dial, choose a repayment plan, then pick the bank account the
//! money goes to. Committed steps collapse into cards that can be reopened,
//! which truncates everything after them.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `env_logger` setup
//! - `models`: Steps, step contents and amount formatting
//! - `provider`: Where step contents come from (HTTP or file)
//! - `wizard`: Dial, height registry, selection, sequencer, overlay, session
//! - `display` and `cli`: Non-interactive commands
//! - `tui`: The interactive front end
//!
//! # Example
//!
//! ```rust,ignore
//! use credline::provider::StaticItemsProvider;
//! use credline::wizard::{fetch_blocking, WizardMessage, WizardOptions, WizardSession};
//!
//! let mut session = WizardSession::new(WizardOptions::default());
//! let ticket = session.mount();
//! session.complete_fetch(fetch_blocking(&provider, ticket));
//! session.dispatch(WizardMessage::Confirm)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod tui;
pub mod wizard;

pub use error::CredlineError;
