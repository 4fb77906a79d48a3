//! Wizard session
//!
//! The load lifecycle around a [`Wizard`]: mount issues one fetch tagged with
//! a generation id, and the result is applied only if the session is still on
//! that generation. Unmounting bumps the generation, so a fetch that finishes
//! after teardown is dropped instead of reaching a dead wizard.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use crate::error::{CredlineError, CredlineResult};
use crate::models::{Step, StepContent};
use crate::provider::ItemsProvider;

use super::controller::{Wizard, WizardMessage, WizardOptions};
use super::sequencer::Phase;

/// Where the session is in its load lifecycle
#[derive(Debug)]
pub enum LoadState {
    Unmounted,
    /// Fetch outstanding
    Loading,
    Ready(Box<Wizard>),
    /// Terminal: the provider failed
    FetchFailed(CredlineError),
    /// Terminal: fewer step contents than steps
    InsufficientData { received: usize },
}

impl LoadState {
    /// The error behind a terminal state
    pub fn failure(&self) -> Option<CredlineError> {
        match self {
            Self::FetchFailed(err) => Some(err.clone()),
            Self::InsufficientData { received } => Some(CredlineError::InsufficientData {
                received: *received,
                required: Step::COUNT,
            }),
            _ => None,
        }
    }
}

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a fetch, delivered back onto the event loop
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: CredlineResult<Vec<StepContent>>,
}

pub struct WizardSession {
    state: LoadState,
    generation: u64,
    options: WizardOptions,
}

impl WizardSession {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            state: LoadState::Unmounted,
            generation: 0,
            options,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn wizard(&self) -> Option<&Wizard> {
        match &self.state {
            LoadState::Ready(wizard) => Some(wizard.as_ref()),
            _ => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut Wizard> {
        match &mut self.state {
            LoadState::Ready(wizard) => Some(wizard.as_mut()),
            _ => None,
        }
    }

    /// Start a fresh lifetime; the caller runs the fetch for the returned ticket
    pub fn mount(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        debug!("Wizard mounted (generation {})", self.generation);
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Tear the wizard down; any outstanding fetch becomes stale
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.state = LoadState::Unmounted;
        debug!("Wizard unmounted (generation {})", self.generation);
    }

    /// Apply a fetch result; returns false if it was stale and dropped
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation || !matches!(self.state, LoadState::Loading) {
            debug!(
                "Discarding fetch result for generation {} (current {})",
                outcome.generation, self.generation
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(items) if items.len() < Step::COUNT => {
                warn!(
                    "Provider returned {} step(s), {} required",
                    items.len(),
                    Step::COUNT
                );
                LoadState::InsufficientData {
                    received: items.len(),
                }
            }
            Ok(items) => {
                info!("Loaded {} step(s)", items.len());
                LoadState::Ready(Box::new(Wizard::new(items, self.options.clone())))
            }
            Err(err) => {
                warn!("Fetching step contents failed: {}", err);
                LoadState::FetchFailed(err)
            }
        };
        true
    }

    /// Forward a message to the wizard; ignored unless it is ready
    pub fn dispatch(&mut self, message: WizardMessage) -> CredlineResult<Option<Phase>> {
        match self.wizard_mut() {
            Some(wizard) => wizard.dispatch(message).map(Some),
            None => Ok(None),
        }
    }
}

/// Run the fetch on its own thread and hand the outcome to `deliver`
pub fn spawn_fetch<F>(
    provider: Arc<dyn ItemsProvider>,
    ticket: FetchTicket,
    deliver: F,
) -> CredlineResult<JoinHandle<()>>
where
    F: FnOnce(FetchOutcome) + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("credline-fetch".to_string())
        .spawn(move || deliver(fetch_blocking(provider.as_ref(), ticket)))?;
    Ok(handle)
}

/// Run the fetch on the current thread
pub fn fetch_blocking(provider: &dyn ItemsProvider, ticket: FetchTicket) -> FetchOutcome {
    info!(
        "Fetching step contents from {} (generation {})",
        provider.describe(),
        ticket.generation
    );
    FetchOutcome {
        generation: ticket.generation,
        result: provider.fetch_items(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticItemsProvider;
    use std::sync::mpsc;

    fn three_items() -> Vec<StepContent> {
        vec![StepContent::default(); 3]
    }

    #[test]
    fn test_mount_with_three_items_is_ready() {
        let provider = StaticItemsProvider::new(three_items());
        let mut session = WizardSession::new(WizardOptions::default());
        let ticket = session.mount();
        assert!(matches!(session.state(), LoadState::Loading));

        assert!(session.complete_fetch(fetch_blocking(&provider, ticket)));
        let wizard = session.wizard().unwrap();
        assert_eq!(wizard.phase(), Phase::Collapsed);
        assert!(wizard.sequencer().stack().is_empty());
        let dial = wizard.dial().unwrap();
        assert_eq!(dial.range.min, 100_000.0);
        assert_eq!(dial.range.max, 500_000.0);
    }

    #[test]
    fn test_two_items_is_insufficient_data() {
        let provider = StaticItemsProvider::new(vec![StepContent::default(); 2]);
        let mut session = WizardSession::new(WizardOptions::default());
        let ticket = session.mount();
        session.complete_fetch(fetch_blocking(&provider, ticket));

        assert!(matches!(
            session.state(),
            LoadState::InsufficientData { received: 2 }
        ));
        assert!(matches!(
            session.state().failure(),
            Some(CredlineError::InsufficientData { received: 2, required: 3 })
        ));
        assert!(session.wizard().is_none());
        assert_eq!(session.dispatch(WizardMessage::Confirm).unwrap(), None);
    }

    #[test]
    fn test_fetch_failure_is_terminal() {
        let provider = StaticItemsProvider::failing("connection refused");
        let mut session = WizardSession::new(WizardOptions::default());
        let ticket = session.mount();
        session.complete_fetch(fetch_blocking(&provider, ticket));

        match session.state() {
            LoadState::FetchFailed(err) => assert!(err.is_terminal_load_failure()),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let provider = StaticItemsProvider::new(three_items());
        let mut session = WizardSession::new(WizardOptions::default());
        let ticket = session.mount();
        let outcome = fetch_blocking(&provider, ticket);

        session.unmount();
        assert!(!session.complete_fetch(outcome));
        assert!(matches!(session.state(), LoadState::Unmounted));
    }

    #[test]
    fn test_result_from_previous_mount_is_discarded() {
        let provider = StaticItemsProvider::new(three_items());
        let mut session = WizardSession::new(WizardOptions::default());
        let old = session.mount();
        session.unmount();
        let current = session.mount();

        assert!(!session.complete_fetch(fetch_blocking(&provider, old)));
        assert!(matches!(session.state(), LoadState::Loading));
        assert!(session.complete_fetch(fetch_blocking(&provider, current)));
        assert!(session.wizard().is_some());
    }

    #[test]
    fn test_duplicate_delivery_is_ignored() {
        let provider = StaticItemsProvider::new(three_items());
        let mut session = WizardSession::new(WizardOptions::default());
        let ticket = session.mount();
        assert!(session.complete_fetch(fetch_blocking(&provider, ticket)));
        session.dispatch(WizardMessage::Confirm).unwrap();

        assert!(!session.complete_fetch(fetch_blocking(&provider, ticket)));
        assert_eq!(
            session.wizard().map(Wizard::phase),
            Some(Phase::Editing(Step::Plan))
        );
    }

    #[test]
    fn test_spawned_fetch_delivers_through_channel() {
        let provider: Arc<dyn ItemsProvider> = Arc::new(StaticItemsProvider::new(three_items()));
        let mut session = WizardSession::new(WizardOptions::default());
        let ticket = session.mount();

        let (sender, receiver) = mpsc::channel();
        let handle = spawn_fetch(provider, ticket, move |outcome| {
            let _ = sender.send(outcome);
        })
        .unwrap();
        handle.join().unwrap();

        let outcome = receiver.recv().unwrap();
        assert_eq!(outcome.generation, ticket.generation());
        assert!(session.complete_fetch(outcome));
        assert!(session.wizard().is_some());
    }
}
