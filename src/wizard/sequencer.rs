//! Step sequencer
//!
//! The wizard state machine. A [`StepSequencer`] is an immutable value; every
//! transition returns a new one or rejects the request. The committed stack is
//! always a prefix of [`Step::ALL`] and at most one overlay is open, editing
//! the step right after the stack.
//!
//! With an empty stack and no overlay the wizard is `Collapsed` and the amount
//! editor is shown inline, so the amount step is active without an overlay.

use std::fmt;

use log::warn;

use crate::error::{CredlineError, CredlineResult};
use crate::models::Step;

/// Committed steps, always a prefix of `[Amount, Plan, Account]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStack {
    len: usize,
}

impl StepStack {
    pub const fn empty() -> Self {
        Self { len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == Step::COUNT
    }

    /// The committed steps in order
    pub fn steps(&self) -> &'static [Step] {
        &Step::ALL[..self.len]
    }

    pub fn contains(&self, step: Step) -> bool {
        step.index() < self.len
    }

    /// First uncommitted step, if any
    pub fn next(&self) -> Option<Step> {
        Step::from_index(self.len)
    }

    fn truncated(self, len: usize) -> Self {
        Self {
            len: len.min(self.len),
        }
    }

    fn pushed(self) -> Self {
        Self {
            len: (self.len + 1).min(Step::COUNT),
        }
    }
}

impl fmt::Display for StepStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, step) in self.steps().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", step)?;
        }
        write!(f, "]")
    }
}

/// The single observable phase of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing committed, no overlay; the amount editor is inline
    Collapsed,
    /// Overlay open for this step
    Editing(Step),
    /// All three steps committed, no overlay
    AllCommitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Collapsed => write!(f, "Collapsed"),
            Phase::Editing(step) => write!(f, "Editing({})", step),
            Phase::AllCommitted => write!(f, "AllCommitted"),
        }
    }
}

/// Requests the sequencer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    Commit(Step),
    /// Keep steps up to and including this one (`None` keeps nothing)
    Reopen(Option<Step>),
    CancelOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSequencer {
    stack: StepStack,
    overlay: Option<Step>,
}

impl StepSequencer {
    /// Fresh wizard: `Collapsed`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stack(&self) -> StepStack {
        self.stack
    }

    /// Step whose overlay is open, if any
    pub fn overlay(&self) -> Option<Step> {
        self.overlay
    }

    pub fn phase(&self) -> Phase {
        match self.overlay {
            Some(step) => Phase::Editing(step),
            None if self.stack.is_full() => Phase::AllCommitted,
            None => Phase::Collapsed,
        }
    }

    /// Step whose editor is currently shown, inline or in the overlay
    pub fn active_step(&self) -> Option<Step> {
        match self.overlay {
            Some(step) => Some(step),
            None if self.stack.is_empty() => Some(Step::Amount),
            None => None,
        }
    }

    /// Commit the active step and open the next one
    pub fn commit(self, step: Step) -> CredlineResult<Self> {
        if self.active_step() != Some(step) || step.index() != self.stack.len() {
            warn!(
                "Rejected commit of {} with stack {} in phase {}",
                step,
                self.stack,
                self.phase()
            );
            return Err(CredlineError::invalid_transition(
                format!("commit {}", step),
                self.stack.len(),
            ));
        }
        Ok(Self {
            stack: self.stack.pushed(),
            overlay: step.next(),
        })
    }

    /// Keep steps `0..=keep_through` and open the step after them
    pub fn reopen(self, keep_through: Option<Step>) -> CredlineResult<Self> {
        let keep = keep_through.map_or(0, |step| step.index() + 1);
        if keep > self.stack.len() {
            warn!(
                "Rejected reopen keeping {} step(s) with stack {}",
                keep, self.stack
            );
            return Err(CredlineError::invalid_transition(
                format!("reopen keeping {} step(s)", keep),
                self.stack.len(),
            ));
        }
        Ok(self.truncated(keep))
    }

    /// Back navigation: close the open overlay and reopen the step before it
    pub fn cancel_overlay(self) -> Self {
        match self.overlay {
            Some(open) => self.truncated(open.index().saturating_sub(1)),
            None => self,
        }
    }

    /// Apply an event
    pub fn reduce(self, event: SequencerEvent) -> CredlineResult<Self> {
        match event {
            SequencerEvent::Commit(step) => self.commit(step),
            SequencerEvent::Reopen(keep_through) => self.reopen(keep_through),
            SequencerEvent::CancelOverlay => Ok(self.cancel_overlay()),
        }
    }

    fn truncated(self, keep: usize) -> Self {
        let stack = self.stack.truncated(keep);
        let overlay = if stack.is_empty() { None } else { stack.next() };
        Self { stack, overlay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_committed() -> StepSequencer {
        StepSequencer::new()
            .commit(Step::Amount)
            .and_then(|s| s.commit(Step::Plan))
            .and_then(|s| s.commit(Step::Account))
            .unwrap()
    }

    #[test]
    fn test_fresh_sequencer_is_collapsed() {
        let seq = StepSequencer::new();
        assert_eq!(seq.phase(), Phase::Collapsed);
        assert!(seq.stack().is_empty());
        assert_eq!(seq.overlay(), None);
        assert_eq!(seq.active_step(), Some(Step::Amount));
    }

    #[test]
    fn test_commit_walkthrough() {
        let seq = StepSequencer::new().commit(Step::Amount).unwrap();
        assert_eq!(seq.stack().steps(), &[Step::Amount]);
        assert_eq!(seq.phase(), Phase::Editing(Step::Plan));

        let seq = seq.commit(Step::Plan).unwrap();
        assert_eq!(seq.stack().steps(), &[Step::Amount, Step::Plan]);
        assert_eq!(seq.phase(), Phase::Editing(Step::Account));

        let seq = seq.commit(Step::Account).unwrap();
        assert_eq!(seq.stack().len(), 3);
        assert_eq!(seq.phase(), Phase::AllCommitted);
        assert_eq!(seq.overlay(), None);
        assert_eq!(seq.active_step(), None);
    }

    #[test]
    fn test_commit_out_of_order_is_rejected() {
        let seq = StepSequencer::new();
        let err = seq.commit(Step::Plan).unwrap_err();
        assert!(err.is_invalid_transition());

        let seq = seq.commit(Step::Amount).unwrap();
        assert!(seq.commit(Step::Amount).is_err());
        assert!(seq.commit(Step::Account).is_err());
        assert!(all_committed().commit(Step::Account).is_err());
    }

    #[test]
    fn test_edit_amount_card_after_all_committed() {
        let seq = all_committed().reopen(Some(Step::Amount)).unwrap();
        assert_eq!(seq.stack().steps(), &[Step::Amount]);
        assert_eq!(seq.phase(), Phase::Editing(Step::Plan));
    }

    #[test]
    fn test_reopen_none_returns_to_collapsed() {
        let seq = all_committed().reopen(None).unwrap();
        assert_eq!(seq, StepSequencer::new());
    }

    #[test]
    fn test_reopen_last_committed_step_of_full_stack() {
        let seq = all_committed().reopen(Some(Step::Account)).unwrap();
        assert_eq!(seq.phase(), Phase::AllCommitted);
    }

    #[test]
    fn test_reopen_beyond_stack_is_rejected() {
        let seq = StepSequencer::new().commit(Step::Amount).unwrap();
        assert!(seq.reopen(Some(Step::Amount)).is_ok());
        assert!(seq.reopen(Some(Step::Plan)).is_err());
    }

    #[test]
    fn test_cancel_overlay_cascades_back() {
        let seq = StepSequencer::new()
            .commit(Step::Amount)
            .and_then(|s| s.commit(Step::Plan))
            .unwrap();
        assert_eq!(seq.phase(), Phase::Editing(Step::Account));

        let seq = seq.cancel_overlay();
        assert_eq!(seq.stack().steps(), &[Step::Amount]);
        assert_eq!(seq.phase(), Phase::Editing(Step::Plan));

        let seq = seq.cancel_overlay();
        assert_eq!(seq.phase(), Phase::Collapsed);
        assert!(seq.stack().is_empty());

        assert_eq!(seq.cancel_overlay(), seq);
        assert_eq!(all_committed().cancel_overlay(), all_committed());
    }

    #[test]
    fn test_stack_display() {
        assert_eq!(all_committed().stack().to_string(), "[Amount, Plan, Account]");
        assert_eq!(StepStack::empty().to_string(), "[]");
    }

    fn event() -> impl Strategy<Value = SequencerEvent> {
        prop_oneof![
            (0usize..3).prop_map(|i| SequencerEvent::Commit(Step::ALL[i])),
            (0usize..4).prop_map(|i| SequencerEvent::Reopen(
                i.checked_sub(1).and_then(Step::from_index)
            )),
            Just(SequencerEvent::CancelOverlay),
        ]
    }

    fn assert_invariants(seq: &StepSequencer) -> Result<(), TestCaseError> {
        let len = seq.stack().len();
        prop_assert!(len <= Step::COUNT);
        prop_assert_eq!(seq.stack().steps(), &Step::ALL[..len]);
        match seq.overlay() {
            Some(step) => prop_assert_eq!(step.index(), len),
            None => prop_assert!(len == 0 || len == Step::COUNT),
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_reachable_states_keep_invariants(events in prop::collection::vec(event(), 0..40)) {
            let mut seq = StepSequencer::new();
            for event in events {
                if let Ok(next) = seq.reduce(event) {
                    seq = next;
                }
                assert_invariants(&seq)?;
            }
        }

        #[test]
        fn prop_commit_rejected_unless_next(events in prop::collection::vec(event(), 0..20), step in 0usize..3) {
            let mut seq = StepSequencer::new();
            for event in events {
                seq = seq.reduce(event).unwrap_or(seq);
            }
            let step = Step::ALL[step];
            if step.index() != seq.stack().len() {
                prop_assert!(seq.commit(step).is_err());
            }
        }

        #[test]
        fn prop_reopen_yields_requested_length(events in prop::collection::vec(event(), 0..20), keep in 0usize..4) {
            let mut seq = StepSequencer::new();
            for event in events {
                seq = seq.reduce(event).unwrap_or(seq);
            }
            let keep_through = keep.checked_sub(1).and_then(Step::from_index);
            match seq.reopen(keep_through) {
                Ok(next) => {
                    prop_assert_eq!(next.stack().len(), keep);
                    match Step::from_index(keep) {
                        Some(open) if keep > 0 => prop_assert_eq!(next.phase(), Phase::Editing(open)),
                        Some(_) => prop_assert_eq!(next.phase(), Phase::Collapsed),
                        None => prop_assert_eq!(next.phase(), Phase::AllCommitted),
                    }
                }
                Err(_) => prop_assert!(keep > seq.stack().len()),
            }
        }
    }
}
