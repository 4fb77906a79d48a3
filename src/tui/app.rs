//! Application state for the TUI
//!
//! The App struct holds the wizard session plus everything the last frame
//! measured, which the event loop feeds back into the wizard after each draw.

use log::warn;
use ratatui::layout::{Position, Rect};

use crate::config::Settings;
use crate::models::{format_amount, Step};
use crate::wizard::{
    DialEvent, FetchOutcome, LoadState, Phase, WizardMessage, WizardOptions, WizardSession,
};

use super::widgets::dial::dial_measurement;
use super::widgets::{Notification, NotificationQueue};

/// Layout facts gathered while drawing one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameFeedback {
    /// Rendered height of every visible collapsed card
    pub card_heights: Vec<(Step, u16)>,
    /// Click targets of the collapsed cards
    pub card_areas: Vec<(Step, Rect)>,
    /// Canvas area of the dial, when the amount editor is on screen
    pub dial_area: Option<Rect>,
    /// Click targets of list options
    pub option_areas: Vec<(usize, Rect)>,
    pub cta_area: Option<Rect>,
    pub footer_area: Option<(Step, Rect)>,
}

impl FrameFeedback {
    pub fn card_at(&self, position: Position) -> Option<Step> {
        self.card_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(step, _)| *step)
    }

    pub fn option_at(&self, position: Position) -> Option<usize> {
        self.option_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The wizard and its load lifecycle
    pub session: WizardSession,

    /// Where the step contents come from, for the loading screen
    pub source: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Measurements from the last draw
    pub feedback: FrameFeedback,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, source: impl Into<String>) -> Self {
        Self {
            settings,
            session: WizardSession::new(WizardOptions::from_settings(settings)),
            source: source.into(),
            should_quit: false,
            show_help: false,
            notifications: NotificationQueue::new(),
            feedback: FrameFeedback::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Current wizard phase, if the wizard is loaded
    pub fn phase(&self) -> Option<Phase> {
        self.session.wizard().map(|w| w.phase())
    }

    /// Apply the fetch result delivered by the background thread
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) {
        if !self.session.complete_fetch(outcome) {
            return;
        }
        if let LoadState::Ready(_) = self.session.state() {
            self.notifications
                .push(Notification::info("Move the dial or use ←/→ to pick an amount"));
        }
    }

    /// Send a message to the wizard and report the outcome to the user
    pub fn dispatch(&mut self, message: WizardMessage) {
        let before = self.session.wizard().map(|w| w.sequencer().stack());
        let phase_before = self.phase();
        let is_footer = matches!(message, WizardMessage::FooterAction(_));
        let reopen = match message {
            WizardMessage::ReopenRequested(Some(step)) => Some(step),
            _ => None,
        };

        match self.session.dispatch(message) {
            Ok(Some(phase)) => {
                let after = self.session.wizard().map(|w| w.sequencer().stack());
                if is_footer {
                    self.notifications
                        .push(Notification::info("This option is not available yet"));
                } else if after.map(|s| s.len()) > before.map(|s| s.len()) {
                    self.notify_commit(phase);
                } else if let Some(step) =
                    reopen.filter(|_| after == before && phase_before == Some(phase))
                {
                    self.notify_nothing_reopened(step);
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!("Wizard rejected message: {}", err);
                self.notifications.push(Notification::error(err.to_string()));
            }
        }
    }

    /// Explain a card click that left the wizard where it was
    fn notify_nothing_reopened(&mut self, step: Step) {
        let text = match step.next() {
            Some(next) => format!("{} is already open below", next),
            None => format!("{} is the last step; press p to change it", step),
        };
        self.notifications.push(Notification::info(text));
    }

    fn notify_commit(&mut self, phase: Phase) {
        let Some(wizard) = self.session.wizard() else {
            return;
        };
        let notification = match phase {
            Phase::AllCommitted => Notification::success("All set! Your selections are complete"),
            _ => {
                let selection = wizard.selection();
                let text = match wizard.sequencer().stack().steps().last() {
                    Some(Step::Amount) => format!(
                        "Credit amount set to {}",
                        format_amount(selection.amount, &self.settings.currency_symbol)
                    ),
                    Some(&step) => format!(
                        "{} set to {}",
                        step,
                        selection.committed_text(step, &self.settings.currency_symbol)
                    ),
                    None => return,
                };
                Notification::success(text)
            }
        };
        self.notifications.push(notification);
    }

    /// Feed the last frame's measurements back into the wizard
    ///
    /// Returns true when anything changed, in which case the frame is stale
    /// and must be drawn again.
    pub fn apply_feedback(&mut self) -> bool {
        let feedback = std::mem::take(&mut self.feedback);
        let Some(wizard) = self.session.wizard_mut() else {
            self.feedback = feedback;
            return false;
        };

        let mut changed = false;
        for &(step, height) in &feedback.card_heights {
            changed |= wizard.report_card_height(step, height);
        }

        if let (Some(area), Some(dial)) = (feedback.dial_area, wizard.dial().copied()) {
            let (width, height) = dial_measurement(area);
            if dial.measured_size() != Some((width, height)) {
                let measured = DialEvent::Measured { width, height };
                if let Err(err) = wizard.dispatch(WizardMessage::Dial(measured)) {
                    warn!("Dial measurement rejected: {}", err);
                }
                changed = true;
            }
        }

        self.feedback = feedback;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepContent;

    fn ready_app(settings: &Settings) -> App<'_> {
        let mut app = App::new(settings, "test");
        let ticket = app.session.mount();
        app.complete_fetch(FetchOutcome {
            generation: ticket.generation(),
            result: Ok(vec![StepContent::default(); 3]),
        });
        app
    }

    #[test]
    fn test_fetch_result_makes_wizard_ready() {
        let settings = Settings::default();
        let app = ready_app(&settings);
        assert!(matches!(app.session.state(), LoadState::Ready(_)));
        assert_eq!(app.phase(), Some(Phase::Collapsed));
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_commit_pushes_notification() {
        let settings = Settings::default();
        let mut app = ready_app(&settings);
        app.notifications.clear();

        app.dispatch(WizardMessage::Confirm);
        assert_eq!(app.phase(), Some(Phase::Editing(Step::Plan)));
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Credit amount set to ₹150000"
        );
    }

    #[test]
    fn test_rejected_message_becomes_error_notification() {
        let settings = Settings::default();
        let mut app = ready_app(&settings);
        app.notifications.clear();

        app.dispatch(WizardMessage::ReopenRequested(Some(Step::Plan)));
        assert_eq!(app.phase(), Some(Phase::Collapsed));
        assert!(app.notifications.current().unwrap().message.contains("Invalid transition"));
    }

    #[test]
    fn test_feedback_reports_heights_once() {
        let settings = Settings::default();
        let mut app = ready_app(&settings);
        app.dispatch(WizardMessage::Confirm);

        app.feedback.card_heights = vec![(Step::Amount, 3)];
        assert!(app.apply_feedback());
        assert!(!app.apply_feedback());
    }

    #[test]
    fn test_feedback_measures_dial() {
        let settings = Settings::default();
        let mut app = ready_app(&settings);
        app.feedback.dial_area = Some(Rect::new(10, 5, 40, 10));

        assert!(app.apply_feedback());
        let dial = *app.session.wizard().unwrap().dial().unwrap();
        assert_eq!(dial.measured_size(), Some((40.0, 20.0)));
        assert!(!app.apply_feedback());
    }
}
