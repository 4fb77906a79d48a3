//! Wizard controller
//!
//! Owns every piece of mutable wizard state and is the sole handler of
//! [`WizardMessage`]s sent by the editors and cards. Messages are processed
//! one at a time on the caller's thread.

use log::{debug, info};

use crate::config::{DialSettings, Settings};
use crate::error::CredlineResult;
use crate::models::{Step, StepContent};

use super::dial::{DialEvent, DialState};
use super::heights::HeightRegistry;
use super::overlay::{OverlayPresenter, Presentation};
use super::selection::{AmountDefault, CommittedValue, PlanChoice, PlanEquality, SelectionModel};
use super::sequencer::{Phase, StepSequencer};

/// Settings the wizard reads, detached from the settings file
#[derive(Debug, Clone, PartialEq)]
pub struct WizardOptions {
    pub amount_default: AmountDefault,
    pub amount_preset: f64,
    pub plan_equality: PlanEquality,
    pub currency_symbol: String,
    pub overlay_margin: u16,
    pub min_overlay_height: u16,
    pub dial: DialSettings,
}

impl WizardOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            amount_default: settings.amount_default,
            amount_preset: settings.amount_preset,
            plan_equality: settings.plan_equality,
            currency_symbol: settings.currency_symbol.clone(),
            overlay_margin: settings.overlay_margin,
            min_overlay_height: settings.min_overlay_height,
            dial: settings.dial,
        }
    }
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Keyboard cursor over a list editor's options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
    len: usize,
}

impl ListCursor {
    pub fn new(len: usize, selected: usize) -> Self {
        Self {
            selected: selected.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn up(self) -> Self {
        Self {
            selected: self.selected.saturating_sub(1),
            ..self
        }
    }

    pub fn down(self) -> Self {
        Self {
            selected: (self.selected + 1).min(self.len.saturating_sub(1)),
            ..self
        }
    }

    /// Move to `index`; out-of-range indices leave the cursor alone
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self {
                selected: index,
                ..self
            }
        } else {
            self
        }
    }
}

/// State of the mounted editor; exists only while its step is active
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorState {
    Amount(DialState),
    Plan(ListCursor),
    Account(ListCursor),
}

impl EditorState {
    pub fn step(&self) -> Step {
        match self {
            Self::Amount(_) => Step::Amount,
            Self::Plan(_) => Step::Plan,
            Self::Account(_) => Step::Account,
        }
    }
}

/// Typed messages from editors and cards
#[derive(Debug, Clone, PartialEq)]
pub enum WizardMessage {
    /// An editor reports its committed value
    Committed(CommittedValue),
    /// The edit affordance of a collapsed card; keeps steps up to this one
    ReopenRequested(Option<Step>),
    /// System back navigation
    Back,
    Dial(DialEvent),
    CursorUp,
    CursorDown,
    SelectOption(usize),
    /// Call-to-action of the active editor: commit what it currently shows
    Confirm,
    /// Secondary footer button of a list editor
    FooterAction(Step),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    sequencer: StepSequencer,
    selection: SelectionModel,
    heights: HeightRegistry,
    editor: Option<EditorState>,
    presenter: OverlayPresenter,
    options: WizardOptions,
}

impl Wizard {
    /// Fresh wizard over the fetched step contents
    pub fn new(items: Vec<StepContent>, options: WizardOptions) -> Self {
        let selection = SelectionModel::new(
            items,
            options.amount_default,
            options.amount_preset,
            options.plan_equality,
        );
        let mut wizard = Self {
            sequencer: StepSequencer::new(),
            selection,
            heights: HeightRegistry::new(),
            editor: None,
            presenter: OverlayPresenter::new(options.overlay_margin, options.min_overlay_height),
            options,
        };
        wizard.sync_editor();
        wizard
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn heights(&self) -> &HeightRegistry {
        &self.heights
    }

    pub fn editor(&self) -> Option<&EditorState> {
        self.editor.as_ref()
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// The mounted dial, if the amount editor is active
    pub fn dial(&self) -> Option<&DialState> {
        match &self.editor {
            Some(EditorState::Amount(dial)) => Some(dial),
            _ => None,
        }
    }

    /// Record a card's rendered height; returns whether a relayout is needed
    pub fn report_card_height(&mut self, step: Step, height: u16) -> bool {
        let changed = self.heights.report(step, height);
        if changed {
            debug!("Card {} measured at {} row(s)", step, height);
        }
        changed
    }

    pub fn present(&self, viewport_height: u16) -> Presentation {
        self.presenter.present(self, viewport_height)
    }

    /// Process one message
    pub fn dispatch(&mut self, message: WizardMessage) -> CredlineResult<Phase> {
        match message {
            WizardMessage::Committed(value) => self.commit(value)?,
            WizardMessage::ReopenRequested(keep_through) => {
                self.sequencer = self.sequencer.reopen(keep_through)?;
                info!(
                    "Reopened: stack {} phase {}",
                    self.sequencer.stack(),
                    self.sequencer.phase()
                );
                self.sync_editor();
            }
            WizardMessage::Back => {
                let next = self.sequencer.cancel_overlay();
                if next != self.sequencer {
                    info!("Back: stack {} phase {}", next.stack(), next.phase());
                }
                self.sequencer = next;
                self.sync_editor();
            }
            WizardMessage::Dial(event) => {
                if let Some(EditorState::Amount(dial)) = &mut self.editor {
                    *dial = dial.reduce(event);
                }
            }
            WizardMessage::CursorUp => self.move_cursor(ListCursor::up),
            WizardMessage::CursorDown => self.move_cursor(ListCursor::down),
            WizardMessage::SelectOption(index) => self.move_cursor(|c| c.select(index)),
            WizardMessage::Confirm => {
                if let Some(value) = self.current_value() {
                    self.commit(value)?;
                }
            }
            WizardMessage::FooterAction(step) => {
                info!("Footer action on {} has no handler yet", step);
            }
        }
        Ok(self.sequencer.phase())
    }

    fn commit(&mut self, value: CommittedValue) -> CredlineResult<()> {
        let step = value.step();
        let next = self.sequencer.commit(step)?;
        self.selection.write(value);
        self.sequencer = next;
        info!(
            "Committed {} ({}): stack {} phase {}",
            step,
            self.selection
                .committed_text(step, &self.options.currency_symbol),
            next.stack(),
            next.phase()
        );
        self.sync_editor();
        Ok(())
    }

    /// What the active editor would commit right now
    fn current_value(&self) -> Option<CommittedValue> {
        match self.editor? {
            EditorState::Amount(dial) => Some(CommittedValue::Amount(dial.value)),
            EditorState::Plan(cursor) => {
                let index = cursor.selected();
                self.selection
                    .options(Step::Plan)
                    .into_iter()
                    .nth(index)
                    .map(|option| CommittedValue::Plan(PlanChoice::new(index, option)))
            }
            EditorState::Account(cursor) => self
                .selection
                .options(Step::Account)
                .into_iter()
                .nth(cursor.selected())
                .map(|option| CommittedValue::Account(option.label)),
        }
    }

    fn move_cursor(&mut self, f: impl FnOnce(ListCursor) -> ListCursor) {
        match &mut self.editor {
            Some(EditorState::Plan(cursor)) | Some(EditorState::Account(cursor)) => {
                *cursor = f(*cursor);
            }
            _ => {}
        }
    }

    /// Mount the active step's editor, unmounting any other
    fn sync_editor(&mut self) {
        let active = self.sequencer.active_step();
        if self.editor.as_ref().map(EditorState::step) == active {
            return;
        }
        self.editor = active.map(|step| self.mount_editor(step));
    }

    fn mount_editor(&self, step: Step) -> EditorState {
        match step {
            Step::Amount => EditorState::Amount(DialState::new(
                self.selection.bounds(),
                self.selection.amount,
                &self.options.dial,
            )),
            Step::Plan | Step::Account => {
                let cursor = ListCursor::new(
                    self.selection.options(step).len(),
                    self.selection.selected_index(step).unwrap_or(0),
                );
                if step == Step::Plan {
                    EditorState::Plan(cursor)
                } else {
                    EditorState::Account(cursor)
                }
            }
        }
    }
}
