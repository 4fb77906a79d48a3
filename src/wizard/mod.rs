//! The progressive-disclosure wizard
//!
//! State lives in plain structs advanced by transition functions; the front
//! end only sends [`WizardMessage`]s and draws [`Presentation`]s.

pub mod controller;
pub mod dial;
pub mod heights;
pub mod overlay;
pub mod selection;
pub mod sequencer;
pub mod session;

pub use controller::{EditorState, ListCursor, Wizard, WizardMessage, WizardOptions};
pub use dial::{angle_of, DialEvent, DialState, Point};
pub use heights::HeightRegistry;
pub use overlay::{
    AmountEditorView, CardView, EditorInstruction, EditorPlacement, EditorView, ListEditorView,
    OptionView, OverlayGeometry, OverlayPresenter, Presentation,
};
pub use selection::{AmountDefault, CommittedValue, PlanChoice, PlanEquality, SelectionModel};
pub use sequencer::{Phase, SequencerEvent, StepSequencer, StepStack};
pub use session::{fetch_blocking, spawn_fetch, FetchOutcome, FetchTicket, LoadState, WizardSession};
