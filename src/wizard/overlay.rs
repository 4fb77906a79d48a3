//! Overlay presenter
//!
//! Places the open step's editor directly beneath the committed cards and
//! turns the wizard state into render instructions. Everything here is a pure
//! function of its inputs and is recomputed on every frame.

use crate::models::{format_amount, AmountRange, ItemOption, Step};

use super::controller::{EditorState, Wizard};
use super::dial::DialState;
use super::heights::HeightRegistry;
use super::selection::PlanChoice;
use super::sequencer::Phase;

/// Vertical placement of the overlay, in rows from the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub offset: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPresenter {
    margin: u16,
    min_height: u16,
}

impl OverlayPresenter {
    pub fn new(margin: u16, min_height: u16) -> Self {
        Self {
            margin,
            min_height: min_height.max(1),
        }
    }

    /// Geometry of the overlay editing `open_step`
    ///
    /// The height never drops below the minimum sliver, even when the cards
    /// above already fill the viewport.
    pub fn compute_geometry(
        &self,
        open_step: Step,
        viewport_height: u16,
        heights: &HeightRegistry,
    ) -> OverlayGeometry {
        let offset = heights
            .heights_up_to(open_step.index())
            .saturating_add(self.margin);
        let height = viewport_height.saturating_sub(offset).max(self.min_height);
        OverlayGeometry { offset, height }
    }

    /// Build the render instructions for the current wizard state
    pub fn present(&self, wizard: &Wizard, viewport_height: u16) -> Presentation {
        let sequencer = wizard.sequencer();
        let selection = wizard.selection();
        let symbol = wizard.options().currency_symbol.as_str();

        let cards = sequencer
            .stack()
            .steps()
            .iter()
            .map(|&step| {
                let content = selection.content(step);
                CardView {
                    step,
                    label: content.closed_label_for(step).to_string(),
                    value_text: selection.committed_text(step, symbol),
                    detail: content.closed_detail().map(String::from),
                }
            })
            .collect();

        let placement = match sequencer.overlay() {
            Some(step) => {
                EditorPlacement::Overlay(self.compute_geometry(step, viewport_height, wizard.heights()))
            }
            None => EditorPlacement::Inline,
        };

        let editor = wizard.editor().map(|editor| {
            let step = editor.step();
            let content = selection.content(step);
            let view = match editor {
                EditorState::Amount(dial) => EditorView::Amount(AmountEditorView {
                    title: content.title_for(step).to_string(),
                    subtitle: content.subtitle_for(step).to_string(),
                    card_header: content.card_header().to_string(),
                    card_description: content.card_description().to_string(),
                    value_text: format_amount(dial.value, symbol),
                    min_text: format_amount(dial.range.min, symbol),
                    max_text: format_amount(dial.range.max, symbol),
                    range: dial.range,
                    dial: *dial,
                    cta: content.cta().to_string(),
                }),
                EditorState::Plan(cursor) | EditorState::Account(cursor) => {
                    let options = selection
                        .options(step)
                        .into_iter()
                        .enumerate()
                        .map(|(i, option)| {
                            let committed = match step {
                                Step::Plan => {
                                    selection.is_plan_selected(&PlanChoice::new(i, option.clone()))
                                }
                                _ => selection.account.as_deref() == Some(option.label.as_str()),
                            };
                            OptionView {
                                highlighted: i == cursor.selected(),
                                committed,
                                option,
                            }
                        })
                        .collect();
                    let list = ListEditorView {
                        title: content.title_for(step).to_string(),
                        subtitle: content.subtitle_for(step).to_string(),
                        options,
                        footer: content.footer().map(String::from),
                        cta: content.cta().to_string(),
                    };
                    if step == Step::Plan {
                        EditorView::Plan(list)
                    } else {
                        EditorView::Account(list)
                    }
                }
            };
            EditorInstruction {
                step,
                placement,
                view,
            }
        });

        Presentation {
            phase: sequencer.phase(),
            cards,
            editor,
        }
    }
}

/// A committed step's collapsed card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub step: Step,
    pub label: String,
    pub value_text: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPlacement {
    /// Shown in the body of the collapsed wizard
    Inline,
    Overlay(OverlayGeometry),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountEditorView {
    pub title: String,
    pub subtitle: String,
    pub card_header: String,
    pub card_description: String,
    /// Current value, rounded for display
    pub value_text: String,
    pub min_text: String,
    pub max_text: String,
    pub range: AmountRange,
    pub dial: DialState,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub option: ItemOption,
    /// Under the keyboard cursor
    pub highlighted: bool,
    /// Matches the committed choice
    pub committed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEditorView {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<OptionView>,
    pub footer: Option<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorView {
    Amount(AmountEditorView),
    Plan(ListEditorView),
    Account(ListEditorView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorInstruction {
    pub step: Step,
    pub placement: EditorPlacement,
    pub view: EditorView,
}

/// Everything the front end needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub phase: Phase,
    pub cards: Vec<CardView>,
    pub editor: Option<EditorInstruction>,
}
