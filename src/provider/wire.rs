//! Wire format of the items endpoint
//!
//! The payload nests each step's content under `open_state.body` with the
//! collapsed-card labels under `closed_state.body`. Unknown keys are ignored
//! and every field is optional.

use serde::Deserialize;

use crate::error::CredlineResult;
use crate::models::{ItemOption, StepContent};

#[derive(Debug, Deserialize, Default)]
struct ApiResponse {
    #[serde(default)]
    items: Vec<WireItem>,
}

#[derive(Debug, Deserialize, Default)]
struct WireItem {
    #[serde(default)]
    open_state: Option<OpenState>,
    #[serde(default)]
    closed_state: Option<ClosedState>,
    #[serde(default)]
    cta_text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenState {
    #[serde(default)]
    body: Option<OpenBody>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    card: Option<WireCard>,
    #[serde(default)]
    items: Vec<WireOption>,
    #[serde(default)]
    footer: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct WireCard {
    #[serde(default)]
    header: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    max_range: Option<f64>,
    #[serde(default)]
    min_range: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct WireOption {
    #[serde(default)]
    emi: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    tag: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ClosedState {
    #[serde(default)]
    body: Option<ClosedBody>,
}

#[derive(Debug, Deserialize, Default)]
struct ClosedBody {
    #[serde(default)]
    key1: Option<String>,
    #[serde(default)]
    key2: Option<String>,
}

impl From<WireOption> for ItemOption {
    fn from(wire: WireOption) -> Self {
        // Plan entries carry emi/duration, account entries title/subtitle
        let (label, secondary_label, detail) = match wire.emi {
            Some(emi) => (emi, wire.duration, wire.subtitle.or(wire.title)),
            None => (
                wire.title.unwrap_or_default(),
                wire.subtitle.or(wire.duration),
                None,
            ),
        };
        ItemOption {
            label,
            secondary_label,
            detail,
            tag: wire.tag,
        }
    }
}

impl From<WireItem> for StepContent {
    fn from(item: WireItem) -> Self {
        let body = item.open_state.and_then(|s| s.body).unwrap_or_default();
        let card = body.card.unwrap_or_default();
        let closed = item.closed_state.and_then(|s| s.body).unwrap_or_default();

        StepContent {
            title: body.title,
            subtitle: body.subtitle,
            card_header: card.header,
            card_description: card.description,
            min_range: card.min_range,
            max_range: card.max_range,
            options: body
                .items
                .into_iter()
                .map(ItemOption::from)
                .filter(|o| !o.label.is_empty())
                .collect(),
            footer: body.footer,
            cta_text: item.cta_text,
            closed_label: closed.key1,
            closed_detail: closed.key2,
        }
    }
}

/// Decode a response body into ordered step contents
pub fn decode_items(body: &str) -> CredlineResult<Vec<StepContent>> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(response.items.into_iter().map(StepContent::from).collect())
}
