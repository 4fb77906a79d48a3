//! Offline items providers
//!
//! `FileItemsProvider` reads the endpoint's payload from disk;
//! `StaticItemsProvider` hands back a fixed outcome and backs the tests.

use std::path::PathBuf;

use log::info;

use super::wire::decode_items;
use super::ItemsProvider;
use crate::error::{CredlineError, CredlineResult};
use crate::models::StepContent;

/// Reads a saved items payload from a file
pub struct FileItemsProvider {
    path: PathBuf,
}

impl FileItemsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemsProvider for FileItemsProvider {
    fn fetch_items(&self) -> CredlineResult<Vec<StepContent>> {
        info!("Loading step contents from {}", self.path.display());
        let body = std::fs::read_to_string(&self.path).map_err(|e| {
            CredlineError::Network(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        decode_items(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Returns the same items (or the same failure) on every call
pub struct StaticItemsProvider {
    outcome: Result<Vec<StepContent>, String>,
}

impl StaticItemsProvider {
    pub fn new(items: Vec<StepContent>) -> Self {
        Self { outcome: Ok(items) }
    }

    /// A provider whose every fetch fails with a network error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl ItemsProvider for StaticItemsProvider {
    fn fetch_items(&self) -> CredlineResult<Vec<StepContent>> {
        self.outcome.clone().map_err(CredlineError::Network)
    }

    fn describe(&self) -> String {
        "static items".to_string()
    }
}
