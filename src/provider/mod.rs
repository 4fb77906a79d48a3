//! Items providers
//!
//! The wizard consumes its step contents through [`ItemsProvider`], injected
//! at construction. There is no process-wide client.

pub mod file;
pub mod http;
pub mod wire;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::CredlineResult;
use crate::models::StepContent;

pub use file::{FileItemsProvider, StaticItemsProvider};
pub use http::HttpItemsProvider;
pub use wire::decode_items;

/// Source of the ordered step contents
pub trait ItemsProvider: Send + Sync {
    /// Fetch all step contents in wizard order; one attempt, no retry
    fn fetch_items(&self) -> CredlineResult<Vec<StepContent>>;

    /// Human-readable description of the source, for logs
    fn describe(&self) -> String;
}

/// Where the step contents come from, as chosen on the command line
#[derive(Debug, Clone)]
pub enum ItemsSource {
    Url(String),
    File(PathBuf),
}

impl ItemsSource {
    /// Resolve CLI overrides against the configured URL
    pub fn resolve(url: Option<String>, file: Option<PathBuf>, settings: &Settings) -> Self {
        match (file, url) {
            (Some(path), _) => Self::File(path),
            (None, Some(url)) => Self::Url(url),
            (None, None) => Self::Url(settings.items_url.clone()),
        }
    }

    /// Build the provider for this source
    pub fn into_provider(self) -> CredlineResult<Arc<dyn ItemsProvider>> {
        Ok(match self {
            Self::Url(url) => Arc::new(HttpItemsProvider::new(url)?),
            Self::File(path) => Arc::new(FileItemsProvider::new(path)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_overrides_url() {
        let settings = Settings::default();
        let source = ItemsSource::resolve(
            Some("http://localhost/items".into()),
            Some(PathBuf::from("items.json")),
            &settings,
        );
        assert!(matches!(source, ItemsSource::File(_)));
    }

    #[test]
    fn test_settings_url_is_default() {
        let settings = Settings::default();
        match ItemsSource::resolve(None, None, &settings) {
            ItemsSource::Url(url) => assert_eq!(url, settings.items_url),
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn test_url_source_builds_without_timeout_setting() {
        let source = ItemsSource::Url("http://localhost/items".into());
        let provider = source.into_provider().unwrap();
        assert_eq!(provider.describe(), "http://localhost/items");
    }
}
