//! Configuration module for credline
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CredlinePaths;
pub use settings::{DialSettings, Settings};
