//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::feature::{Feature, Menu};
use crate::core::feature_context::FeatureProvider;
use crate::core::state::App;

/// The two-entry "Inbox" feature used throughout the tests.
pub fn inbox_feature() -> Feature {
    Feature::new(
        "Inbox",
        vec![
            Menu::new(1, "All", "/all", "inbox"),
            Menu::new(2, "Starred", "/star", "star"),
        ],
    )
}

/// Inbox plus an "Archive" feature with no menus.
pub fn test_features() -> Vec<Feature> {
    vec![inbox_feature(), Feature::new("Archive", Vec::new())]
}

pub fn test_provider() -> FeatureProvider {
    FeatureProvider::new(test_features()).expect("test features are non-empty")
}

/// Creates a test App over `test_features()`.
pub fn test_app() -> App {
    App::new(Some(test_provider()), "http://localhost:8000/api".to_string())
}

/// Flatten a rendered buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
