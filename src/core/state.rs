//! # Application State
//!
//! Core business state for GroundCrew. Domain logic only, no TUI types.
//! Presentation state (sidebar focus, overlays) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── features: Option<FeatureProvider>  // selection state (None = not wired)
//! ├── base_url: String                   // prefix for navigation targets
//! ├── status_message: String             // status bar text
//! └── last_navigation: Option<String>    // most recent activated target
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::feature_context::FeatureProvider;

pub struct App {
    pub features: Option<FeatureProvider>,
    pub base_url: String,
    pub status_message: String,
    pub last_navigation: Option<String>,
}

impl App {
    pub fn new(features: Option<FeatureProvider>, base_url: String) -> Self {
        Self {
            features,
            base_url,
            status_message: String::from("Welcome to GroundCrew!"),
            last_navigation: None,
        }
    }

    /// Build the app from resolved config, selecting the configured feature.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut features = FeatureProvider::new(config.features.clone());
        if let (Some(provider), Some(name)) = (features.as_mut(), config.initial_feature.as_deref()) {
            provider.select_feature_by_name(name);
        }
        Self::new(features, config.base_url.clone())
    }

    /// Absolute navigation target for a menu url.
    pub fn target_for(&self, url: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), url)
    }
}
