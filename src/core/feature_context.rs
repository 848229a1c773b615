//! # Feature Context
//!
//! The current `(feature, menu)` selection, and the one way to read it.
//!
//! ```text
//! FeatureProvider ──get_current()──▶ FeatureContext ──▶ NavMain
//!   (owns state)      (pure read)      (borrowed)       (projection)
//! ```
//!
//! `FeatureProvider` owns the selection and is the only thing that changes
//! it. Consumers never hold a provider directly; they receive an
//! `Option<&FeatureProvider>` from the composition root and turn it into a
//! `FeatureContext` with [`get_current`]. A `None` there is a wiring bug and
//! comes back as [`FeatureError::MissingProvider`] every time.

use log::{debug, info};
use thiserror::Error;

use crate::core::feature::{Feature, Menu, MenuId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// The context was requested with no provider wired in.
    #[error("feature context requested outside of a FeatureProvider scope")]
    MissingProvider,
}

/// Read-only snapshot of the current selection.
///
/// Borrows the provider, so it always reflects the live state at the moment
/// it was taken.
#[derive(Debug, Clone, Copy)]
pub struct FeatureContext<'a> {
    pub current_feature: &'a Feature,
    pub current_menu: Option<&'a Menu>,
}

/// Owner of the feature list and the current selection.
#[derive(Debug, Clone)]
pub struct FeatureProvider {
    features: Vec<Feature>,
    current_feature: usize,
    current_menu: Option<MenuId>,
}

impl FeatureProvider {
    /// Returns `None` for an empty feature list: there would be no current
    /// feature to provide.
    pub fn new(features: Vec<Feature>) -> Option<Self> {
        if features.is_empty() {
            return None;
        }
        let current_menu = features[0].menus.first().map(|m| m.id);
        Some(Self {
            features,
            current_feature: 0,
            current_menu,
        })
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn current_feature_index(&self) -> usize {
        self.current_feature
    }

    /// Switch to the feature at `index`. The menu selection resets to the new
    /// feature's first menu. Out-of-range indices are ignored.
    pub fn select_feature(&mut self, index: usize) -> bool {
        let Some(feature) = self.features.get(index) else {
            debug!("Ignoring out-of-range feature index {}", index);
            return false;
        };
        self.current_feature = index;
        self.current_menu = feature.menus.first().map(|m| m.id);
        info!("Current feature: {}", feature.name);
        true
    }

    pub fn select_feature_by_name(&mut self, name: &str) -> bool {
        match self.features.iter().position(|f| f.name == name) {
            Some(index) => self.select_feature(index),
            None => false,
        }
    }

    pub fn next_feature(&mut self) {
        let next = (self.current_feature + 1) % self.features.len();
        self.select_feature(next);
    }

    pub fn previous_feature(&mut self) {
        let len = self.features.len();
        let previous = (self.current_feature + len - 1) % len;
        self.select_feature(previous);
    }

    /// Mark `id` as the active menu. Ids that do not belong to the current
    /// feature are rejected and leave the selection untouched.
    pub fn select_menu(&mut self, id: MenuId) -> bool {
        if self.features[self.current_feature].menu(id).is_none() {
            debug!(
                "Menu {} is not part of feature '{}'",
                id, self.features[self.current_feature].name
            );
            return false;
        }
        self.current_menu = Some(id);
        true
    }

    pub fn clear_menu(&mut self) {
        self.current_menu = None;
    }

    fn context(&self) -> FeatureContext<'_> {
        let current_feature = &self.features[self.current_feature];
        FeatureContext {
            current_feature,
            current_menu: self.current_menu.and_then(|id| current_feature.menu(id)),
        }
    }
}

/// Read the current selection from `scope`.
///
/// `None` means no provider was wired in, which is a programming error and
/// is reported as `MissingProvider` rather than defaulted.
pub fn get_current(scope: Option<&FeatureProvider>) -> Result<FeatureContext<'_>, FeatureError> {
    scope
        .map(FeatureProvider::context)
        .ok_or(FeatureError::MissingProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{inbox_feature, test_provider};

    #[test]
    fn test_missing_provider_is_an_error_every_time() {
        for _ in 0..3 {
            let err = get_current(None).unwrap_err();
            assert_eq!(err, FeatureError::MissingProvider);
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_empty_feature_list_has_no_provider() {
        assert!(FeatureProvider::new(Vec::new()).is_none());
    }

    #[test]
    fn test_initial_selection_is_first_feature_and_menu() {
        let provider = test_provider();
        let ctx = get_current(Some(&provider)).unwrap();
        assert_eq!(ctx.current_feature.name, "Inbox");
        assert_eq!(ctx.current_menu.map(|m| m.id), Some(MenuId(1)));
    }

    #[test]
    fn test_reads_live_state() {
        let mut provider = test_provider();
        assert!(provider.select_menu(MenuId(2)));
        let ctx = get_current(Some(&provider)).unwrap();
        assert_eq!(ctx.current_menu.map(|m| m.name.as_str()), Some("Starred"));

        provider.clear_menu();
        let ctx = get_current(Some(&provider)).unwrap();
        assert!(ctx.current_menu.is_none());
    }

    #[test]
    fn test_select_menu_rejects_foreign_id() {
        let mut provider = test_provider();
        assert!(!provider.select_menu(MenuId(42)));
        let ctx = get_current(Some(&provider)).unwrap();
        assert_eq!(ctx.current_menu.map(|m| m.id), Some(MenuId(1)));
    }

    #[test]
    fn test_switching_feature_resets_menu() {
        let mut provider = test_provider();
        provider.select_menu(MenuId(2));
        provider.next_feature();
        let ctx = get_current(Some(&provider)).unwrap();
        assert_eq!(ctx.current_feature.name, "Archive");
        assert!(ctx.current_menu.is_none(), "Archive has no menus");

        provider.next_feature();
        let ctx = get_current(Some(&provider)).unwrap();
        assert_eq!(ctx.current_feature.name, "Inbox");
        assert_eq!(ctx.current_menu.map(|m| m.id), Some(MenuId(1)));
    }

    #[test]
    fn test_previous_feature_wraps() {
        let mut provider = test_provider();
        provider.previous_feature();
        assert_eq!(provider.current_feature_index(), provider.features().len() - 1);
    }

    #[test]
    fn test_select_feature_by_name() {
        let mut provider = test_provider();
        assert!(provider.select_feature_by_name("Archive"));
        assert_eq!(provider.current_feature_index(), 1);
        assert!(!provider.select_feature_by_name("Nope"));
        assert_eq!(provider.current_feature_index(), 1);
        assert!(!provider.select_feature(7));
    }

    #[test]
    fn test_single_feature_cycles_onto_itself() {
        let mut provider = FeatureProvider::new(vec![inbox_feature()]).unwrap();
        provider.select_menu(MenuId(2));
        provider.next_feature();
        let ctx = get_current(Some(&provider)).unwrap();
        assert_eq!(ctx.current_feature.name, "Inbox");
        assert_eq!(ctx.current_menu.map(|m| m.id), Some(MenuId(1)));
    }
}
