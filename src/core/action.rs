//! # Actions
//!
//! Everything that can happen to the selection becomes an `Action`.
//! User presses Tab? That's `Action::NextFeature`.
//! User presses Enter on a menu? That's `Action::ActivateMenu(id)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` for the
//! adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::info;

use crate::core::feature::MenuId;
use crate::core::feature_context::FeatureError;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NextFeature,
    PreviousFeature,
    SelectFeature(usize),
    ActivateMenu(MenuId),
    ClearMenu,
    Quit,
}

/// Work the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the given absolute target.
    Navigate(String),
    Quit,
}

/// Apply `action` to `app`.
///
/// Quitting needs no selection state. Every other action needs a provider,
/// and a missing one is returned as `MissingProvider`.
pub fn update(app: &mut App, action: Action) -> Result<Effect, FeatureError> {
    if action == Action::Quit {
        return Ok(Effect::Quit);
    }

    let provider = app
        .features
        .as_mut()
        .ok_or(FeatureError::MissingProvider)?;

    match action {
        Action::NextFeature => provider.next_feature(),
        Action::PreviousFeature => provider.previous_feature(),
        Action::SelectFeature(index) => {
            if !provider.select_feature(index) {
                return Ok(Effect::None);
            }
        }
        Action::ActivateMenu(id) => {
            if !provider.select_menu(id) {
                return Ok(Effect::None);
            }
            let feature = &provider.features()[provider.current_feature_index()];
            let Some(menu) = feature.menu(id) else {
                return Ok(Effect::None);
            };
            let (name, url) = (menu.name.clone(), menu.url.clone());
            let target = app.target_for(&url);
            info!("Navigating to {} ({})", target, name);
            app.status_message = format!("Opened {}", name);
            app.last_navigation = Some(target.clone());
            return Ok(Effect::Navigate(target));
        }
        Action::ClearMenu => {
            provider.clear_menu();
            app.status_message = String::from("No active menu");
            return Ok(Effect::None);
        }
        Action::Quit => return Ok(Effect::Quit),
    }

    // Only feature switches fall through to here.
    let name = &provider.features()[provider.current_feature_index()].name;
    app.status_message = format!("Switched to {}", name);
    Ok(Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature_context::get_current;
    use crate::test_support::test_app;

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit).unwrap(), Effect::Quit);
    }

    #[test]
    fn test_activate_menu_navigates() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ActivateMenu(MenuId(2))).unwrap();
        assert_eq!(
            effect,
            Effect::Navigate("http://localhost:8000/api/star".to_string())
        );
        assert_eq!(app.status_message, "Opened Starred");
        assert_eq!(
            app.last_navigation.as_deref(),
            Some("http://localhost:8000/api/star")
        );
        let ctx = get_current(app.features.as_ref()).unwrap();
        assert_eq!(ctx.current_menu.map(|m| m.id), Some(MenuId(2)));
    }

    #[test]
    fn test_activate_unknown_menu_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ActivateMenu(MenuId(99))).unwrap(), Effect::None);
        assert!(app.last_navigation.is_none());
    }

    #[test]
    fn test_feature_switch_updates_status() {
        let mut app = test_app();
        update(&mut app, Action::NextFeature).unwrap();
        assert_eq!(app.status_message, "Switched to Archive");
        update(&mut app, Action::PreviousFeature).unwrap();
        assert_eq!(app.status_message, "Switched to Inbox");
        update(&mut app, Action::SelectFeature(1)).unwrap();
        assert_eq!(app.status_message, "Switched to Archive");
    }

    #[test]
    fn test_select_out_of_range_feature_keeps_status() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectFeature(5)).unwrap(), Effect::None);
        assert_eq!(app.status_message, "Welcome to GroundCrew!");
    }

    #[test]
    fn test_clear_menu() {
        let mut app = test_app();
        update(&mut app, Action::ClearMenu).unwrap();
        let ctx = get_current(app.features.as_ref()).unwrap();
        assert!(ctx.current_menu.is_none());
    }

    #[test]
    fn test_actions_without_provider_fail_loudly() {
        let mut app = App::new(None, "http://localhost".to_string());
        for action in [
            Action::NextFeature,
            Action::PreviousFeature,
            Action::SelectFeature(0),
            Action::ActivateMenu(MenuId(1)),
            Action::ClearMenu,
        ] {
            assert_eq!(update(&mut app, action), Err(FeatureError::MissingProvider));
        }
        assert_eq!(app.status_message, "Welcome to GroundCrew!");
        assert!(app.last_navigation.is_none());
    }

    #[test]
    fn test_quit_without_provider() {
        let mut app = App::new(None, "http://localhost".to_string());
        assert_eq!(update(&mut app, Action::Quit), Ok(Effect::Quit));
    }
}
