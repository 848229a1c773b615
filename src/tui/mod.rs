//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Feature context wiring
//!
//! This module is the composition root for the feature context. Before every
//! draw, and before every event is dispatched, the loop asks
//! `get_current(app.features.as_ref())` for a fresh `FeatureContext` and
//! hands it down. A missing provider propagates out of [`run`] as an error;
//! there is no fallback screen.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event or a terminal resize.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::feature_context::{FeatureError, get_current};
use crate::core::state::App;
use crate::error::AppError;
use crate::tui::component::EventHandler;
use crate::tui::components::{FeaturePickerEvent, FeaturePickerState, NavEvent, NavMainState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub sidebar: NavMainState,
    // Feature picker overlay (None = hidden)
    pub feature_picker: Option<FeaturePickerState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            sidebar: NavMainState::new(),
            feature_picker: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> Result<(), AppError> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    // Draws hide the cursor; hand it back visible.
    if let Err(e) = execute!(stdout(), Show) {
        warn!("Failed to show cursor on exit: {}", e);
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> Result<(), AppError> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let context = get_current(app.features.as_ref())?;
            tui.sidebar.sync(context);
            terminal.draw(|f| ui::draw_ui(f, &*app, context, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match dispatch(app, tui, event)? {
                Effect::Quit => return Ok(()),
                Effect::Navigate(target) => {
                    // Opening the target belongs to whatever hosts the API;
                    // the TUI records it and shows it in the content pane.
                    info!("Navigation requested: {}", target);
                }
                Effect::None => {}
            }
        }
    }
}

/// Route one event to the overlay, the core, or the sidebar.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Result<Effect, AppError> {
    // Sidebar focus must match the rows the user is looking at.
    tui.sidebar.sync(get_current(app.features.as_ref())?);

    if matches!(event, TuiEvent::Resize) {
        return Ok(Effect::None);
    }

    // ForceQuit (Ctrl+C) always quits, overlay or not
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit).map_err(AppError::from);
    }

    // When the feature picker is open, route all events to it
    if let Some(picker) = tui.feature_picker.as_mut() {
        let effect = match picker.handle_event(&event) {
            Some(FeaturePickerEvent::Select(index)) => {
                tui.feature_picker = None;
                update(app, Action::SelectFeature(index))?
            }
            Some(FeaturePickerEvent::Dismiss) => {
                tui.feature_picker = None;
                Effect::None
            }
            None => Effect::None,
        };
        return Ok(effect);
    }

    let effect = match event {
        TuiEvent::Quit | TuiEvent::Escape => update(app, Action::Quit)?,
        TuiEvent::NextFeature => update(app, Action::NextFeature)?,
        TuiEvent::PreviousFeature => update(app, Action::PreviousFeature)?,
        TuiEvent::ClearMenu => update(app, Action::ClearMenu)?,
        TuiEvent::OpenFeaturePicker => {
            let provider = app.features.as_ref().ok_or(FeatureError::MissingProvider)?;
            tui.feature_picker = Some(FeaturePickerState::new(
                provider.features(),
                provider.current_feature_index(),
            ));
            Effect::None
        }
        other => match tui.sidebar.handle_event(&other) {
            Some(NavEvent::Activate(id)) => update(app, Action::ActivateMenu(id))?,
            None => Effect::None,
        },
    };
    debug!("Dispatched event, effect: {:?}", effect);
    Ok(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature::MenuId;
    use crate::test_support::test_app;

    fn current_menu(app: &App) -> Option<MenuId> {
        get_current(app.features.as_ref())
            .unwrap()
            .current_menu
            .map(|m| m.id)
    }

    #[test]
    fn test_enter_on_focused_row_navigates() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, TuiEvent::CursorDown).unwrap();
        let effect = dispatch(&mut app, &mut tui, TuiEvent::Submit).unwrap();
        assert_eq!(
            effect,
            Effect::Navigate("http://localhost:8000/api/star".to_string())
        );
        assert_eq!(current_menu(&app), Some(MenuId(2)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&mut app, &mut tui, TuiEvent::Quit).unwrap(), Effect::Quit);
        assert_eq!(dispatch(&mut app, &mut tui, TuiEvent::ForceQuit).unwrap(), Effect::Quit);
    }

    #[test]
    fn test_tab_switches_feature_and_resets_focus() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, TuiEvent::CursorDown).unwrap();
        dispatch(&mut app, &mut tui, TuiEvent::NextFeature).unwrap();
        dispatch(&mut app, &mut tui, TuiEvent::NextFeature).unwrap();
        dispatch(&mut app, &mut tui, TuiEvent::Resize).unwrap();
        assert_eq!(tui.sidebar.focused, 0);
        assert_eq!(app.status_message, "Switched to Inbox");
    }

    #[test]
    fn test_picker_captures_events_until_closed() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, TuiEvent::OpenFeaturePicker).unwrap();
        assert!(tui.feature_picker.is_some());

        // Quit inside the overlay only closes it
        assert_eq!(dispatch(&mut app, &mut tui, TuiEvent::Quit).unwrap(), Effect::None);
        assert!(tui.feature_picker.is_none());

        dispatch(&mut app, &mut tui, TuiEvent::OpenFeaturePicker).unwrap();
        dispatch(&mut app, &mut tui, TuiEvent::CursorDown).unwrap();
        dispatch(&mut app, &mut tui, TuiEvent::Submit).unwrap();
        assert!(tui.feature_picker.is_none());
        let ctx = get_current(app.features.as_ref()).unwrap();
        assert_eq!(ctx.current_feature.name, "Archive");
    }

    #[test]
    fn test_backspace_clears_active_menu() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, TuiEvent::ClearMenu).unwrap();
        assert_eq!(current_menu(&app), None);
    }

    #[test]
    fn test_missing_provider_surfaces_as_error() {
        let mut app = App::new(None, "http://localhost".to_string());
        let mut tui = TuiState::new();
        let err = dispatch(&mut app, &mut tui, TuiEvent::CursorDown).unwrap_err();
        assert!(matches!(err, AppError::Feature(_)));
    }
}
