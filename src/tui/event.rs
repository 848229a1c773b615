use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C quits from anywhere, overlays included
    Escape,
    Submit,
    CursorUp,
    CursorDown,
    NextFeature,
    PreviousFeature,
    OpenFeaturePicker,
    ClearMenu,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    match event::read() {
        Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::OpenFeaturePicker),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Tab) => Some(TuiEvent::NextFeature),
        (_, KeyCode::BackTab) => Some(TuiEvent::PreviousFeature),
        (_, KeyCode::Backspace) => Some(TuiEvent::ClearMenu),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_bindings_take_priority() {
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('f')),
            Some(TuiEvent::OpenFeaturePicker)
        );
    }

    #[test]
    fn test_vim_keys_move_cursor() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('j')), Some(TuiEvent::CursorDown));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('k')), Some(TuiEvent::CursorUp));
    }

    #[test]
    fn test_tab_cycles_features() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Tab), Some(TuiEvent::NextFeature));
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::BackTab), Some(TuiEvent::PreviousFeature));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('x')), None);
    }
}
