//! # Feature Picker Component
//!
//! Overlay for jumping straight to a feature. Opened with Ctrl+F.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FeaturePickerState` lives in `TuiState` while the overlay is open
//! - `FeaturePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::feature::Feature;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the feature picker overlay.
pub struct FeaturePickerState {
    pub entries: Vec<PickerEntry>,
    /// Index of the feature that is current in the provider.
    pub current: usize,
    pub selected: usize,
    pub list_state: ListState,
}

/// What the picker shows per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub menu_count: usize,
}

impl FeaturePickerState {
    /// Open with the cursor on the current feature.
    pub fn new(features: &[Feature], current: usize) -> Self {
        let entries = features
            .iter()
            .map(|f| PickerEntry {
                name: f.name.clone(),
                menu_count: f.menus.len(),
            })
            .collect::<Vec<_>>();
        let selected = current.min(entries.len().saturating_sub(1));
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            entries,
            current,
            selected,
            list_state,
        }
    }
}

/// Events emitted by the feature picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeaturePickerEvent {
    Select(usize),
    Dismiss,
}

impl EventHandler for FeaturePickerState {
    type Event = FeaturePickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FeaturePickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Quit => Some(FeaturePickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit if !self.entries.is_empty() => {
                Some(FeaturePickerEvent::Select(self.selected))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the feature picker overlay.
pub struct FeaturePicker<'a> {
    state: &'a mut FeaturePickerState,
}

impl<'a> FeaturePicker<'a> {
    pub fn new(state: &'a mut FeaturePickerState) -> Self {
        Self { state }
    }
}

impl Component for FeaturePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Features ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if i == self.state.current {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if i == self.state.current { "● " } else { "  " };
                let count = match entry.menu_count {
                    1 => "1 menu".to_string(),
                    n => format!("{n} menus"),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(entry.name.clone(), style),
                    Span::styled(format!("  {count}"), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, test_features};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_opens_on_current_feature() {
        let state = FeaturePickerState::new(&test_features(), 1);
        assert_eq!(state.selected, 1);
        assert_eq!(state.list_state.selected(), Some(1));
        assert_eq!(state.entries[0].menu_count, 2);
    }

    #[test]
    fn test_navigate_and_select() {
        let mut state = FeaturePickerState::new(&test_features(), 0);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(FeaturePickerEvent::Select(1))
        );
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = FeaturePickerState::new(&test_features(), 0);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(FeaturePickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_lists_features() {
        let mut state = FeaturePickerState::new(&test_features(), 0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| FeaturePicker::new(&mut state).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Features"));
        assert!(text.contains("● Inbox"));
        assert!(text.contains("Archive"));
        assert!(text.contains("0 menus"));
    }
}
