//! # TitleBar Component
//!
//! Top status bar: application name, current feature, and the latest status
//! message. Purely presentational; all data arrives as props.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"GroundCrew (feature: VerifAI) | Opened Modes"`
//! 2. **Default**: `"GroundCrew (feature: VerifAI)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// Name of the current feature
    pub feature_name: String,
    /// Status message (e.g., "Switched to System")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(feature_name: String, status_message: String) -> Self {
        Self {
            feature_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("GroundCrew (feature: {})", self.feature_name)
        } else {
            format!(
                "GroundCrew (feature: {}) | {}",
                self.feature_name, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
