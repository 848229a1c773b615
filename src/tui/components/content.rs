//! # Content Pane
//!
//! Right-hand detail view for the active menu: its name, the target it
//! navigates to, and the most recent navigation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::feature_context::FeatureContext;
use crate::core::state::App;
use crate::tui::component::Component;

pub struct ContentPane<'a> {
    context: FeatureContext<'a>,
    app: &'a App,
}

impl<'a> ContentPane<'a> {
    pub fn new(context: FeatureContext<'a>, app: &'a App) -> Self {
        Self { context, app }
    }
}

impl Component for ContentPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(Color::DarkGray);
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let mut lines = Vec::new();
        let block = match self.context.current_menu {
            Some(menu) => {
                lines.push(Line::from(vec![
                    Span::styled("Target  ", label),
                    Span::raw(self.app.target_for(&menu.url)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Menu    ", label),
                    Span::raw(format!("{} {}", menu.id, menu.icon.name())),
                ]));
                block.title(Line::from(format!(" {} ", menu.name)).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            }
            None => {
                lines.push(Line::styled("Nothing selected. Press Enter on a menu.", label));
                block.title(format!(" {} ", self.context.current_feature.name))
            }
        };

        if let Some(last) = &self.app.last_navigation {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Opened  ", label),
                Span::raw(last.as_str()),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
