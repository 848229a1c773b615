//! # NavMain Component
//!
//! The sidebar: the current feature's name as a group header, then one row
//! per menu in display order, with the active menu highlighted.
//!
//! ## Projection first, widgets second
//!
//! [`nav_group`] turns a `FeatureContext` into plain data (`NavGroup` and a
//! lazy `NavRows` iterator). The widget only styles what the projection
//! yields, so ordering and active-state rules are tested without a terminal:
//!
//! ```rust,ignore
//! let group = nav_group(ctx);
//! assert_eq!(group.label, "Inbox");
//! let active: Vec<_> = group.rows.filter(|r| r.is_active).collect();
//! ```
//!
//! A row is active iff its `MenuId` equals the current menu's id. Names and
//! urls never take part in the comparison, and rows are keyed by id.
//!
//! ## Active vs. focused
//!
//! "Active" is core state (the menu the provider says is current). "Focused"
//! is the keyboard cursor, local to the TUI. Enter on the focused row asks
//! the core to make it active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::feature::{Icon, Menu, MenuId};
use crate::core::feature_context::FeatureContext;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// One sidebar row, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow<'a> {
    pub key: MenuId,
    pub icon: &'a Icon,
    pub name: &'a str,
    pub url: &'a str,
    pub is_active: bool,
}

/// Rows of a `NavGroup`, yielded in menu order.
#[derive(Debug, Clone)]
pub struct NavRows<'a> {
    menus: std::slice::Iter<'a, Menu>,
    active: Option<MenuId>,
}

impl<'a> Iterator for NavRows<'a> {
    type Item = NavRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let active = self.active;
        self.menus.next().map(|menu| NavRow {
            key: menu.id,
            icon: &menu.icon,
            name: &menu.name,
            url: &menu.url,
            is_active: active == Some(menu.id),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.menus.size_hint()
    }
}

impl ExactSizeIterator for NavRows<'_> {}

/// The sidebar's content: a header label and its rows.
#[derive(Debug, Clone)]
pub struct NavGroup<'a> {
    pub label: &'a str,
    pub rows: NavRows<'a>,
}

/// Project the current selection into sidebar content.
pub fn nav_group(context: FeatureContext<'_>) -> NavGroup<'_> {
    NavGroup {
        label: &context.current_feature.name,
        rows: NavRows {
            menus: context.current_feature.menus.iter(),
            active: context.current_menu.map(|m| m.id),
        },
    }
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Activate(MenuId),
}

/// Keyboard focus for the sidebar. Lives in `TuiState`.
#[derive(Debug, Default)]
pub struct NavMainState {
    pub focused: usize,
    pub list_state: ListState,
    feature: String,
    keys: Vec<MenuId>,
}

impl NavMainState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the rows currently on screen. When the feature or its menus
    /// change, focus jumps to the active row (or the top).
    pub fn sync(&mut self, context: FeatureContext<'_>) {
        let keys: Vec<MenuId> = context.current_feature.menus.iter().map(|m| m.id).collect();
        if self.feature == context.current_feature.name && self.keys == keys {
            return;
        }
        self.focused = context
            .current_menu
            .and_then(|m| context.current_feature.position(m.id))
            .unwrap_or(0);
        self.feature = context.current_feature.name.clone();
        self.keys = keys;
        self.list_state
            .select(if self.keys.is_empty() { None } else { Some(self.focused) });
    }

    pub fn focused_key(&self) -> Option<MenuId> {
        self.keys.get(self.focused).copied()
    }
}

impl EventHandler for NavMainState {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavEvent> {
        if self.keys.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.focused = self.focused.saturating_sub(1);
                self.list_state.select(Some(self.focused));
                None
            }
            TuiEvent::CursorDown => {
                self.focused = (self.focused + 1).min(self.keys.len() - 1);
                self.list_state.select(Some(self.focused));
                None
            }
            TuiEvent::Submit => self.focused_key().map(NavEvent::Activate),
            _ => None,
        }
    }
}

const ACTIVE_MARKER: &str = "▌";

/// Transient render wrapper for the sidebar.
pub struct NavMain<'a> {
    context: FeatureContext<'a>,
    state: &'a mut NavMainState,
    /// False while an overlay owns the keyboard; hides the focus cursor.
    has_focus: bool,
}

impl<'a> NavMain<'a> {
    pub fn new(context: FeatureContext<'a>, state: &'a mut NavMainState, has_focus: bool) -> Self {
        Self {
            context,
            state,
            has_focus,
        }
    }
}

impl Component for NavMain<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let group = nav_group(self.context);

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(format!(" {} ", group.label)).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

        if group.rows.len() == 0 {
            let empty = Paragraph::new("No menus")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = group
            .rows
            .map(|row| {
                let (marker, style) = if row.is_active {
                    (
                        ACTIVE_MARKER,
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (" ", Style::default().fg(Color::Gray))
                };
                let glyph = row.icon.glyph();
                // Glyphs are not all one column wide; leave room for marker and space.
                let name_width = inner_width.saturating_sub(glyph.width() + 2);
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(glyph, style),
                    Span::raw(" "),
                    Span::styled(truncate_to_width(row.name, name_width), style),
                ]))
            })
            .collect();

        let highlight = if self.has_focus {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to `max_width` terminal columns, ending with "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
