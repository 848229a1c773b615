//! # Features and Menus
//!
//! The data a sidebar is built from. A `Feature` is a named application
//! section with an ordered list of `Menu` entries. Order is display order and
//! is never re-sorted.
//!
//! These values are built by the config layer and handed to the
//! `FeatureProvider`. Nothing downstream mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a menu, unique within its owning feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MenuId(pub u32);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named reference to a glyph resource.
///
/// The name is what the config file carries (`icon = "search"`); the glyph is
/// what ends up in a terminal cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Icon(String);

const FALLBACK_GLYPH: &str = "•";

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The glyph drawn for this icon. Unknown names draw a bullet.
    pub fn glyph(&self) -> &'static str {
        match self.0.as_str() {
            "search" => "⌕",
            "list" => "☰",
            "workflow" => "⇄",
            "health" => "♥",
            "inbox" => "✉",
            "star" => "★",
            "settings" => "⚙",
            "home" => "⌂",
            "report" => "▤",
            _ => FALLBACK_GLYPH,
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self(String::from("dot"))
    }
}

/// One navigable entry within a feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Icon,
}

impl Menu {
    pub fn new(id: u32, name: &str, url: &str, icon: &str) -> Self {
        Self {
            id: MenuId(id),
            name: name.to_string(),
            url: url.to_string(),
            icon: Icon::new(icon),
        }
    }
}

/// A top-level application section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl Feature {
    pub fn new(name: &str, menus: Vec<Menu>) -> Self {
        Self {
            name: name.to_string(),
            menus,
        }
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.iter().find(|m| m.id == id)
    }

    /// Position of a menu in display order.
    pub fn position(&self, id: MenuId) -> Option<usize> {
        self.menus.iter().position(|m| m.id == id)
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<MenuId> {
        self.menus
            .iter()
            .enumerate()
            .find(|(i, m)| self.menus[..*i].iter().any(|prev| prev.id == m.id))
            .map(|(_, m)| m.id)
    }

    /// First display name that appears more than once, if any.
    pub fn duplicate_name(&self) -> Option<&str> {
        self.menus
            .iter()
            .enumerate()
            .find(|(i, m)| self.menus[..*i].iter().any(|prev| prev.name == m.name))
            .map(|(_, m)| m.name.as_str())
    }
}

/// Built-in catalog used when the config file declares no features.
pub fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            "VerifAI",
            vec![
                Menu::new(1, "Fact check", "/verifai/run", "search"),
                Menu::new(2, "Modes", "/verifai/modes", "list"),
                Menu::new(3, "Workflow graph", "/verifai/show", "workflow"),
            ],
        ),
        Feature::new("System", vec![Menu::new(1, "Health", "/health", "health")]),
    ]
}
