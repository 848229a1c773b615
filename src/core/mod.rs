//! # Core Application Logic
//!
//! GroundCrew's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Features and menus   │
//!                    │  • FeatureProvider      │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`feature`]: `Feature`, `Menu`, `MenuId`, `Icon`
//! - [`feature_context`]: the selection owner and its accessor
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and reducer
//! - [`config`]: file + env + CLI settings

pub mod action;
pub mod config;
pub mod feature;
pub mod feature_context;
pub mod state;
