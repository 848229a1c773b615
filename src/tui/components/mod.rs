//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line
//! - `ContentPane`: detail view for the active menu
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NavMain`: the sidebar, with keyboard focus kept in `NavMainState`
//! - `FeaturePicker`: overlay for switching features
//!
//! Components receive external data as props, never by reaching into global
//! state. The sidebar gets its `FeatureContext` handed to it:
//!
//! ```rust,ignore
//! // Good: dependency is explicit
//! NavMain::new(context, &mut tui.sidebar, true).render(frame, area);
//!
//! // Bad: hidden dependency on App
//! NavMain::new(&mut tui.sidebar).render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── nav_main.rs        (sidebar and its projection)
//! ├── content.rs         (active menu details)
//! └── feature_picker.rs  (feature switcher overlay)
//! ```

pub mod content;
pub mod feature_picker;
pub mod nav_main;
mod title_bar;

pub use content::ContentPane;
pub use feature_picker::{FeaturePicker, FeaturePickerEvent, FeaturePickerState};
pub use nav_main::{NavEvent, NavGroup, NavMain, NavMainState, NavRow, nav_group};
pub use title_bar::TitleBar;
