//! Dusk Application
//!
//! The single theme toggle screen plus a deterministic headless runtime for
//! driving it from JSON scenarios.
//!
//! # Example
//!
//! ```rust
//! use dusk_app::prelude::*;
//!
//! let mut screen = ThemeScreen::new(Viewport::default(), AnimatorConfig::default());
//! screen.handle(SwitchEvent::ValueChanged(true));
//!
//! while screen.frame(1.0 / 60.0) {}
//!
//! let root = screen.render();
//! assert_eq!(root.find("label").and_then(|n| n.text()), Some("DARK"));
//! ```

pub mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod screen;

pub use error::{AppError, Result};
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, RunOutcome, ScenarioTarget};
pub use headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use screen::{Node, NodeKind, SwitchEvent, ThemeScreen, Viewport};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{AppError, Result};
    pub use crate::headless_runner::{run_scenario, RunOutcome};
    pub use crate::headless_runtime::HeadlessRunConfig;
    pub use crate::screen::{Node, NodeKind, SwitchEvent, ThemeScreen, Viewport};

    // Theme types
    pub use dusk_theme::{AnimatorConfig, Palette, RenderedStyle, Theme};

    // Core types
    pub use dusk_core::Color;
}
