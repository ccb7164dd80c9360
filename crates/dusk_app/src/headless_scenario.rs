//! Scenario definition for app-level headless diagnostics.

use crate::error::Result;
use dusk_theme::Theme;
use serde::Deserialize;
use std::path::Path;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One scenario step: an input, a span of frames, or an assertion.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Flip the switch to `on`
    Toggle { on: bool },
    /// Select a theme directly
    SetTheme { theme: Theme },
    Wait { ms: u64 },
    Tick { frames: u32 },
    /// Run frames until nothing animates, failing after `max_frames`
    Settle {
        #[serde(default = "default_settle_frames")]
        max_frames: u32,
    },
    AssertExists { id: String },
    AssertTextContains { id: String, value: String },
    AssertColor {
        id: String,
        color: String,
        #[serde(default)]
        tolerance: Option<f32>,
    },
    AssertTheme { theme: Theme },
    AssertSettled,
    AssertProgress { min: f32, max: f32 },
}

fn default_settle_frames() -> u32 {
    1_000
}

impl ScenarioStep {
    /// Steps that change app state and make any cached snapshot stale
    pub fn is_input(&self) -> bool {
        matches!(self, ScenarioStep::Toggle { .. } | ScenarioStep::SetTheme { .. })
    }
}
