//! Assertion helpers for headless diagnostics goals.

use dusk_core::Color;
use dusk_theme::Theme;
use rustc_hash::FxHashMap;

/// Default per-channel tolerance for color assertions (about 0.5 / 255)
pub const DEFAULT_COLOR_TOLERANCE: f32 = 0.002;

/// Snapshot of app-observable state used for headless assertions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    pub elements: FxHashMap<String, DiagnosticsElement>,
    pub theme: Option<Theme>,
    pub progress: Option<f32>,
    /// Whether any animation was still running when the snapshot was taken
    pub animating: bool,
}

/// Minimal element representation for diagnostics checks.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsElement {
    pub text: Option<String>,
    pub fill: Option<Color>,
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

fn element<'a>(
    id: &str,
    snapshot: &'a DiagnosticsSnapshot,
) -> Result<&'a DiagnosticsElement, AssertionResult> {
    snapshot
        .elements
        .get(id)
        .ok_or_else(|| AssertionResult::failed("missing_element", format!("{id}: element not found")))
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    match element(id, snapshot) {
        Ok(_) => AssertionResult::Passed,
        Err(failure) => failure,
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let element = match element(id, snapshot) {
        Ok(element) => element,
        Err(failure) => return failure,
    };
    let Some(text) = element.text.as_deref() else {
        return AssertionResult::failed("missing_text", format!("{id}: text not available"));
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

pub fn evaluate_assert_color(
    id: &str,
    expected: &str,
    tolerance: f32,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let expected_color = match Color::parse(expected) {
        Ok(color) => color,
        Err(err) => {
            return AssertionResult::failed("invalid_color", format!("{id}: {err}"));
        }
    };
    let element = match element(id, snapshot) {
        Ok(element) => element,
        Err(failure) => return failure,
    };
    let Some(fill) = element.fill else {
        return AssertionResult::failed("missing_color", format!("{id}: color not available"));
    };
    if fill.approx_eq(&expected_color, tolerance) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "color_mismatch",
            format!("{id}: expected {expected_color}, got {fill}"),
        )
    }
}

pub fn evaluate_assert_theme(expected: Theme, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    match snapshot.theme {
        Some(theme) if theme == expected => AssertionResult::Passed,
        Some(theme) => AssertionResult::failed(
            "theme_mismatch",
            format!("expected theme '{expected}', got '{theme}'"),
        ),
        None => AssertionResult::failed("missing_theme", "theme not available".to_string()),
    }
}

pub fn evaluate_assert_settled(snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.animating {
        let progress = snapshot
            .progress
            .map(|p| format!("{p:.4}"))
            .unwrap_or_else(|| "?".to_string());
        AssertionResult::failed(
            "still_animating",
            format!("animation still running at progress {progress}"),
        )
    } else {
        AssertionResult::Passed
    }
}

pub fn evaluate_assert_progress(
    min: f32,
    max: f32,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(progress) = snapshot.progress else {
        return AssertionResult::failed("missing_progress", "progress not available".to_string());
    };
    if (min..=max).contains(&progress) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "progress_out_of_range",
            format!("expected progress in [{min}, {max}], got {progress}"),
        )
    }
}
