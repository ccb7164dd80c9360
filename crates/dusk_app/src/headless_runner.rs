//! Scenario runner that executes headless diagnostics goals.

use crate::headless_assert::{
    evaluate_assert_color, evaluate_assert_exists, evaluate_assert_progress,
    evaluate_assert_settled, evaluate_assert_text_contains, evaluate_assert_theme,
    AssertionResult, DiagnosticsSnapshot, DEFAULT_COLOR_TOLERANCE,
};
use crate::headless_report::HeadlessReport;
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::screen::{SwitchEvent, ThemeScreen};
use anyhow::Result;
use dusk_theme::Theme;

/// Something a scenario can drive: it takes input, advances by frames and
/// reports what it shows.
pub trait ScenarioTarget {
    /// The switch moved to `on`
    fn switch_changed(&mut self, on: bool);

    /// Select a theme without going through the switch
    fn set_theme(&mut self, theme: Theme);

    /// Advance one frame by `dt` seconds
    fn advance(&mut self, dt: f32);

    /// `true` once nothing is animating
    fn is_idle(&self) -> bool;

    /// Observable state right now
    fn snapshot(&self) -> DiagnosticsSnapshot;
}

impl ScenarioTarget for ThemeScreen {
    fn switch_changed(&mut self, on: bool) {
        self.handle(SwitchEvent::ValueChanged(on));
    }

    fn set_theme(&mut self, theme: Theme) {
        self.animator().set_theme(theme);
    }

    fn advance(&mut self, dt: f32) {
        self.frame(dt);
    }

    fn is_idle(&self) -> bool {
        !self.is_animating()
    }

    fn snapshot(&self) -> DiagnosticsSnapshot {
        ThemeScreen::snapshot(self)
    }
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a target.
pub fn run_scenario<T: ScenarioTarget>(
    input: &str,
    runtime_cfg: HeadlessRunConfig,
    target: &mut T,
) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg, target)
}

/// Running counters shared by every step of one scenario
struct RunState {
    cfg: HeadlessRunConfig,
    elapsed_frames: u64,
    elapsed_ms: u64,
    latest_snapshot: Option<DiagnosticsSnapshot>,
}

impl RunState {
    /// Cached snapshot, taken now if the last input invalidated it
    fn snapshot<T: ScenarioTarget>(&mut self, target: &T) -> &DiagnosticsSnapshot {
        self.latest_snapshot.get_or_insert_with(|| target.snapshot())
    }

    fn probe<T: ScenarioTarget>(&mut self, target: &T) {
        self.latest_snapshot = Some(target.snapshot());
    }

    fn failed(&self, assertion: &str, step_index: usize, message: String) -> RunOutcome {
        let mut report = HeadlessReport::failed(
            assertion,
            step_index,
            message,
            self.elapsed_frames,
            self.elapsed_ms,
        );
        if let Some(snapshot) = &self.latest_snapshot {
            report = report.with_final_state(snapshot);
        }
        tracing::warn!(step = step_index, assertion, "scenario step failed");
        RunOutcome::Failed { report }
    }
}

/// Execute a pre-loaded scenario against a target.
pub fn run_loaded_scenario<T: ScenarioTarget>(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
    target: &mut T,
) -> Result<RunOutcome> {
    runtime_cfg.validate()?;

    let mut state = RunState {
        cfg: runtime_cfg,
        elapsed_frames: 0,
        elapsed_ms: 0,
        latest_snapshot: None,
    };
    let probe_every = runtime_cfg.probe_every_frames.max(1);

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step = step_index, ?step, "scenario step");

        if step.is_input() {
            state.latest_snapshot = None;
        }

        let (assertion, result) = match step {
            ScenarioStep::Toggle { on } => {
                target.switch_changed(*on);
                continue;
            }
            ScenarioStep::SetTheme { theme } => {
                target.set_theme(*theme);
                continue;
            }
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, runtime_cfg.tick_ms);
                let mut remaining_ms = *ms;
                run_sampled_frames(&mut state, target, frames, probe_every, step_index, || {
                    let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                    remaining_ms = remaining_ms.saturating_sub(step_ms);
                    step_ms
                })?;
                continue;
            }
            ScenarioStep::Tick { frames } => {
                run_sampled_frames(&mut state, target, *frames, probe_every, step_index, || {
                    runtime_cfg.tick_ms
                })?;
                continue;
            }
            ScenarioStep::Settle { max_frames } => {
                if let Err(message) = settle(&mut state, target, *max_frames, step_index) {
                    return Ok(state.failed("settle", step_index, message));
                }
                continue;
            }
            ScenarioStep::AssertExists { id } => (
                "assert_exists",
                evaluate_assert_exists(id, state.snapshot(target)),
            ),
            ScenarioStep::AssertTextContains { id, value } => (
                "assert_text_contains",
                evaluate_assert_text_contains(id, value, state.snapshot(target)),
            ),
            ScenarioStep::AssertColor {
                id,
                color,
                tolerance,
            } => (
                "assert_color",
                evaluate_assert_color(
                    id,
                    color,
                    tolerance.unwrap_or(DEFAULT_COLOR_TOLERANCE),
                    state.snapshot(target),
                ),
            ),
            ScenarioStep::AssertTheme { theme } => (
                "assert_theme",
                evaluate_assert_theme(*theme, state.snapshot(target)),
            ),
            ScenarioStep::AssertSettled => (
                "assert_settled",
                evaluate_assert_settled(state.snapshot(target)),
            ),
            ScenarioStep::AssertProgress { min, max } => (
                "assert_progress",
                evaluate_assert_progress(*min, *max, state.snapshot(target)),
            ),
        };

        if let AssertionResult::Failed { message, .. } = result {
            return Ok(state.failed(assertion, step_index, message));
        }
    }

    let final_snapshot = target.snapshot();
    let report = HeadlessReport::passed(state.elapsed_frames, state.elapsed_ms)
        .with_final_state(&final_snapshot);
    tracing::info!(
        frames = report.elapsed_frames,
        ms = report.elapsed_ms,
        "scenario passed"
    );

    Ok(RunOutcome::Passed { report })
}

fn run_sampled_frames<T, A>(
    state: &mut RunState,
    target: &mut T,
    frames: u32,
    probe_every: u32,
    step_index: usize,
    mut advance_ms: A,
) -> Result<()>
where
    T: ScenarioTarget,
    A: FnMut() -> u64,
{
    if frames == 0 {
        state.probe(target);
        return Ok(());
    }

    let mut cfg = state.cfg;
    cfg.max_frames = frames;
    HeadlessRuntime::run(cfg, |frame| {
        let step_ms = advance_ms();
        target.advance(step_ms as f32 / 1000.0);
        state.elapsed_frames = state.elapsed_frames.saturating_add(1);
        state.elapsed_ms = state.elapsed_ms.saturating_add(step_ms);

        let sampled = frame + 1;
        if sampled % probe_every == 0 || sampled == frames {
            state.probe(target);
        }
    })?;
    tracing::trace!(step = step_index, frames, "frames advanced");

    Ok(())
}

/// Advance until the target is idle. The error carries the failure message.
fn settle<T: ScenarioTarget>(
    state: &mut RunState,
    target: &mut T,
    max_frames: u32,
    step_index: usize,
) -> std::result::Result<(), String> {
    let dt = state.cfg.tick_secs();
    let mut frames = 0u32;
    while !target.is_idle() {
        if frames >= max_frames {
            state.probe(target);
            return Err(format!("still animating after {max_frames} frames"));
        }
        target.advance(dt);
        frames += 1;
        state.elapsed_frames = state.elapsed_frames.saturating_add(1);
        state.elapsed_ms = state.elapsed_ms.saturating_add(state.cfg.tick_ms);
    }

    state.probe(target);
    tracing::debug!(step = step_index, frames, "settled");
    Ok(())
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
