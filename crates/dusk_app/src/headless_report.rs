//! Report output model for headless diagnostics runs.

use crate::headless_assert::DiagnosticsSnapshot;
use anyhow::{bail, Result};
use dusk_theme::Theme;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless diagnostics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless diagnostics run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Theme at the end of the run
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Animation progress at the end of the run
    #[serde(default)]
    pub progress: Option<f32>,
}

impl HeadlessReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            theme: None,
            progress: None,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            theme: None,
            progress: None,
        }
    }

    /// Record the final theme state from a snapshot
    pub fn with_final_state(mut self, snapshot: &DiagnosticsSnapshot) -> Self {
        self.theme = snapshot.theme;
        self.progress = snapshot.progress;
        self
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(1, 16);
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
        assert!(report
            .write_to_path(Path::new("out/../../report.json"))
            .is_err());
    }

    #[test]
    fn test_writer_output_is_json() {
        let report = HeadlessReport::failed("assert_theme", 3, "nope".to_string(), 10, 160);
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["failed_step_index"], 3);
        assert_eq!(value["assertion"], "assert_theme");
    }

    #[test]
    fn test_final_state() {
        let snapshot = DiagnosticsSnapshot {
            theme: Some(Theme::Dark),
            progress: Some(1.0),
            ..Default::default()
        };
        let report = HeadlessReport::passed(0, 0).with_final_state(&snapshot);
        assert!(report.is_passed());
        assert_eq!(report.theme, Some(Theme::Dark));
        assert_eq!(report.progress, Some(1.0));
    }
}
