//! Headless runtime primitives for diagnostics execution.

use crate::error::{AppError, Result};

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
    /// Probe sampling interval in frames (1 = every frame, 4 = every 4 frames).
    pub probe_every_frames: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
            probe_every_frames: 4,
        }
    }
}

impl HeadlessRunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_frames == 0 {
            return Err(AppError::InvalidConfig(
                "headless max_frames must be > 0".to_string(),
            ));
        }
        if self.tick_ms == 0 {
            return Err(AppError::InvalidConfig(
                "headless tick_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Frame delta in seconds
    pub fn tick_secs(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run `cfg.max_frames` frames, passing each callback its zero-based index.
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(u32),
    {
        cfg.validate()?;

        for frame in 0..cfg.max_frames {
            on_frame(frame);
        }
        tracing::trace!(frames = cfg.max_frames, "headless frames done");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_exact_frame_budget() {
        let cfg = HeadlessRunConfig {
            max_frames: 5,
            tick_ms: 10,
            ..Default::default()
        };
        let mut seen = Vec::new();
        HeadlessRuntime::run(cfg, |frame| seen.push(frame)).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!((cfg.tick_secs() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_degenerate_config() {
        for cfg in [
            HeadlessRunConfig {
                max_frames: 0,
                ..Default::default()
            },
            HeadlessRunConfig {
                tick_ms: 0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                HeadlessRuntime::run(cfg, |_| {}),
                Err(AppError::InvalidConfig(_))
            ));
        }
    }
}
