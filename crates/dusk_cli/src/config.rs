//! Dusk configuration file handling

use anyhow::{bail, Context, Result};
use dusk_animation::SpringConfig;
use dusk_app::{HeadlessRunConfig, Viewport};
use dusk_theme::{AnimatorConfig, Theme, DEFAULT_STIFFNESS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Dusk configuration (dusk.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DuskConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Progress spring parameters
#[derive(Debug, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default = "default_stiffness")]
    pub stiffness: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
    /// Omitted means critical damping for the given stiffness and mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
    #[serde(default = "default_rest_displacement")]
    pub rest_displacement: f32,
    #[serde(default = "default_rest_velocity")]
    pub rest_velocity: f32,
    /// Theme the screen opens with
    #[serde(default)]
    pub initial_theme: Theme,
}

fn default_stiffness() -> f32 {
    DEFAULT_STIFFNESS
}

fn default_mass() -> f32 {
    1.0
}

fn default_rest_displacement() -> f32 {
    SpringConfig::DEFAULT_REST_DISPLACEMENT
}

fn default_rest_velocity() -> f32 {
    SpringConfig::DEFAULT_REST_VELOCITY
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            mass: default_mass(),
            damping: None,
            rest_displacement: default_rest_displacement(),
            rest_velocity: default_rest_velocity(),
            initial_theme: Theme::Light,
        }
    }
}

impl AnimationConfig {
    pub fn spring(&self) -> SpringConfig {
        let base = match self.damping {
            Some(damping) => SpringConfig::new(self.stiffness, damping, self.mass),
            None => SpringConfig::critically_damped_with_mass(self.stiffness, self.mass),
        };
        base.with_rest_thresholds(self.rest_displacement, self.rest_velocity)
    }

    pub fn animator(&self) -> AnimatorConfig {
        AnimatorConfig {
            spring: self.spring(),
            initial: self.initial_theme,
        }
    }
}

/// Logical screen size
#[derive(Debug, Deserialize, Serialize)]
pub struct ScreenConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    390
}

fn default_height() -> u32 {
    844
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Headless frame clock
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlessConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_probe_every")]
    pub probe_every_frames: u32,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_probe_every() -> u32 {
    4
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            probe_every_frames: default_probe_every(),
        }
    }
}

impl DuskConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: DuskConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.animation.spring().is_valid() {
            bail!(
                "animation spring must have positive stiffness, mass and rest thresholds \
                 and non-negative damping"
            );
        }
        self.viewport()?;
        self.headless().validate()?;
        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport> {
        Ok(Viewport::new(
            self.screen.width as f32,
            self.screen.height as f32,
        )?)
    }

    pub fn headless(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            max_frames: 1,
            tick_ms: self.headless.tick_ms,
            probe_every_frames: self.headless.probe_every_frames,
        }
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
