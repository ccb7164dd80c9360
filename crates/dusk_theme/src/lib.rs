//! Dusk Theme System
//!
//! A two-theme (light / dark) color system whose transitions are animated by
//! a spring.
//!
//! # Overview
//!
//! - [`Theme`]: the discrete mode picked by the user
//! - [`Palette`]: the two hardcoded color sets
//! - [`ThemeAnimator`]: owns the theme cell and a progress spring, and blends
//!   the palettes by the spring's current value
//! - [`RenderedStyle`]: the colors to paint on a given frame
//!
//! # Quick Start
//!
//! ```rust
//! use dusk_theme::{Palette, RenderedStyle, Theme, ThemeAnimator};
//!
//! let animator = ThemeAnimator::default();
//! animator.set_theme(Theme::Dark);
//!
//! // Drive from a frame clock
//! while animator.step(1.0 / 60.0) {}
//!
//! assert_eq!(animator.progress(), 1.0);
//! assert_eq!(animator.current_colors(), RenderedStyle::from(Palette::dark()));
//! assert_eq!(animator.label(), "DARK");
//! ```

pub mod animator;
pub mod chrome;
pub mod error;
pub mod palette;
pub mod style;
pub mod theme;

pub use animator::{AnimatorConfig, ThemeAnimator, DEFAULT_STIFFNESS};
pub use chrome::{StatusBar, StatusBarStyle, SwitchColors};
pub use error::ThemeError;
pub use palette::{Palette, PaletteEntry};
pub use style::RenderedStyle;
pub use theme::Theme;
