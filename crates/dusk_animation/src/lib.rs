//! Dusk Animation System
//!
//! Spring physics and the scheduler that steps it.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Deterministic Stepping**: springs advance by an explicit `dt`, so a
//!   frame clock (real or headless) owns time
//! - **Interruptible**: retargeting keeps the current position and velocity

pub mod scheduler;
pub mod spring;

pub use scheduler::{AnimationScheduler, SharedScheduler, SpringId};
pub use spring::{Spring, SpringConfig};
