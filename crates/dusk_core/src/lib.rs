//! Dusk Core Runtime
//!
//! Foundational primitives shared by the Dusk crates:
//!
//! - **Colors**: RGBA colors with hex / CSS parsing and per-channel blending
//! - **Reactive State**: explicitly owned state cells that notify subscribers on change
//!
//! # Example
//!
//! ```rust
//! use dusk_core::reactive::State;
//!
//! let dark = State::new(false);
//! let seen = State::new(0u32);
//!
//! let seen_handle = seen.clone();
//! dark.subscribe(move |_| {
//!     seen_handle.update(|n| *n += 1);
//! });
//!
//! dark.set(true);
//! dark.set(true); // unchanged, no notification
//! assert_eq!(seen.get(), 1);
//! ```

pub mod color;
pub mod error;
pub mod reactive;

pub use color::Color;
pub use error::{ColorParseError, Result};
pub use reactive::{State, SubscriptionId};
