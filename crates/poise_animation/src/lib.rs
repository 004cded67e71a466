//! Poise Animation System
//!
//! Frame-driven, single-threaded animation primitives.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible cubic bezier and polynomial curves
//! - **Scheduler**: one frame source per window, hands frame time to tickers
//! - **Tickers**: per-animation registrations released on drop
//! - **Controllers**: fixed-duration forward animations over `[0, 1]`
//!
//! # Example
//!
//! ```rust
//! use poise_animation::{AnimationController, AnimationScheduler, Easing};
//! use std::time::Duration;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut controller =
//!     AnimationController::new(&scheduler, Duration::from_millis(200), Easing::Linear);
//!
//! controller.forward_from_start();
//! scheduler.tick(Duration::from_millis(100));
//! assert_eq!(controller.poll(), Some(0.5));
//! ```

pub mod controller;
pub mod easing;
pub mod scheduler;

pub use controller::{AnimationController, AnimationStatus};
pub use easing::{Easing, Interval};
pub use scheduler::{AnimationScheduler, Ticker, TickerId};
