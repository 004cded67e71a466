//! Poise Core
//!
//! Foundational primitives shared by the Poise crates:
//!
//! - **Geometry**: points, sizes and rectangles in layout units
//! - **Color**: linear RGBA colors with interpolation and hex parsing
//! - **Events**: pointer events delivered by the host
//! - **State Machines**: flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use poise_core::fsm::StateMachine;
//! use poise_core::events::event_types;
//!
//! const IDLE: u32 = 0;
//! const PRESSED: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, event_types::POINTER_DOWN, PRESSED)
//!     .on(PRESSED, event_types::POINTER_UP, IDLE)
//!     .build();
//!
//! fsm.send(event_types::POINTER_DOWN);
//! assert!(fsm.is_in(PRESSED));
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use color::{Color, ParseColorError};
pub use events::{Event, EventData, EventType};
pub use fsm::{StateId, StateMachine, Transition};
pub use geometry::{Point, Rect, Size};
