//! Poise Theme System
//!
//! Design tokens and the ambient theme that widgets read at render time.
//!
//! # Quick Start
//!
//! ```rust
//! use poise_theme::{ColorToken, ThemeState};
//!
//! // Falls back to the default light theme when nothing was initialised
//! let theme = ThemeState::get();
//! let background = theme.color(ColorToken::Secondary);
//! # let _ = background;
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: semantic colors (primary, secondary, surface and their
//!   "on" counterparts)
//! - [`ElevationTokens`]: how an elevation maps to a drop shadow
//! - [`MotionTokens`]: transition durations and easing
//!
//! # Loading from TOML
//!
//! ```rust
//! use poise_theme::{ColorScheme, Theme};
//!
//! let theme = Theme::from_toml(r##"
//!     scheme = "dark"
//!     [colors]
//!     secondary = "#0F766E"
//!     [motion]
//!     pose_transition_ms = 300
//! "##).unwrap();
//!
//! assert_eq!(theme.scheme(), ColorScheme::Dark);
//! assert_eq!(theme.motion().pose_transition_ms, 300);
//! ```

pub mod state;
pub mod theme;
pub mod tokens;

pub use state::ThemeState;
pub use theme::{ColorScheme, Theme, ThemeBundle, ThemeError};
pub use tokens::*;
