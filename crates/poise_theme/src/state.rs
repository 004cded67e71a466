//! Global theme state singleton
//!
//! The ambient theme widgets fall back to when a color is left unset. It is
//! initialised once per process; reading it before `init` installs the
//! default light/dark bundle.

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::ColorToken;
use poise_core::Color;
use rustc_hash::FxHashMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Process-wide ambient theme
pub struct ThemeState {
    bundle: ThemeBundle,
    scheme: RwLock<ColorScheme>,
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,
}

impl ThemeState {
    fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        Self {
            bundle,
            scheme: RwLock::new(scheme),
            color_overrides: RwLock::new(FxHashMap::default()),
        }
    }

    /// Install the global theme. Returns false when one was already installed.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) -> bool {
        let installed = THEME_STATE.set(Self::new(bundle, scheme)).is_ok();
        if installed {
            tracing::debug!(?scheme, "theme state initialised");
        } else {
            tracing::debug!("theme state already initialised, keeping existing");
        }
        installed
    }

    /// Get the global theme state, installing defaults on first use
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| {
            tracing::debug!("theme state initialised with defaults");
            Self::new(ThemeBundle::default(), ColorScheme::default())
        })
    }

    /// Returns None if nothing has been initialised yet
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn scheme(&self) -> ColorScheme {
        *read(&self.scheme)
    }

    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = write(&self.scheme);
        if *current != scheme {
            tracing::debug!(from = ?*current, to = ?scheme, "switching color scheme");
            *current = scheme;
        }
    }

    pub fn toggle_scheme(&self) {
        let scheme = self.scheme().toggle();
        self.set_scheme(scheme);
    }

    /// Snapshot of the active theme with overrides applied
    pub fn theme(&self) -> Theme {
        let mut theme = self.bundle.for_scheme(self.scheme()).clone();
        for (token, color) in read(&self.color_overrides).iter() {
            theme.colors_mut().set(*token, *color);
        }
        theme
    }

    /// Get a color token value (checks override first)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = read(&self.color_overrides).get(&token) {
            return *color;
        }
        self.bundle.for_scheme(self.scheme()).color(token)
    }

    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        write(&self.color_overrides).insert(token, color);
    }

    pub fn remove_color_override(&self, token: ColorToken) {
        write(&self.color_overrides).remove(&token);
    }

    pub fn clear_overrides(&self) {
        write(&self.color_overrides).clear();
    }
}

// A panic while holding a guard cannot leave these plain values half-written,
// so poisoning is ignored.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
