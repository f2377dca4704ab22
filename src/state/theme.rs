//! Light/dark theme state and its persisted preference.
//!
//! DESIGN
//! ======
//! `ThemeManager` owns the current theme and the store it persists to. It
//! never touches the document: `apply` returns a `ThemeView` describing the
//! attribute, icon, and label values the browser layer writes.
//!
//! The initial theme is the stored preference when one exists, otherwise the
//! configured fallback. The system colour-scheme preference is not consulted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::util::persistence::PreferenceStore;

/// Site colour theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `light`/`dark` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Material icon naming the theme the toggle switches *to*.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "light_mode",
            Self::Light => "dark_mode",
        }
    }

    /// Text on the mobile menu's theme button.
    pub fn mobile_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to Light",
            Self::Light => "Switch to Dark",
        }
    }
}

/// Document-facing values for an applied theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: Theme,
    /// Value for the `data-theme` attribute on `<html>`.
    pub attribute: &'static str,
    /// Text for every theme indicator icon.
    pub icon: &'static str,
    /// Text for the mobile toggle label.
    pub mobile_label: &'static str,
}

impl From<Theme> for ThemeView {
    fn from(theme: Theme) -> Self {
        Self { theme, attribute: theme.as_str(), icon: theme.toggle_icon(), mobile_label: theme.mobile_label() }
    }
}

/// Resolve the startup theme from a stored value.
pub fn resolve_initial(stored: Option<&str>, fallback: Theme) -> Theme {
    stored.and_then(Theme::parse).unwrap_or(fallback)
}

/// Current theme plus the store that remembers it.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    storage_key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Read the stored preference and apply the resolved theme.
    ///
    /// The resolved theme is written back to storage, so a first visit
    /// records the fallback.
    pub fn initialize(store: S, storage_key: &str, fallback: Theme) -> (Self, ThemeView) {
        let stored = store.load(storage_key);
        let initial = resolve_initial(stored.as_deref(), fallback);
        log::debug!("initial theme {} (stored: {stored:?})", initial.as_str());

        let mut manager = Self { store, storage_key: storage_key.to_owned(), current: initial };
        let view = manager.apply(initial);
        (manager, view)
    }

    /// Make `theme` current and persist it.
    pub fn apply(&mut self, theme: Theme) -> ThemeView {
        self.store.save(&self.storage_key, theme.as_str());
        self.current = theme;
        ThemeView::from(theme)
    }

    /// Switch to the opposite theme.
    pub fn toggle(&mut self) -> ThemeView {
        let next = self.current.toggled();
        log::info!("theme toggled to {}", next.as_str());
        self.apply(next)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
