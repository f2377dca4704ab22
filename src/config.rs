//! Site behavior configuration.
//!
//! Every tunable constant lives here with its default. The host page may
//! override any subset with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "notificationDwellMs": 3000, "reveal": { "once": false } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::navigation::{DEFAULT_ACTIVE_SECTION_OFFSET_PX, DEFAULT_SCROLLED_THRESHOLD_PX};
use crate::state::notification::{DEFAULT_DWELL_MS, DEFAULT_EXIT_MS};
use crate::state::theme::Theme;
use crate::util::reveal::RevealConfig;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// localStorage key holding the theme preference.
    pub theme_storage_key: String,
    /// Theme used when nothing is stored.
    pub default_theme: Theme,
    /// Header gets `.scrolled` beyond this offset.
    pub scrolled_threshold_px: f64,
    /// Look-ahead added to the scroll offset when picking the active section.
    pub active_section_offset_px: f64,
    pub notification_dwell_ms: u32,
    pub notification_exit_ms: u32,
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            active_section_offset_px: DEFAULT_ACTIVE_SECTION_OFFSET_PX,
            notification_dwell_ms: DEFAULT_DWELL_MS,
            notification_exit_ms: DEFAULT_EXIT_MS,
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or mistyped values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional override block, falling back to defaults on error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => {
                log::debug!("site config overrides applied");
                config
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}
