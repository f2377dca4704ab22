use super::*;

#[test]
fn defaults_match_page_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.scrolled_threshold_px, 50.0);
    assert_eq!(config.active_section_offset_px, 100.0);
    assert_eq!(config.notification_dwell_ms, 5000);
    assert_eq!(config.notification_exit_ms, 400);
    assert_eq!(config.reveal, RevealConfig::default());
}

#[test]
fn from_json_overrides_only_given_keys() {
    let config = SiteConfig::from_json(r#"{"notificationDwellMs": 3000, "reveal": {"once": false}}"#).unwrap();
    assert_eq!(config.notification_dwell_ms, 3000);
    assert_eq!(config.notification_exit_ms, 400);
    assert!(!config.reveal.once);
    assert_eq!(config.reveal.duration, 800);
}

#[test]
fn from_json_accepts_default_theme_name() {
    let config = SiteConfig::from_json(r#"{"defaultTheme": "light"}"#).unwrap();
    assert_eq!(config.default_theme, Theme::Light);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(SiteConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    assert!(SiteConfig::from_json(r#"{"notificationDwellMs": "soon"}"#).is_err());
}

#[test]
fn from_json_or_default_falls_back() {
    assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("[1, 2")), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some(r#"{"themeStorageKey": "k"}"#)).theme_storage_key, "k");
}
