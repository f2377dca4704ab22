use super::*;

#[test]
fn default_matches_page_animation_settings() {
    let config = RevealConfig::default();
    assert_eq!(config.duration, 800);
    assert_eq!(config.easing, "ease-out-cubic");
    assert!(config.once);
    assert_eq!(config.offset, 50);
    assert_eq!(config.delay, 0);
    assert!(!config.disable);
}

#[test]
fn serializes_with_library_option_names() {
    let json = serde_json::to_value(RevealConfig::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "duration": 800,
            "easing": "ease-out-cubic",
            "once": true,
            "offset": 50,
            "delay": 0,
            "disable": false,
        })
    );
}

#[test]
fn partial_json_keeps_defaults() {
    let config: RevealConfig = serde_json::from_str(r#"{"duration": 400}"#).unwrap();
    assert_eq!(config.duration, 400);
    assert_eq!(config.easing, "ease-out-cubic");
}
