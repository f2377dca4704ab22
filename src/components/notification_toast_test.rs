use super::*;
use crate::state::notification::NotificationState;

#[test]
fn toast_style_uses_kind_background() {
    let success = toast_style(NotificationKind::Success, NotificationPhase::Entering);
    let error = toast_style(NotificationKind::Error, NotificationPhase::Entering);
    assert!(success.contains("background: #10b981;"));
    assert!(error.contains("background: #ef4444;"));
}

#[test]
fn toast_style_switches_animation_on_exit() {
    let entering = toast_style(NotificationKind::Success, NotificationPhase::Entering);
    let exiting = toast_style(NotificationKind::Success, NotificationPhase::Exiting);
    assert!(entering.contains("animation: slideInRight 0.4s ease forwards;"));
    assert!(exiting.contains("animation: slideOutRight 0.4s ease forwards;"));
}

#[test]
fn keyframes_define_both_animations() {
    assert!(TOAST_KEYFRAMES.contains("@keyframes slideInRight"));
    assert!(TOAST_KEYFRAMES.contains("@keyframes slideOutRight"));
}

#[test]
fn phase_for_follows_current_token() {
    let mut state = NotificationState::default();
    let first = state.show("a", NotificationKind::Success, 0.0).token;
    assert_eq!(phase_for(state.current(), first), NotificationPhase::Entering);
    state.begin_exit(first);
    assert_eq!(phase_for(state.current(), first), NotificationPhase::Exiting);
    let second = state.show("b", NotificationKind::Error, 0.0).token;
    assert_eq!(phase_for(state.current(), first), NotificationPhase::Exiting);
    assert_eq!(phase_for(state.current(), second), NotificationPhase::Entering);
    assert_eq!(phase_for(None, second), NotificationPhase::Exiting);
}
