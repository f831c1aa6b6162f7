use super::*;

#[test]
fn toast_state_default_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "Saved");
    let second = state.push(ToastKind::Error, "Failed");
    assert_ne!(first, second);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Saved");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(ToastKind::Success, "a");
    let gone = state.push(ToastKind::Error, "b");
    state.dismiss(&gone);
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn error_toasts_outlive_success_toasts() {
    assert_eq!(ToastKind::Success.lifetime(), Duration::from_secs(2));
    assert_eq!(ToastKind::Error.lifetime(), Duration::from_secs(4));
}
