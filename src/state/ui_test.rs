use super::*;

// =============================================================
// Toast queue
// =============================================================

#[test]
fn toast_ids_increase() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Success, "uno");
    let second = state.push_toast(ToastKind::Error, "dos");
    assert!(second > first);
}

#[test]
fn toasts_keep_insertion_order() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Success, "uno");
    state.push_toast(ToastKind::Error, "dos");
    let messages: Vec<_> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["uno", "dos"]);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Success, "uno");
    state.push_toast(ToastKind::Error, "dos");

    state.dismiss_toast(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "dos");
}

#[test]
fn dismiss_of_an_expired_id_is_harmless() {
    let mut state = UiState::default();
    let id = state.push_toast(ToastKind::Success, "uno");
    state.dismiss_toast(id);
    state.dismiss_toast(id);
    assert!(state.toasts.is_empty());
}
