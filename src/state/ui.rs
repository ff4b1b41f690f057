#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// UI state: transient toast notifications and the dark-mode flag.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl UiState {
    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Drop the toast with the given id, if still queued.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_DURATION_MS: u64 = 4000;

/// Queue a success toast that auto-expires.
pub fn notify_success(ui: RwSignal<UiState>, message: impl Into<String>) {
    notify(ui, ToastKind::Success, message.into());
}

/// Queue an error toast that auto-expires.
pub fn notify_error(ui: RwSignal<UiState>, message: impl Into<String>) {
    notify(ui, ToastKind::Error, message.into());
}

fn notify(ui: RwSignal<UiState>, kind: ToastKind, message: String) {
    let mut id = 0;
    ui.update(|state| id = state.push_toast(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        ui.update(|state| state.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
