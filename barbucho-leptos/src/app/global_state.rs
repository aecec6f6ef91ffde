use leptos::create_rw_signal;
use leptos::RwSignal;
use leptos::SignalSet;

/// One user-facing toast: a title plus a short description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug)]
pub struct GlobalState {
    pub nav_open: RwSignal<bool>,
    pub nav_tran: RwSignal<bool>,
    pub notification: RwSignal<Option<Notification>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            nav_open: create_rw_signal(false),
            nav_tran: create_rw_signal(true),
            notification: create_rw_signal(None),
        }
    }

    /// Replaces whatever toast is currently up. Safe to call from
    /// deferred continuations, a disposed signal is a no-op.
    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>) {
        let _ = self.notification.try_set(Some(Notification {
            title: title.into(),
            description: description.into(),
        }));
    }
}
