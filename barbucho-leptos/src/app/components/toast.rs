use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::app::global_state::GlobalState;

pub const TOAST_DISMISS_DELAY: Duration = Duration::from_millis(4_000);

/// Notification surface. Renders whatever [`GlobalState::notify`] posted
/// and takes it down again after a fixed delay.
#[component]
pub fn Toast() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let notification = global_state.notification;
    let dismiss_timer: StoredValue<Option<TimeoutHandle>> = store_value(None);

    on_cleanup(move || {
        if let Some(handle) = dismiss_timer.get_value() {
            handle.clear();
        }
    });

    create_effect(move |_| {
        if notification.with(|n| n.is_none()) {
            return;
        }
        // a new toast restarts the countdown
        if let Some(handle) = dismiss_timer.get_value() {
            handle.clear();
        }
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                let _ = notification.try_set(None);
            },
            TOAST_DISMISS_DELAY,
        ) {
            let _ = dismiss_timer.try_set_value(Some(handle));
        }
    });

    view! {
        <Show when=move || notification.with(|n| n.is_some())>
            <div class="fixed bottom-6 right-6 z-[200] glass-card border border-neon-cyan/30 px-6 py-4 max-w-sm">
                <p class="font-display font-semibold">
                    {move || notification.with(|n| n.as_ref().map(|n| n.title.clone()).unwrap_or_default())}
                </p>
                <p class="text-sm text-warm-white/60 mt-1">
                    {move || notification.with(|n| n.as_ref().map(|n| n.description.clone()).unwrap_or_default())}
                </p>
            </div>
        </Show>
    }
}
