use crate::state::notification::{
    run_lifecycle, use_notifications, NotificationKind, NotificationPhase,
};
use leptos::*;

/// Renders the app-wide notification slot and drives its timers.
#[component]
pub fn ToastHost() -> impl IntoView {
    let center = use_notifications();
    let current = center.current();
    let current_id = create_memo(move |_| current.get().map(|n| n.id));

    create_effect(move |_| {
        if let Some(id) = current_id.get() {
            spawn_local(run_lifecycle(center, id, |duration| {
                gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32)
            }));
        }
    });

    view! {
        <div class="fixed bottom-6 right-6 z-[80]" aria-live="polite">
            {move || current.get().map(|notification| {
                let tone = match notification.kind {
                    NotificationKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
                    NotificationKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
                };
                let motion = match notification.phase {
                    NotificationPhase::Visible => "opacity-100 translate-y-0",
                    NotificationPhase::Leaving => "opacity-0 translate-y-2",
                };
                view! {
                    <div
                        class=format!("flex items-center gap-2 rounded-lg border px-4 py-3 shadow-lg transition-all duration-300 {} {}", tone, motion)
                        role="status"
                    >
                        <span aria-hidden="true">{notification.kind.icon()}</span>
                        <span class="text-sm font-medium">{notification.message}</span>
                    </div>
                }
            })}
        </div>
    }
}
