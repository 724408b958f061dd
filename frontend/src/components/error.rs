use crate::components::common::{Button, ButtonVariant};
use leptos::*;

/// Page-level failure with an optional retry.
#[component]
pub fn ErrorState(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg bg-status-error-bg border border-status-error-border text-status-error-text space-y-2" role="alert">
            <div class="text-3xl" aria-hidden="true">"⚠️"</div>
            <h3 class="font-semibold">"Something went wrong"</h3>
            <p class="text-sm">{message}</p>
            {on_retry.map(|retry| view! {
                <Button variant=ButtonVariant::Secondary small=true on:click=move |_| retry.call(())>
                    "Try Again"
                </Button>
            })}
        </div>
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2" role="alert">
                <p class="text-sm">"❌ "{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
