use leptos::ev::KeyboardEvent;
use leptos::*;

/// Overlay dialog. Clicking the backdrop or pressing Escape requests a close,
/// unless `dismiss_disabled` is set (e.g. while a submission is in flight).
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] dismiss_disabled: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let dismiss_disabled = Signal::derive(move || dismiss_disabled.get());
    let children = store_value(children);
    let request_close = move || {
        if !dismiss_disabled.get_untracked() {
            on_close.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-[70] flex items-center justify-center p-4"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        request_close();
                    }
                }
            >
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| request_close()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                >
                    <h3 class="text-lg font-semibold text-fg">{move || title.get()}</h3>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
