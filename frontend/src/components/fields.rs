use leptos::*;

fn control_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full rounded-md border border-status-error-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-status-error-border"
    } else {
        "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
    }
}

/// Labelled text input with a per-field validation message.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-xs font-semibold text-fg-muted">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class=move || control_class(error.with(Option::is_some))
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="text-xs text-status-error-text">{message}</p>
            })}
        </label>
    }
}

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-xs font-semibold text-fg-muted">{label}</span>
            <input
                type="date"
                class=move || control_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="text-xs text-status-error-text">{message}</p>
            })}
        </label>
    }
}
