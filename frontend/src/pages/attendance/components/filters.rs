use crate::components::{
    common::{Button, ButtonVariant},
    fields::DateField,
};
use leptos::*;

/// From/To bounds for the records query; blank means unbounded.
#[component]
pub fn DateFilters(
    date_from: RwSignal<String>,
    date_to: RwSignal<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let has_filters =
        move || date_from.with(|v| !v.is_empty()) || date_to.with(|v| !v.is_empty());

    view! {
        <div class="flex flex-wrap items-end gap-4 bg-surface-elevated shadow rounded-lg p-4">
            <div class="w-48">
                <DateField
                    label="From"
                    value=date_from
                    on_input=Callback::new(move |value| date_from.set(value))
                />
            </div>
            <div class="w-48">
                <DateField
                    label="To"
                    value=date_to
                    on_input=Callback::new(move |value| date_to.set(value))
                />
            </div>
            <Show when=has_filters>
                <Button
                    variant=ButtonVariant::Secondary
                    small=true
                    on:click=move |_| on_clear.call(())
                >
                    "Clear Filters"
                </Button>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(from: &'static str, to: &'static str) -> String {
        render_to_string(move || {
            view! {
                <DateFilters
                    date_from=create_rw_signal(from.to_string())
                    date_to=create_rw_signal(to.to_string())
                    on_clear=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn clear_button_only_appears_with_a_bound() {
        assert!(!render("", "").contains("Clear Filters"));
        assert!(render("2025-01-01", "").contains("Clear Filters"));
        assert!(render("", "2025-01-31").contains("Clear Filters"));
    }
}
