use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    Accent,
    Success,
    Danger,
    Info,
}

impl CardTone {
    fn classes(&self) -> &'static str {
        match self {
            CardTone::Accent => "border-brand-200 text-brand-600",
            CardTone::Success => "border-status-success-border text-status-success-text",
            CardTone::Danger => "border-status-error-border text-status-error-text",
            CardTone::Info => "border-status-info-border text-status-info-text",
        }
    }
}

#[component]
pub fn SummaryCard(
    icon: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    tone: CardTone,
) -> impl IntoView {
    view! {
        <div class=format!(
            "relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border shadow-sm {}",
            tone.classes()
        )>
            <div class="text-2xl" aria-hidden="true">{icon}</div>
            <p class="mt-3 text-3xl font-extrabold text-fg">{move || value.get()}</p>
            <p class="mt-1 text-xs font-bold uppercase tracking-widest">{label}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn summary_card_renders_value_and_label() {
        let html = render_to_string(|| {
            view! { <SummaryCard icon="👥" label="Total Employees" value="42" tone=CardTone::Accent /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("42"));
        assert!(html.contains("border-brand-200"));
    }
}
