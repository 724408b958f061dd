use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] small: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let size = if small { "px-3 py-1.5 text-xs" } else { "px-4 py-2 text-sm" };
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {} {}",
                    size,
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get()
            {..attributes}
        >
            {children()}
        </button>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <div class="flex flex-col justify-center items-center gap-3 p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <p class="text-sm text-fg-muted">{text}</p>
        </div>
    }
}
