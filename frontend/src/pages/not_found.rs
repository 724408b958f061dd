use crate::components::{empty_state::EmptyState, layout::TopBar};
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div>
            <TopBar title="Page Not Found" />
            <div class="p-6 space-y-4">
                <EmptyState
                    icon="🧭"
                    title="Page not found"
                    description="The page you are looking for does not exist."
                />
                <div class="text-center">
                    <A href="/" class="text-sm font-medium text-brand-600 hover:underline">
                        "Back to Dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}
