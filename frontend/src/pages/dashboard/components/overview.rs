use crate::{api::DashboardSummary, pages::dashboard::utils::overview_hint};
use leptos::*;

#[component]
pub fn QuickOverview(summary: DashboardSummary) -> impl IntoView {
    let hint = overview_hint(&summary);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-2">
            <h3 class="text-base font-semibold text-fg">"Quick Overview"</h3>
            <p class="text-sm text-fg-muted leading-relaxed">
                "Welcome to HRMS Lite. Use the sidebar to navigate between Employee Management and Attendance Tracking."
            </p>
            {hint.map(|hint| view! { <p class="text-sm font-medium text-brand-600">{hint}</p> })}
        </div>
    }
}
