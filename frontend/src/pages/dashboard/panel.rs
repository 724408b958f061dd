use crate::{
    components::{common::LoadingSpinner, error::ErrorState, layout::TopBar},
    pages::dashboard::{
        components::{QuickOverview, SummaryCards},
        view_model::use_dashboard_view_model,
    },
    state::view_state::ViewState,
    utils::time::format_long_date,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let today = format!("📅 {}", format_long_date(vm.today));

    view! {
        <div>
            <TopBar title="Dashboard" />
            <div class="p-6 space-y-6">
                <p class="text-sm text-fg-muted">{today}</p>
                {move || match vm.view_state() {
                    ViewState::Loading => view! { <LoadingSpinner text="Loading dashboard..." /> }.into_view(),
                    ViewState::Error(message) => view! {
                        <ErrorState message=message on_retry=Callback::new(move |_| vm.refresh()) />
                    }
                    .into_view(),
                    ViewState::Empty => ().into_view(),
                    ViewState::Populated(summary) => view! {
                        <SummaryCards summary=summary.clone() />
                        <QuickOverview summary=summary />
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::config::AppConfig;
    use crate::test_support::ssr::{render_to_string, settle, with_local_runtime_async};
    use crate::utils::time::today_in;
    use serde_json::json;

    #[test]
    fn page_shows_date_banner_and_loading_state() {
        let html = render_to_string(|| view! { <DashboardPage /> });
        assert!(html.contains("Dashboard"));
        assert!(html.contains(&format_long_date(today_in(AppConfig::default().time_zone))));
        assert!(html.contains("Loading dashboard..."));
    }

    #[test]
    fn loaded_zero_summary_renders_cards_and_guidance() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/summary");
                then.status(200).json_body(json!({
                    "total_employees": 0,
                    "present_today": 0,
                    "absent_today": 0,
                    "attendance_rate": 0
                }));
            });
            provide_context(server.client());
            let vm = use_dashboard_view_model();
            assert!(settle(|| vm.view_state().data().is_some()).await);

            let html = view! { <DashboardPage /> }.into_view().render_to_string().to_string();
            assert!(html.contains("Total Employees"));
            assert!(html.contains("Get started by adding your first employee from the Employees page."));
            runtime.dispose();
        });
    }
}
