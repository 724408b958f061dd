use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    config::AppConfig,
    pages::{AttendancePage, DashboardPage, EmployeesPage, NotFoundPage},
    state::notification::provide_notifications,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

pub fn mount_app(config: AppConfig) {
    mount_to_body(move || view! { <App config=config /> });
}

/// Provides the resolved config, the API client and the notification slot,
/// then routes inside the shell.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(&config));
    provide_context(config);
    provide_notifications();

    view! {
        <Title text="HRMS Lite" />
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=DashboardPage />
                    <Route path="/employees" view=EmployeesPage />
                    <Route path="/attendance" view=AttendancePage />
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </Layout>
        </Router>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{provide_router_integration, render_to_string};

    fn render_at(path: &'static str) -> String {
        render_to_string(move || {
            provide_router_integration(path);
            view! { <App config=AppConfig::default() /> }
        })
    }

    #[test]
    fn root_renders_dashboard_inside_shell() {
        let html = render_at("/");
        assert!(html.contains("HRMS Lite"));
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Loading dashboard..."));
    }

    #[test]
    fn each_route_renders_its_page() {
        assert!(render_at("/employees").contains("Employee Management"));
        assert!(render_at("/attendance").contains("Attendance Management"));
    }

    #[test]
    fn unknown_route_shows_not_found_with_link_home() {
        let html = render_at("/payroll");
        assert!(html.contains("Page not found"));
        assert!(html.contains("Back to Dashboard"));
    }
}
