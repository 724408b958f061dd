use crate::components::toast::ToastHost;
use leptos::*;
use leptos_router::*;

pub const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/", "📊", "Dashboard"),
    ("/employees", "👥", "Employees"),
    ("/attendance", "📋", "Attendance"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 shrink-0 bg-surface-elevated border-r border-border min-h-screen">
            <div class="px-6 py-5 border-b border-border">
                <h1 class="text-xl font-semibold text-fg">"HRMS Lite"</h1>
                <span class="text-xs text-fg-muted">"Admin Panel"</span>
            </div>
            <nav class="px-3 py-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|(path, icon, label)| {
                        view! {
                            <A
                                href=*path
                                exact={*path == "/"}
                                active_class="bg-action-ghost-bg-hover text-fg"
                                class="flex items-center gap-3 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                <span aria-hidden="true">{*icon}</span>
                                <span>{*label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Page heading with optional actions on the right.
#[component]
pub fn TopBar(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between h-16 px-6 bg-surface-elevated border-b border-border">
            <h2 class="text-lg font-semibold text-fg">{title}</h2>
            {children.map(|children| view! { <div class="flex items-center gap-2">{children()}</div> })}
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-surface">
            <Sidebar/>
            <main class="flex-1 min-w-0">
                {children()}
            </main>
            <ToastHost/>
        </div>
    }
}
