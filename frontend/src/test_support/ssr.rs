use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Lets `<Router>` render on the host as if the browser were at `path`.
pub fn provide_router_integration(path: &str) {
    provide_context(RouterIntegrationContext::new(ServerIntegration {
        path: format!("http://hrms.test{}", path),
    }));
}

/// Runs `f` on a current-thread runtime inside a `LocalSet`, so
/// `spawn_local` from resources and view models can make progress.
pub fn with_local_runtime_async<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, f())
}

/// Yields to the local executor until `done` holds or the attempts run out.
pub async fn settle(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..50 {
        if done() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    done()
}
