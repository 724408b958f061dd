use crate::{api::Employee, components::confirm_dialog::ConfirmDialog};
use leptos::*;

#[component]
pub fn DeleteEmployeeDialog(
    #[prop(into)] target: Signal<Option<Employee>>,
    #[prop(into)] deleting: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = move || target.with(|t| t.as_ref().map(|e| e.full_name.clone()).unwrap_or_default());
    let id = move || {
        target.with(|t| {
            t.as_ref()
                .map(|e| format!("({})", e.employee_id))
                .unwrap_or_default()
        })
    };

    view! {
        <ConfirmDialog
            is_open=Signal::derive(move || target.with(Option::is_some))
            title="Confirm Deletion"
            confirm_label="Delete Employee"
            pending_label="Deleting..."
            pending=deleting
            destructive=true
            on_confirm=on_confirm
            on_cancel=on_cancel
        >
            <p class="text-sm text-fg">
                "Are you sure you want to delete "
                <span class="font-semibold">{name}</span>
                " "
                {id}
                "?"
            </p>
            <p class="text-sm text-status-error-text">
                "This will also remove all their attendance records."
            </p>
        </ConfirmDialog>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn dialog_names_target_and_warns_about_cascade() {
        let html = render_to_string(|| {
            let target = create_rw_signal(Some(employee("EMP007", "Grace Hopper")));
            view! {
                <DeleteEmployeeDialog
                    target=target
                    deleting=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Confirm Deletion"));
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("(EMP007)"));
        assert!(html.contains("This will also remove all their attendance records."));
    }

    #[test]
    fn dialog_is_hidden_without_target() {
        let html = render_to_string(|| {
            view! {
                <DeleteEmployeeDialog
                    target=Signal::derive(|| None)
                    deleting=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Confirm Deletion"));
    }
}
