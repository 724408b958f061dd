use crate::{api::Employee, pages::attendance::utils::employee_label};
use leptos::*;

#[component]
pub fn EmployeeSelector(
    employees: Vec<Employee>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4">
            <label class="block space-y-1">
                <span class="text-xs font-semibold text-fg-muted">"Select Employee"</span>
                <select
                    class="w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded-md px-3 py-2 text-sm"
                    prop:value={move || selected.get().unwrap_or_default()}
                    on:change=move |ev| on_select.call(event_target_value(&ev))
                >
                    <option value="">"-- Choose an employee --"</option>
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let id = employee.employee_id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || selected.with(|current| current.as_deref() == Some(id.as_str()))
                            };
                            view! {
                                <option value=id selected=is_selected>{employee_label(&employee)}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn selector_lists_placeholder_and_labelled_options() {
        let html = render_to_string(|| {
            view! {
                <EmployeeSelector
                    employees=vec![employee("EMP001", "Jane Doe"), employee("EMP002", "John Roe")]
                    selected=Signal::derive(|| Some("EMP002".to_string()))
                    on_select=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("-- Choose an employee --"));
        assert!(html.contains("Jane Doe (EMP001)"));
        assert!(html.contains("John Roe (EMP002)"));
        assert!(html.contains("value=\"EMP002\""));
    }
}
