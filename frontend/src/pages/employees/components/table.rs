use crate::{
    api::Employee,
    components::common::{Button, ButtonVariant},
};
use leptos::*;

#[component]
pub fn EmployeeTable(employees: Vec<Employee>, on_delete: Callback<Employee>) -> impl IntoView {
    let total = format!("{} total", employees.len());
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="flex items-center justify-between px-6 py-4 border-b border-border">
                <h3 class="text-base font-semibold text-fg">"All Employees"</h3>
                <span class="rounded-full bg-surface-muted px-3 py-1 text-xs font-medium text-fg-muted">{total}</span>
            </div>
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee ID"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Name"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Email"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Department"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let target = employee.clone();
                            view! {
                                <tr>
                                    <td class="px-6 py-4 font-mono text-sm text-brand-600">{employee.employee_id}</td>
                                    <td class="px-6 py-4 text-sm font-medium text-fg">{employee.full_name}</td>
                                    <td class="px-6 py-4 text-sm text-fg-muted">{employee.email}</td>
                                    <td class="px-6 py-4">
                                        <span class="rounded-full bg-surface-muted px-2 py-0.5 text-xs text-fg">{employee.department}</span>
                                    </td>
                                    <td class="px-6 py-4">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            small=true
                                            on:click=move |_| on_delete.call(target.clone())
                                        >
                                            "Delete"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn table_lists_every_employee_with_total_badge() {
        let html = render_to_string(|| {
            view! {
                <EmployeeTable
                    employees=vec![employee("EMP001", "Jane Doe"), employee("EMP002", "John Roe")]
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("All Employees"));
        assert!(html.contains("2 total"));
        assert!(html.contains("EMP001"));
        assert!(html.contains("John Roe"));
        assert!(html.contains("emp002@company.com"));
        assert_eq!(html.matches("Delete").count(), 2);
    }
}
