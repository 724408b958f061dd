use crate::{
    api::Employee,
    components::{
        common::{Button, LoadingSpinner},
        empty_state::EmptyState,
        error::ErrorState,
        layout::TopBar,
    },
    pages::employees::{
        components::{AddEmployeeModal, DeleteEmployeeDialog, EmployeeTable},
        view_model::use_employees_view_model,
    },
    state::view_state::ViewState,
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();

    view! {
        <div>
            <TopBar title="Employee Management">
                <Button on:click=move |_| vm.add_form.show()>"+ Add Employee"</Button>
            </TopBar>
            <div class="p-6">
                <EmployeesContent
                    state=Signal::derive(move || vm.view_state())
                    on_retry=Callback::new(move |_| vm.refresh())
                    on_delete=Callback::new(move |employee| vm.request_delete(employee))
                />
            </div>
            <AddEmployeeModal
                form=vm.add_form
                on_submit=Callback::new(move |_| {
                    vm.submit_new_employee();
                })
                on_cancel=Callback::new(move |_| vm.add_form.cancel())
            />
            <DeleteEmployeeDialog
                target=vm.delete_dialog.target
                deleting=vm.delete_dialog.deleting
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}

#[component]
pub fn EmployeesContent(
    #[prop(into)] state: Signal<ViewState<Vec<Employee>>>,
    on_retry: Callback<()>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    move || match state.get() {
        ViewState::Loading => view! { <LoadingSpinner text="Loading employees..." /> }.into_view(),
        ViewState::Error(message) => {
            view! { <ErrorState message=message on_retry=on_retry /> }.into_view()
        }
        ViewState::Empty => view! {
            <EmptyState
                icon="👤"
                title="No employees yet"
                description="Add your first employee to get started with the HRMS."
            />
        }
        .into_view(),
        ViewState::Populated(employees) => {
            view! { <EmployeeTable employees=employees on_delete=on_delete /> }.into_view()
        }
    }
}
