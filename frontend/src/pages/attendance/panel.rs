use crate::{
    api::{AttendanceRecord, Employee},
    components::{
        common::{Button, LoadingSpinner},
        empty_state::EmptyState,
        error::ErrorState,
        layout::TopBar,
    },
    pages::attendance::{
        components::{
            AttendanceStatsCards, DateFilters, EmployeeSelector, MarkAttendanceModal, RecordsTable,
        },
        view_model::use_attendance_view_model,
    },
    state::view_state::ViewState,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let has_selection = move || vm.selected.with(Option::is_some);

    view! {
        <div>
            <TopBar title="Attendance Management">
                <Show when=has_selection>
                    <Button on:click=move |_| vm.mark_form.show()>"+ Mark Attendance"</Button>
                </Show>
            </TopBar>
            <div class="p-6 space-y-6">
                {move || match vm.employees_state() {
                    ViewState::Loading => {
                        view! { <LoadingSpinner text="Loading employees..." /> }.into_view()
                    }
                    ViewState::Error(message) => view! {
                        <ErrorState message=message on_retry=Callback::new(move |_| vm.retry_employees()) />
                    }
                    .into_view(),
                    ViewState::Empty => view! {
                        <EmptyState
                            icon="👥"
                            title="No employees found"
                            description="Add employees first before managing attendance."
                        />
                    }
                    .into_view(),
                    ViewState::Populated(employees) => view! {
                        <EmployeeSelector
                            employees=employees
                            selected=vm.selected
                            on_select=Callback::new(move |id| vm.select_employee(id))
                        />
                        <SelectionContent />
                    }
                    .into_view(),
                }}
            </div>
            <MarkAttendanceModal
                form=vm.mark_form
                employee=Signal::derive(move || vm.selected_employee())
                on_submit=Callback::new(move |_| {
                    vm.submit_mark();
                })
                on_cancel=Callback::new(move |_| vm.mark_form.cancel())
            />
        </div>
    }
}

#[component]
fn SelectionContent() -> impl IntoView {
    let vm = use_attendance_view_model();

    move || match vm.selected_employee() {
        None => view! {
            <EmptyState
                icon="👆"
                title="Select an employee"
                description="Choose an employee from the dropdown above to view or mark their attendance."
            />
        }
        .into_view(),
        Some(employee) => view! {
            <AttendanceStatsCards stats=Signal::derive(move || vm.stats()) />
            <DateFilters
                date_from=vm.date_from
                date_to=vm.date_to
                on_clear=Callback::new(move |_| vm.clear_filters())
            />
            <RecordsContent
                employee=employee
                state=Signal::derive(move || vm.records_state())
                on_retry=Callback::new(move |_| vm.retry_records())
            />
        }
        .into_view(),
    }
}

#[component]
pub fn RecordsContent(
    employee: Employee,
    #[prop(into)] state: Signal<ViewState<Vec<AttendanceRecord>>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let name = employee.full_name;
    move || match state.get() {
        ViewState::Loading => view! { <LoadingSpinner text="Loading records..." /> }.into_view(),
        ViewState::Error(message) => {
            view! { <ErrorState message=message on_retry=on_retry /> }.into_view()
        }
        ViewState::Empty => view! {
            <EmptyState
                icon="📋"
                title="No attendance records"
                description=format!("No records found for {name}. Click \"Mark Attendance\" to add one.")
            />
        }
        .into_view(),
        ViewState::Populated(records) => {
            view! { <RecordsTable employee_name=name.clone() records=records /> }.into_view()
        }
    }
}
