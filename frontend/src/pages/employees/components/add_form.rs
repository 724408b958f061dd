use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        fields::TextField,
        modal::Modal,
    },
    pages::employees::{utils::EmployeeDraft, view_model::AddEmployeeForm},
};
use leptos::*;

#[component]
pub fn AddEmployeeModal(
    form: AddEmployeeForm,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submitting = form.submission.submitting;
    let errors = form.errors;

    view! {
        <Modal
            is_open=form.open
            title="Add New Employee"
            on_close=on_cancel
            dismiss_disabled=submitting
        >
            <InlineErrorMessage error=form.submission.error />
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <TextField
                        label="Employee ID"
                        placeholder="e.g. EMP001"
                        value={draft_value(form, |d| &d.employee_id)}
                        on_input={draft_setter(form, |d, v| d.employee_id = v)}
                        error={Signal::derive(move || errors.with(|e| e.employee_id.clone()))}
                    />
                    <TextField
                        label="Full Name"
                        placeholder="e.g. John Doe"
                        value={draft_value(form, |d| &d.full_name)}
                        on_input={draft_setter(form, |d, v| d.full_name = v)}
                        error={Signal::derive(move || errors.with(|e| e.full_name.clone()))}
                    />
                </div>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <TextField
                        label="Email Address"
                        placeholder="e.g. john@company.com"
                        input_type="email"
                        value={draft_value(form, |d| &d.email)}
                        on_input={draft_setter(form, |d, v| d.email = v)}
                        error={Signal::derive(move || errors.with(|e| e.email.clone()))}
                    />
                    <TextField
                        label="Department"
                        placeholder="e.g. Engineering"
                        value={draft_value(form, |d| &d.department)}
                        on_input={draft_setter(form, |d, v| d.department = v)}
                        error={Signal::derive(move || errors.with(|e| e.department.clone()))}
                    />
                </div>
                <div class="flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=submitting
                        attr:type="button"
                        on:click=move |_| on_cancel.call(())
                    >
                        "Cancel"
                    </Button>
                    <Button disabled=submitting attr:type="submit">
                        {move || if submitting.get() { "Adding..." } else { "Add Employee" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

fn draft_value(form: AddEmployeeForm, read: fn(&EmployeeDraft) -> &String) -> Signal<String> {
    Signal::derive(move || form.draft.with(|draft| read(draft).clone()))
}

fn draft_setter(form: AddEmployeeForm, write: fn(&mut EmployeeDraft, String)) -> Callback<String> {
    Callback::new(move |value: String| form.draft.update(|draft| write(draft, value)))
}
