use crate::{
    api::{AttendanceStatus, Employee},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        fields::DateField,
        modal::Modal,
    },
    pages::attendance::view_model::MarkAttendanceForm,
};
use leptos::*;

#[component]
pub fn MarkAttendanceModal(
    form: MarkAttendanceForm,
    #[prop(into)] employee: Signal<Option<Employee>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submitting = form.submission.submitting;
    let errors = form.errors;

    view! {
        <Modal
            is_open=form.open
            title="Mark Attendance"
            on_close=on_cancel
            dismiss_disabled=submitting
        >
            {move || employee.get().map(|employee| view! {
                <p class="text-sm text-fg-muted">
                    "Recording attendance for "
                    <strong class="text-fg">{employee.full_name}</strong>
                    {format!(" ({})", employee.employee_id)}
                </p>
            })}
            <InlineErrorMessage error=form.submission.error />
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <DateField
                    label="Date"
                    value=form.date
                    on_input=Callback::new(move |value| form.date.set(value))
                    error={Signal::derive(move || errors.with(|e| e.date.clone()))}
                />
                <label class="block space-y-1">
                    <span class="text-xs font-semibold text-fg-muted">"Status"</span>
                    <select
                        class="w-full border border-form-control-border bg-form-control-bg text-form-control-text rounded-md px-3 py-2 text-sm"
                        prop:value={move || form.status.get().as_str()}
                        on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                form.status.set(status);
                            }
                        }
                    >
                        {AttendanceStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option
                                    value=status.as_str()
                                    selected=move || form.status.get() == status
                                >
                                    {format!("{} {}", status.icon(), status)}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
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
                        {move || if submitting.get() { "Saving..." } else { "Mark Attendance" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
