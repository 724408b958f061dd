use super::{
    repository::AttendanceRepository,
    utils::{validate_mark, AttendanceFieldErrors, AttendanceStats, RecordsQuery},
};
use crate::{
    api::{ApiError, AttendanceRecord, AttendanceStatus, Employee, MarkAttendance},
    state::{
        config::{use_api_client, use_app_config},
        form::Submission,
        notification::use_notifications,
        view_state::{RequestSequencer, Sequenced, ViewState},
    },
    utils::time::{format_date_input, today_in},
};
use chrono_tz::Tz;
use leptos::*;
use std::rc::Rc;

pub type RecordsResponse = Sequenced<Result<Vec<AttendanceRecord>, ApiError>>;

#[derive(Clone, Copy)]
pub struct MarkAttendanceForm {
    pub open: RwSignal<bool>,
    pub date: RwSignal<String>,
    pub status: RwSignal<AttendanceStatus>,
    pub errors: RwSignal<AttendanceFieldErrors>,
    pub submission: Submission,
    time_zone: Tz,
}

impl MarkAttendanceForm {
    fn new(time_zone: Tz) -> Self {
        Self {
            open: create_rw_signal(false),
            date: create_rw_signal(format_date_input(today_in(time_zone))),
            status: create_rw_signal(AttendanceStatus::default()),
            errors: create_rw_signal(AttendanceFieldErrors::default()),
            submission: Submission::new(),
            time_zone,
        }
    }

    /// Opens with today's date, read at open time, and `Present`.
    pub fn show(&self) {
        self.date.set(format_date_input(today_in(self.time_zone)));
        self.status.set(AttendanceStatus::default());
        self.errors.set(AttendanceFieldErrors::default());
        self.submission.reset();
        self.open.set(true);
    }

    pub fn cancel(&self) {
        if !self.submission.submitting.get_untracked() {
            self.open.set(false);
        }
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub employees_reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub selected: RwSignal<Option<String>>,
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub records_reload: RwSignal<u32>,
    pub records_resource: Resource<(RecordsQuery, u32), RecordsResponse>,
    pub mark_form: MarkAttendanceForm,
    pub mark_action: Action<MarkAttendance, ()>,
    sequencer: StoredValue<RequestSequencer>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let time_zone = use_app_config().time_zone;
        let repository = AttendanceRepository::new_with_client(Rc::new(use_api_client()));
        let notifications = use_notifications();

        let employees_reload = create_rw_signal(0u32);
        let repo_for_employees = repository.clone();
        let employees_resource = create_resource(
            move || employees_reload.get(),
            move |_| {
                let repo = repo_for_employees.clone();
                async move {
                    let result = repo.fetch_employees().await;
                    if let Err(err) = &result {
                        log::error!("Failed to load employees: {}", err);
                    }
                    result
                }
            },
        );

        let selected = create_rw_signal(None::<String>);
        let date_from = create_rw_signal(String::new());
        let date_to = create_rw_signal(String::new());
        let records_reload = create_rw_signal(0u32);
        let sequencer = store_value(RequestSequencer::new());

        let query = create_memo(move |_| {
            RecordsQuery::new(selected.get(), &date_from.get(), &date_to.get())
        });
        let repo_for_records = repository.clone();
        let records_resource = create_resource(
            move || (query.get(), records_reload.get()),
            move |(query, _)| {
                let repo = repo_for_records.clone();
                let ticket = sequencer.with_value(RequestSequencer::issue);
                async move {
                    let value = repo.load_records(&query).await;
                    if let Err(err) = &value {
                        log::error!("Failed to load attendance records: {}", err);
                    }
                    Sequenced { ticket, value }
                }
            },
        );

        let mark_form = MarkAttendanceForm::new(time_zone);
        let repo_for_mark = repository;
        let mark_action = create_action(move |payload: &MarkAttendance| {
            let repo = repo_for_mark.clone();
            let payload = payload.clone();
            async move {
                let outcome = repo.mark(payload).await;
                if mark_form.submission.finish(outcome).is_some() {
                    mark_form.open.set(false);
                    notifications.success("Attendance marked successfully!");
                    records_reload.update(|value| *value = value.wrapping_add(1));
                }
            }
        });

        Self {
            employees_reload,
            employees_resource,
            selected,
            date_from,
            date_to,
            records_reload,
            records_resource,
            mark_form,
            mark_action,
            sequencer,
        }
    }

    pub fn employees_state(&self) -> ViewState<Vec<Employee>> {
        ViewState::from_list(
            self.employees_resource.loading().get(),
            self.employees_resource.get(),
        )
    }

    pub fn selected_employee(&self) -> Option<Employee> {
        let id = self.selected.get()?;
        self.employees_resource
            .get()
            .and_then(Result::ok)
            .and_then(|employees| employees.into_iter().find(|e| e.employee_id == id))
    }

    /// Records of the latest request only; an older response reads as loading.
    pub fn records_state(&self) -> ViewState<Vec<AttendanceRecord>> {
        let outcome = self
            .records_resource
            .get()
            .and_then(|response| self.sequencer.with_value(|s| s.accept(response)));
        ViewState::from_list(self.records_resource.loading().get(), outcome)
    }

    pub fn stats(&self) -> AttendanceStats {
        match self.records_state() {
            ViewState::Populated(records) => AttendanceStats::from_records(&records),
            _ => AttendanceStats::default(),
        }
    }

    /// Takes the option value verbatim; the empty placeholder clears the selection.
    pub fn select_employee(&self, employee_id: String) {
        self.selected
            .set((!employee_id.is_empty()).then_some(employee_id));
    }

    pub fn has_filters(&self) -> bool {
        !self.date_from.get().is_empty() || !self.date_to.get().is_empty()
    }

    pub fn clear_filters(&self) {
        self.date_from.set(String::new());
        self.date_to.set(String::new());
    }

    pub fn retry_employees(&self) {
        self.employees_reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn retry_records(&self) {
        self.records_reload.update(|value| *value = value.wrapping_add(1));
    }

    /// Returns whether a request was sent.
    pub fn submit_mark(&self) -> bool {
        let Some(employee_id) = self.selected.get_untracked() else {
            return false;
        };
        let date = self.mark_form.date.get_untracked();
        let payload = match validate_mark(&employee_id, &date, self.mark_form.status.get_untracked()) {
            Ok(payload) => payload,
            Err(errors) => {
                self.mark_form.errors.set(errors);
                return false;
            }
        };
        self.mark_form.errors.set(AttendanceFieldErrors::default());
        if !self.mark_form.submission.try_begin() {
            return false;
        }
        self.mark_action.dispatch(payload);
        true
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
