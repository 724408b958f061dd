use super::{
    repository::EmployeesRepository,
    utils::{validate_employee, EmployeeDraft, EmployeeFieldErrors},
};
use crate::{
    api::{ApiError, Employee, NewEmployee},
    state::{
        config::use_api_client,
        form::Submission,
        notification::use_notifications,
        view_state::ViewState,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AddEmployeeForm {
    pub open: RwSignal<bool>,
    pub draft: RwSignal<EmployeeDraft>,
    pub errors: RwSignal<EmployeeFieldErrors>,
    pub submission: Submission,
}

impl AddEmployeeForm {
    fn new() -> Self {
        Self {
            open: create_rw_signal(false),
            draft: create_rw_signal(EmployeeDraft::default()),
            errors: create_rw_signal(EmployeeFieldErrors::default()),
            submission: Submission::new(),
        }
    }

    /// Opens with a blank draft.
    pub fn show(&self) {
        self.draft.set(EmployeeDraft::default());
        self.errors.set(EmployeeFieldErrors::default());
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
pub struct DeleteDialog {
    pub target: RwSignal<Option<Employee>>,
    pub deleting: RwSignal<bool>,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub add_form: AddEmployeeForm,
    pub delete_dialog: DeleteDialog,
    pub create_action: Action<NewEmployee, ()>,
    pub delete_action: Action<Employee, ()>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let repository = EmployeesRepository::new_with_client(Rc::new(use_api_client()));
        let notifications = use_notifications();
        let reload = create_rw_signal(0u32);

        let repo_for_list = repository.clone();
        let employees_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo_for_list.clone();
                async move {
                    let result = repo.fetch_employees().await;
                    if let Err(err) = &result {
                        log::error!("Failed to load employees: {}", err);
                    }
                    result
                }
            },
        );

        let add_form = AddEmployeeForm::new();
        let delete_dialog = DeleteDialog {
            target: create_rw_signal(None),
            deleting: create_rw_signal(false),
        };

        let repo_for_create = repository.clone();
        let create_action = create_action(move |payload: &NewEmployee| {
            let repo = repo_for_create.clone();
            let payload = payload.clone();
            async move {
                let outcome = repo.create_employee(payload).await;
                if add_form.submission.finish(outcome).is_some() {
                    add_form.open.set(false);
                    notifications.success("Employee added successfully!");
                    bump(reload);
                }
            }
        });

        let repo_for_delete = repository;
        let delete_action = leptos::create_action(move |employee: &Employee| {
            let repo = repo_for_delete.clone();
            let employee_id = employee.employee_id.clone();
            async move {
                let outcome = repo.delete_employee(employee_id).await;
                delete_dialog.deleting.set(false);
                delete_dialog.target.set(None);
                match outcome {
                    Ok(_) => {
                        notifications.success("Employee deleted successfully.");
                        bump(reload);
                    }
                    Err(err) => {
                        log::error!("Failed to delete employee: {}", err);
                        notifications.error(err.message);
                    }
                }
            }
        });

        Self {
            reload,
            employees_resource,
            add_form,
            delete_dialog,
            create_action,
            delete_action,
        }
    }

    pub fn view_state(&self) -> ViewState<Vec<Employee>> {
        ViewState::from_list(
            self.employees_resource.loading().get(),
            self.employees_resource.get(),
        )
    }

    pub fn refresh(&self) {
        bump(self.reload);
    }

    /// Validates the draft and submits it. Returns whether a request was sent.
    pub fn submit_new_employee(&self) -> bool {
        let draft = self.add_form.draft.get_untracked();
        let payload = match validate_employee(&draft) {
            Ok(payload) => payload,
            Err(errors) => {
                self.add_form.errors.set(errors);
                return false;
            }
        };
        self.add_form.errors.set(EmployeeFieldErrors::default());
        if !self.add_form.submission.try_begin() {
            return false;
        }
        self.create_action.dispatch(payload);
        true
    }

    pub fn request_delete(&self, employee: Employee) {
        self.delete_dialog.target.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        if !self.delete_dialog.deleting.get_untracked() {
            self.delete_dialog.target.set(None);
        }
    }

    pub fn confirm_delete(&self) {
        if self.delete_dialog.deleting.get_untracked() {
            return;
        }
        if let Some(employee) = self.delete_dialog.target.get_untracked() {
            self.delete_dialog.deleting.set(true);
            self.delete_action.dispatch(employee);
        }
    }
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
