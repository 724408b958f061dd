use crate::api::NewEmployee;
use regex::Regex;
use std::sync::OnceLock;

/// Raw text of the Add Employee form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFieldErrors {
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// Messages in form order.
    pub fn messages(&self) -> Vec<&str> {
        [
            &self.employee_id,
            &self.full_name,
            &self.email,
            &self.department,
        ]
        .into_iter()
        .filter_map(|message| message.as_deref())
        .collect()
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Collects every violation; on success returns the trimmed payload.
pub fn validate_employee(draft: &EmployeeDraft) -> Result<NewEmployee, EmployeeFieldErrors> {
    let email = draft.email.trim();
    let errors = EmployeeFieldErrors {
        employee_id: required(&draft.employee_id, "Employee ID is required"),
        full_name: required(&draft.full_name, "Full name is required"),
        email: required(email, "Email is required").or_else(|| {
            (!is_valid_email(email)).then(|| "Invalid email format".to_string())
        }),
        department: required(&draft.department, "Department is required"),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewEmployee {
        employee_id: draft.employee_id.trim().to_string(),
        full_name: draft.full_name.trim().to_string(),
        email: email.to_string(),
        department: draft.department.trim().to_string(),
    })
}
