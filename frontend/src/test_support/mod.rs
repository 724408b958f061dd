#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee, RecordId};
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    pub fn employee(id: &str, name: &str) -> Employee {
        Employee {
            employee_id: id.into(),
            full_name: name.into(),
            email: format!("{}@company.com", id.to_lowercase()),
            department: "Engineering".into(),
            created_at: Some("2025-01-01T09:00:00".into()),
        }
    }

    pub fn employee_json(id: &str, name: &str) -> Value {
        json!({
            "id": 1,
            "employee_id": id,
            "full_name": name,
            "email": format!("{}@company.com", id.to_lowercase()),
            "department": "Engineering",
            "created_at": "2025-01-01T09:00:00"
        })
    }

    pub fn record(id: i64, employee_id: &str, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: RecordId::Number(id),
            employee_id: employee_id.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date"),
            status,
            created_at: format!("{date}T09:15:00"),
        }
    }

    pub fn record_json(id: i64, employee_id: &str, date: &str, status: &str) -> Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "date": date,
            "status": status,
            "created_at": format!("{date}T09:15:00")
        })
    }
}
