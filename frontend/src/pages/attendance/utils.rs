use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee, MarkAttendance},
    utils::time::parse_date_input,
};
use chrono::NaiveDate;

/// Everything the records fetch depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordsQuery {
    pub employee_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordsQuery {
    pub fn new(employee_id: Option<String>, from: &str, to: &str) -> Self {
        Self {
            employee_id,
            from: parse_date_input(from),
            to: parse_date_input(to),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceStats {
    pub present: usize,
    pub absent: usize,
    pub total: usize,
    /// Whole percentage of present records; 0 for an empty set.
    pub rate: u32,
}

impl AttendanceStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let total = records.len();
        let present = records
            .iter()
            .filter(|record| record.status == AttendanceStatus::Present)
            .count();
        let rate = if total == 0 {
            0
        } else {
            (present as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            present,
            absent: total - present,
            total,
            rate,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceFieldErrors {
    pub date: Option<String>,
}

impl AttendanceFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }
}

pub fn validate_mark(
    employee_id: &str,
    date: &str,
    status: AttendanceStatus,
) -> Result<MarkAttendance, AttendanceFieldErrors> {
    match parse_date_input(date) {
        Some(date) => Ok(MarkAttendance {
            employee_id: employee_id.to_string(),
            date,
            status,
        }),
        None => Err(AttendanceFieldErrors {
            date: Some("Date is required".to_string()),
        }),
    }
}

/// "Jane Doe (EMP001)"
pub fn employee_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordId;

    fn record(id: i64, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: RecordId::Number(id),
            employee_id: "EMP001".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, id as u32).unwrap(),
            status,
            created_at: "2025-01-01T09:00:00".into(),
        }
    }

    fn records(present: usize, absent: usize) -> Vec<AttendanceRecord> {
        let mut all = Vec::new();
        for i in 0..present {
            all.push(record(i as i64 + 1, AttendanceStatus::Present));
        }
        for i in 0..absent {
            all.push(record((present + i) as i64 + 1, AttendanceStatus::Absent));
        }
        all
    }

    #[test]
    fn empty_set_has_zero_rate() {
        assert_eq!(AttendanceStats::from_records(&[]), AttendanceStats::default());
    }

    #[test]
    fn present_plus_absent_is_total_and_rate_rounds() {
        for (present, absent, rate) in [(1, 0, 100), (0, 3, 0), (2, 1, 67), (1, 2, 33), (1, 1, 50), (5, 3, 63)] {
            let stats = AttendanceStats::from_records(&records(present, absent));
            assert_eq!(stats.present + stats.absent, stats.total);
            assert_eq!(stats.present, present);
            assert_eq!(stats.rate, rate, "{present} present / {absent} absent");
        }
    }

    #[test]
    fn half_rounds_up() {
        // 1 of 8 is 12.5%
        let stats = AttendanceStats::from_records(&records(1, 7));
        assert_eq!(stats.rate, 13);
    }

    #[test]
    fn mark_requires_a_date() {
        assert_eq!(
            validate_mark("EMP001", "", AttendanceStatus::Present)
                .unwrap_err()
                .date
                .as_deref(),
            Some("Date is required")
        );
        let payload = validate_mark("EMP001", "2025-03-04", AttendanceStatus::Absent).unwrap();
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(payload.status, AttendanceStatus::Absent);
    }

    #[test]
    fn query_parses_blank_bounds_as_absent() {
        let query = RecordsQuery::new(Some("EMP001".into()), "2025-01-01", "");
        assert_eq!(query.from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(query.to.is_none());
    }

    #[test]
    fn label_combines_name_and_id() {
        let employee = Employee {
            employee_id: "EMP001".into(),
            full_name: "Jane Doe".into(),
            email: "jane@company.com".into(),
            department: "Engineering".into(),
            created_at: None,
        };
        assert_eq!(employee_label(&employee), "Jane Doe (EMP001)");
    }
}
