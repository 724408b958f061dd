use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /api/employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "✅",
            AttendanceStatus::Absent => "❌",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The API hands out integer ids; anything else is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: String,
}

/// Payload for `POST /api/attendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceList {
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_employees: u32,
    pub present_today: u32,
    pub absent_today: u32,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    Network,
    Http { status: u16 },
    Decode,
    Validation,
}

/// Every failure the client surfaces, whatever its origin, ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ApiErrorKind::Network,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ApiErrorKind::Http { status },
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ApiErrorKind::Decode,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ApiErrorKind::Validation,
        }
    }

    /// Builds the error for a non-success response, preferring the server's `detail`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .and_then(detail_message);
        match detail {
            Some(message) => Self::http(status, message),
            None => Self::http(status, format!("Request failed ({status})")),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Http { status } => Some(status),
            _ => None,
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn detail_message(detail: serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(message) if !message.trim().is_empty() => Some(message),
        // Validation failures arrive as a list of `{ loc, msg, type }` entries.
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
