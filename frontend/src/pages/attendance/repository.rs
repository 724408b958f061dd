use super::utils::RecordsQuery;
use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, MarkAttendance};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        Ok(self.client.list_employees().await?.employees)
    }

    /// No employee selected means no records and no request.
    pub async fn load_records(&self, query: &RecordsQuery) -> Result<Vec<AttendanceRecord>, ApiError> {
        let Some(employee_id) = query.employee_id.as_deref() else {
            return Ok(Vec::new());
        };
        let list = self
            .client
            .list_attendance(employee_id, query.from, query.to)
            .await?;
        Ok(list.records)
    }

    pub async fn mark(&self, payload: MarkAttendance) -> Result<AttendanceRecord, ApiError> {
        self.client.mark_attendance(&payload).await
    }
}
