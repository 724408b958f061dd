use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, AttendanceList, AttendanceRecord, DashboardSummary, MarkAttendance},
};

impl ApiClient {
    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.fetch_json(self.request(Method::POST, "/api/attendance").json(payload))
            .await
    }

    pub async fn list_attendance(
        &self,
        employee_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<AttendanceList, ApiError> {
        let path = format!("/api/attendance/{}", encode_segment(employee_id));
        let params = range_params(from, to);

        let mut request = self.request(Method::GET, &path);
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.fetch_json(request).await
    }

    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.fetch_json(self.request(Method::GET, "/api/attendance/summary"))
            .await
    }
}

fn range_params(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(from) = from {
        params.push(("date_from", from.format("%Y-%m-%d").to_string()));
    }
    if let Some(to) = to {
        params.push(("date_to", to.format("%Y-%m-%d").to_string()));
    }
    params
}
