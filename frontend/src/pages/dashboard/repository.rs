use crate::api::{ApiClient, ApiError, DashboardSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.client.get_dashboard_summary().await
    }
}
