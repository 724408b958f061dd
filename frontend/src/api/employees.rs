use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, DeleteEmployeeResponse, Employee, EmployeeList, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<EmployeeList, ApiError> {
        self.fetch_json(self.request(Method::GET, "/api/employees"))
            .await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        let path = format!("/api/employees/{}", encode_segment(employee_id));
        self.fetch_json(self.request(Method::GET, &path)).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        self.fetch_json(self.request(Method::POST, "/api/employees").json(payload))
            .await
    }

    pub async fn delete_employee(
        &self,
        employee_id: &str,
    ) -> Result<DeleteEmployeeResponse, ApiError> {
        let path = format!("/api/employees/{}", encode_segment(employee_id));
        self.fetch_json_or_default(self.request(Method::DELETE, &path))
            .await
    }
}
